//! Layout rules for charts, as pure functions over normalized units.

use super::axis::Side;
use super::defaults::{GRID_PAD_X, GRID_PAD_Y, HEADROOM, PLOT_PADDING};
use crate::errors::ChartError;

/// Horizontal placement of `n` bars inside an axes.
#[derive(Debug, Clone, PartialEq)]
pub struct BarLayout {
    /// Width of one bar.
    pub width: f64,
    /// Gap between two neighbouring bars.
    pub space: f64,
    /// Center of each bar, left to right.
    pub centers: Vec<f64>,
}

impl BarLayout {
    /// Padding to hand to a label axis so its labels sit under the bar centers.
    pub fn label_padding(&self) -> f64 {
        PLOT_PADDING + self.width / 2.0
    }
}

/// Bars of width `(2 - 4p) / (3n - 1)` separated by half a bar, with `p` of
/// free space on both sides.
pub fn bar_layout(n: usize) -> BarLayout {
    if n == 0 {
        return BarLayout {
            width: 0.0,
            space: 0.0,
            centers: Vec::new(),
        };
    }
    let width = (2.0 - 4.0 * PLOT_PADDING) / (3.0 * n as f64 - 1.0);
    let space = width / 2.0;
    let centers = (0..n)
        .map(|i| PLOT_PADDING + width / 2.0 + i as f64 * (width + space))
        .collect();
    BarLayout {
        width,
        space,
        centers,
    }
}

/// Cells `[x, y, w, h]` of a `rows × cols` grid over the unit square, bottom
/// row first and left to right within a row.
///
/// The outer margins and the gaps between cells are all [`GRID_PAD_X`]
/// horizontally and [`GRID_PAD_Y`] vertically.
pub fn grid_cells(rows: usize, cols: usize) -> Result<Vec<[f64; 4]>, ChartError> {
    let invalid = ChartError::InvalidGrid { rows, cols };
    if rows == 0 || cols == 0 {
        return Err(invalid);
    }
    let w = (1.0 - (cols + 1) as f64 * GRID_PAD_X) / cols as f64;
    let h = (1.0 - (rows + 1) as f64 * GRID_PAD_Y) / rows as f64;
    if w <= 0.0 || h <= 0.0 {
        return Err(invalid);
    }

    let mut cells = Vec::with_capacity(rows * cols);
    for r in 0..rows {
        let y = GRID_PAD_Y + r as f64 * (h + GRID_PAD_Y);
        for c in 0..cols {
            let x = GRID_PAD_X + c as f64 * (w + GRID_PAD_X);
            cells.push([x, y, w, h]);
        }
    }
    Ok(cells)
}

/// Positions of `n` labels along an axis of the given side.
///
/// Labels are spread evenly over `[padding, 1 - padding]`; the left axis
/// starts flush at 0 and spreads over `[0, 1 - padding]` instead. A single
/// label sits at the middle.
pub fn label_positions(side: Side, n: usize, padding: f64) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![0.5],
        _ => {
            let gaps = (n - 1) as f64;
            let (start, spacing) = match side {
                Side::Left => (0.0, (1.0 - padding) / gaps),
                _ => (padding, (1.0 - 2.0 * padding) / gaps),
            };
            (0..n).map(|i| start + i as f64 * spacing).collect()
        }
    }
}

/// Linear map of `v` from `[fmin, fmax]` onto `[tmin, tmax]`.
///
/// A degenerate source range maps everything to the middle of the target.
pub fn vmap(v: f64, fmin: f64, fmax: f64, tmin: f64, tmax: f64) -> f64 {
    if fmax == fmin {
        return (tmin + tmax) / 2.0;
    }
    tmin + (v - fmin) * (tmax - tmin) / (fmax - fmin)
}

/// `n` evenly spaced values from `start` to `stop`, both included.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n).map(|i| start + i as f64 * step).collect()
        }
    }
}

/// Smallest and largest value of a series.
pub fn extent(series: &[f64], name: &'static str) -> Result<(f64, f64), ChartError> {
    let (first, rest) = series
        .split_first()
        .ok_or(ChartError::EmptySeries { series: name })?;
    Ok(rest
        .iter()
        .fold((*first, *first), |(lo, hi), v| (lo.min(*v), hi.max(*v))))
}

/// Divisor that brings the largest value to [`HEADROOM`] of the axes height.
///
/// Series with no positive value are left unscaled.
pub fn headroom_scale(max: f64) -> f64 {
    if max > 0.0 { max / HEADROOM } else { 1.0 }
}

/// Value-axis label texts, two decimals.
pub fn format_ticks(values: &[f64]) -> Vec<String> {
    values.iter().map(|v| format!("{v:.2}")).collect()
}
