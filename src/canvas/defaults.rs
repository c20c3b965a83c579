//! Default sizes, paddings and colors (normalized units unless noted)

use image::Rgba;

/// Figure size in pixels when none is given.
pub const FIGURE_WIDTH: f64 = 640.0;
pub const FIGURE_HEIGHT: f64 = 480.0;

/// Rectangle `(x, y, w, h)` of a lone Axes inside its figure.
pub const AXES_RECT: [f64; 4] = [0.1, 0.1, 0.8, 0.8];

/// Grid paddings used by `Figure::sub_axes`, as fractions of the whole figure.
pub const GRID_PAD_X: f64 = 0.12;
pub const GRID_PAD_Y: f64 = 0.08;

/// Space kept free on each side of a plot's data.
pub const PLOT_PADDING: f64 = 0.1;
/// Fraction of the axes height the largest value reaches.
pub const HEADROOM: f64 = 0.9;
/// Number of labels on a value axis.
pub const VALUE_LABELS: usize = 5;

/// Cross-axis position of labels and ticks on the bottom and left axes.
pub const LABEL_INSET: f64 = 0.4;
/// Cross-axis position of labels on the top and right axes.
pub const LABEL_OUTSET: f64 = 0.6;
/// Label text height, in axes units.
pub const LABEL_HEIGHT: f64 = 0.1;
/// Tick length, in axis units.
pub const TICK_LENGTH: f64 = 0.2;
/// Tick stroke width in pixels; also the minimum accepted.
pub const TICK_WIDTH: i32 = 2;
/// Border thickness in pixels; borders are transparent unless a stroke is set.
pub const STROKE_WIDTH: i32 = 1;
/// Scatter marker side, in axes units.
pub const MARKER_SIZE: f64 = 0.01;

pub const FIGURE_FILL: Rgba<u8> = Rgba([128, 128, 128, 255]);
pub const AXES_FILL: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const BAR_FILL: Rgba<u8> = Rgba([255, 0, 0, 255]);
pub const POINT_FILL: Rgba<u8> = Rgba([0, 128, 0, 255]);
pub const INK: Rgba<u8> = Rgba([0, 0, 0, 255]);
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);
