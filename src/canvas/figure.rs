//! Figure: the root of a scene tree

use image::RgbaImage;

use super::axes::Axes;
use super::container::{Container, NodeKind};
use super::defaults::{AXES_RECT, FIGURE_FILL, FIGURE_HEIGHT, FIGURE_WIDTH};
use super::layout::grid_cells;
use super::primitive::Primitive;
use super::transform::{TransformChain, pixel_scale, y_flip};
use crate::config::Config;
use crate::errors::ChartError;
use crate::types::try_extent;

/// A gray canvas of `width × height` pixels holding one or more axes.
///
/// The figure owns the root transform chain `[y_flip(h), pixel_scale(w, h)]`
/// that turns the Y-up unit square into Y-down pixels.
#[derive(Debug, Clone)]
pub struct Figure {
    primitive: Primitive,
    config: Config,
}

impl Figure {
    pub fn new(width: f64, height: f64) -> Result<Self, ChartError> {
        Self::with_config(width, height, Config::default())
    }

    pub fn with_config(width: f64, height: f64, config: Config) -> Result<Self, ChartError> {
        validate(width, height)?;
        let transforms = TransformChain::new(vec![y_flip(height), pixel_scale(width, height)]);
        let primitive = Primitive::root(transforms)
            .with_size(width, height)
            .with_fill(FIGURE_FILL);
        crate::log::debug!(width, height, "new figure");
        Ok(Self { primitive, config })
    }

    /// A figure from zero, one or two dimensions: the default size, a square,
    /// or `width × height`.
    pub fn from_dims(dims: &[f64]) -> Result<Self, ChartError> {
        match *dims {
            [] => Self::new(FIGURE_WIDTH, FIGURE_HEIGHT),
            [side] => Self::new(side, side),
            [width, height] => Self::new(width, height),
            _ => Err(ChartError::InvalidDimensions {
                expected: "0, 1 or 2",
                got: dims.len(),
            }),
        }
    }

    pub fn width(&self) -> f64 {
        self.primitive.size.x
    }

    pub fn height(&self) -> f64 {
        self.primitive.size.y
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Change the pixel size of the figure and everything below it.
    pub fn resize(&mut self, width: f64, height: f64) -> Result<(), ChartError> {
        validate(width, height)?;
        self.primitive.size.x = width;
        self.primitive.size.y = height;
        let root = self.primitive.transforms_mut();
        root.set(0, y_flip(height));
        root.set(1, pixel_scale(width, height));

        let chain = self.primitive.transforms().clone();
        for child in self.primitive.children_mut() {
            child.primitive_mut().rebase(&chain);
        }
        crate::log::debug!(width, height, "resized figure");
        Ok(())
    }

    /// One axes at the default rectangle, leaving a tenth of the figure
    /// free on every side.
    pub fn new_axes(&mut self) -> &mut Axes {
        let axes = Axes::at(&self.primitive, AXES_RECT, self.config.tick_width());
        self.primitive.attach(axes)
    }

    /// One axes at `dims = [x, y, w, h]` of the figure's unit square.
    pub fn add_axes(&mut self, dims: &[f64]) -> Result<&mut Axes, ChartError> {
        let axes = Axes::new(&self.primitive, dims, self.config.tick_width())?;
        Ok(self.primitive.attach(axes))
    }

    /// A `rows × cols` grid of axes, returned bottom row first and left to
    /// right within each row.
    pub fn sub_axes(&mut self, rows: usize, cols: usize) -> Result<Vec<&mut Axes>, ChartError> {
        let cells = grid_cells(rows, cols)?;
        crate::log::debug!(rows, cols, "grid of axes");

        let first = self.primitive.children().len();
        let tick_width = self.config.tick_width();
        for cell in cells {
            let axes = Axes::at(&self.primitive, cell, tick_width);
            self.primitive.push(axes);
        }
        Ok(self.primitive.children_mut()[first..]
            .iter_mut()
            .filter_map(Axes::from_node_mut)
            .collect())
    }

    /// Axes of this figure, in insertion order.
    pub fn axes(&self) -> impl Iterator<Item = &Axes> {
        self.primitive.children().iter().filter_map(Axes::from_node)
    }

    /// Render into a fresh buffer the size of the figure.
    pub fn render_image(&self) -> RgbaImage {
        let mut dst = RgbaImage::new(self.width().round() as u32, self.height().round() as u32);
        crate::render(self, &mut dst);
        dst
    }
}

impl Container for Figure {
    fn primitive(&self) -> &Primitive {
        &self.primitive
    }

    fn primitive_mut(&mut self) -> &mut Primitive {
        &mut self.primitive
    }

    fn kind(&self) -> &'static str {
        "Figure"
    }
}

fn validate(width: f64, height: f64) -> Result<(), ChartError> {
    for extent in [width, height] {
        try_extent(extent).map_err(|reason| ChartError::InvalidSize {
            width,
            height,
            reason,
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{NumericError, PixelRect};

    // ==================== construction tests ====================

    #[test]
    fn figure_bounds_cover_the_canvas() {
        let fig = Figure::new(200.0, 100.0).unwrap();
        assert_eq!(fig.bounds(), PixelRect::new(0, 0, 200, 100));
        assert_eq!(fig.primitive().transforms().len(), 2);
    }

    #[test]
    fn from_dims_by_arity() {
        let fig = Figure::from_dims(&[]).unwrap();
        assert_eq!((fig.width(), fig.height()), (640.0, 480.0));
        let fig = Figure::from_dims(&[300.0]).unwrap();
        assert_eq!((fig.width(), fig.height()), (300.0, 300.0));
        let fig = Figure::from_dims(&[30.0, 20.0]).unwrap();
        assert_eq!(fig.bounds(), PixelRect::new(0, 0, 30, 20));
        assert_eq!(
            Figure::from_dims(&[1.0, 2.0, 3.0]).unwrap_err(),
            ChartError::InvalidDimensions {
                expected: "0, 1 or 2",
                got: 3
            }
        );
    }

    #[test]
    fn rejects_degenerate_sizes() {
        assert!(matches!(
            Figure::new(0.0, 10.0),
            Err(ChartError::InvalidSize {
                reason: NumericError::Zero,
                ..
            })
        ));
        assert!(Figure::new(10.0, f64::NAN).is_err());
        assert!(Figure::new(-1.0, 10.0).is_err());
    }

    // ==================== resize tests ====================

    #[test]
    fn resize_resets_bounds() {
        let mut fig = Figure::new(100.0, 100.0).unwrap();
        fig.resize(250.0, 80.0).unwrap();
        assert_eq!(fig.bounds(), PixelRect::new(0, 0, 250, 80));
        fig.resize(64.0, 32.0).unwrap();
        assert_eq!(fig.bounds(), PixelRect::new(0, 0, 64, 32));
    }

    #[test]
    fn resize_moves_every_descendant() {
        let mut fig = Figure::new(100.0, 100.0).unwrap();
        fig.add_axes(&[0.0, 0.0, 1.0, 1.0])
            .unwrap()
            .bar_plot(None, &[1.0])
            .unwrap();
        fig.resize(200.0, 50.0).unwrap();

        let axes = fig.axes().next().unwrap();
        assert_eq!(axes.bounds(), PixelRect::new(0, 0, 200, 50));
        // single bar: x in [0.1, 0.9], y in [0, 0.9]
        let bar = axes.bars().next().unwrap().bounds();
        assert!((bar.min.x - 20).abs() <= 1 && (bar.max.x - 180).abs() <= 1);
        assert!((bar.min.y - 5).abs() <= 1 && bar.max.y == 50);
    }

    #[test]
    fn resize_rejects_bad_size_and_keeps_the_old_one() {
        let mut fig = Figure::new(100.0, 100.0).unwrap();
        assert!(fig.resize(f64::INFINITY, 10.0).is_err());
        assert_eq!(fig.bounds(), PixelRect::new(0, 0, 100, 100));
    }

    // ==================== axes tests ====================

    #[test]
    fn new_axes_uses_default_rect() {
        let mut fig = Figure::new(100.0, 100.0).unwrap();
        let axes = fig.new_axes();
        let b = axes.bounds();
        assert!((b.min.x - 10).abs() <= 1 && (b.max.x - 90).abs() <= 1);
        assert!((b.min.y - 10).abs() <= 1 && (b.max.y - 90).abs() <= 1);
    }

    #[test]
    fn add_axes_checks_arity() {
        let mut fig = Figure::new(100.0, 100.0).unwrap();
        assert!(fig.add_axes(&[0.5, 0.5]).is_err());
        assert_eq!(fig.axes().count(), 0);
    }

    #[test]
    fn sub_axes_grid() {
        let mut fig = Figure::new(400.0, 400.0).unwrap();
        let cells = fig.sub_axes(2, 3).unwrap();
        assert_eq!(cells.len(), 6);

        let bounds: Vec<_> = fig.axes().map(|a| a.bounds()).collect();
        // bottom row first: the first cell sits lower on screen than the fourth
        assert!(bounds[0].min.y > bounds[3].min.y);
        // left to right within a row
        assert!(bounds[0].min.x < bounds[1].min.x && bounds[1].min.x < bounds[2].min.x);
        assert_eq!(bounds[0].min.y, bounds[2].min.y);
    }

    #[test]
    fn sub_axes_returns_only_new_cells() {
        let mut fig = Figure::new(100.0, 100.0).unwrap();
        fig.new_axes();
        let mut cells = fig.sub_axes(1, 2).unwrap();
        assert_eq!(cells.len(), 2);
        cells[1].scatter_plot(&[1.0], &[1.0]).unwrap();
        assert_eq!(fig.axes().count(), 3);
        assert_eq!(fig.axes().nth(2).unwrap().points().count(), 1);
    }

    #[test]
    fn sub_axes_rejects_empty_grid() {
        let mut fig = Figure::new(100.0, 100.0).unwrap();
        assert_eq!(
            fig.sub_axes(0, 3).unwrap_err(),
            ChartError::InvalidGrid { rows: 0, cols: 3 }
        );
    }
}
