//! Axes: one plot cell inside a figure

use glam::DVec2;

use super::axis::{Axis, Side};
use super::container::{Container, Node};
use super::defaults::{AXES_FILL, PLOT_PADDING, VALUE_LABELS};
use super::layout::{bar_layout, extent, format_ticks, headroom_scale, linspace, vmap};
use super::marks::{Bar, ScatterPoint};
use super::primitive::Primitive;
use super::transform::placement;
use crate::errors::ChartError;

/// A white plot area whose unit square charts are drawn in.
#[derive(Debug, Clone)]
pub struct Axes {
    primitive: Primitive,
    tick_width: i32,
}

impl Axes {
    /// An axes at `dims = [x, y, w, h]` of `parent`'s unit square.
    pub(crate) fn new(parent: &Primitive, dims: &[f64], tick_width: i32) -> Result<Self, ChartError> {
        let &[x, y, w, h] = dims else {
            return Err(ChartError::InvalidDimensions {
                expected: "4 (x, y, w, h)",
                got: dims.len(),
            });
        };
        Ok(Self::at(parent, [x, y, w, h], tick_width))
    }

    pub(crate) fn at(parent: &Primitive, [x, y, w, h]: [f64; 4], tick_width: i32) -> Self {
        let primitive = Primitive::child_of(parent, placement(DVec2::new(x, y), DVec2::new(w, h)))
            .with_origin(x, y)
            .with_size(w, h)
            .with_fill(AXES_FILL);
        Self {
            primitive,
            tick_width,
        }
    }

    /// Bar chart of `values`, one bar per value, labeled with `labels` or
    /// with 1-based ordinals when none are given.
    ///
    /// The tallest bar reaches 0.9 of the axes height. A bottom axis labels
    /// the categories and a left axis shows five values from 0 to the maximum.
    pub fn bar_plot(&mut self, labels: Option<&[&str]>, values: &[f64]) -> Result<(), ChartError> {
        if let Some(labels) = labels {
            if labels.len() != values.len() {
                return Err(ChartError::DimensionMismatch {
                    left: "labels",
                    left_len: labels.len(),
                    right: "values",
                    right_len: values.len(),
                });
            }
        }
        let (_, max) = extent(values, "values")?;
        let scale = headroom_scale(max);
        let layout = bar_layout(values.len());
        crate::log::debug!(bars = values.len(), max, width = layout.width, "bar plot");

        for (&center, &value) in layout.centers.iter().zip(values) {
            let bar = Bar::new(&self.primitive, center, 0.0, layout.width, value / scale, value);
            self.primitive.push(bar);
        }

        let categories: Vec<String> = match labels {
            Some(labels) => labels.iter().map(|s| (*s).to_owned()).collect(),
            None => (1..=values.len()).map(|i| i.to_string()).collect(),
        };
        self.add_axis(Side::Bottom, &categories, layout.label_padding());

        let ticks = format_ticks(&linspace(0.0, max, VALUE_LABELS));
        self.add_axis(Side::Left, &ticks, PLOT_PADDING);
        Ok(())
    }

    /// Scatter chart of the points `(xs[i], ys[i])`.
    ///
    /// X values are spread over the padded width from 0 to the largest x, Y
    /// values are scaled so the largest reaches 0.9 of the height. All four
    /// sides get an axis: bottom and top with one label per point, left and
    /// right with five.
    pub fn scatter_plot(&mut self, xs: &[f64], ys: &[f64]) -> Result<(), ChartError> {
        if xs.len() != ys.len() {
            return Err(ChartError::DimensionMismatch {
                left: "xs",
                left_len: xs.len(),
                right: "ys",
                right_len: ys.len(),
            });
        }
        let (min_x, max_x) = extent(xs, "xs")?;
        let (min_y, max_y) = extent(ys, "ys")?;
        let scale = headroom_scale(max_y);
        crate::log::debug!(points = xs.len(), max_x, max_y, "scatter plot");

        for (&x, &y) in xs.iter().zip(ys) {
            let mx = vmap(x, 0.0, max_x, PLOT_PADDING, 1.0 - PLOT_PADDING);
            let point = ScatterPoint::new(&self.primitive, mx, y / scale);
            self.primitive.push(point);
        }

        let x_ticks = format_ticks(&linspace(min_x, max_x, xs.len()));
        let y_ticks = format_ticks(&linspace(min_y, max_y, VALUE_LABELS));
        self.add_axis(Side::Bottom, &x_ticks, PLOT_PADDING);
        self.add_axis(Side::Top, &x_ticks, PLOT_PADDING);
        self.add_axis(Side::Left, &y_ticks, PLOT_PADDING);
        self.add_axis(Side::Right, &y_ticks, PLOT_PADDING);
        Ok(())
    }

    fn add_axis(&mut self, side: Side, texts: &[String], padding: f64) {
        let mut axis = Axis::new(&self.primitive, side, self.tick_width);
        axis.labels(texts, padding);
        self.primitive.push(axis);
    }

    pub fn bars(&self) -> impl Iterator<Item = &Bar> {
        self.primitive.children().iter().filter_map(Node::as_kind)
    }

    pub fn points(&self) -> impl Iterator<Item = &ScatterPoint> {
        self.primitive.children().iter().filter_map(Node::as_kind)
    }

    /// The first axis attached on `side`, if any.
    pub fn axis(&self, side: Side) -> Option<&Axis> {
        self.primitive
            .children()
            .iter()
            .filter_map(Node::as_kind::<Axis>)
            .find(|axis| axis.side() == side)
    }
}

impl Container for Axes {
    fn primitive(&self) -> &Primitive {
        &self.primitive
    }

    fn primitive_mut(&mut self) -> &mut Primitive {
        &mut self.primitive
    }

    fn kind(&self) -> &'static str {
        "Axes"
    }
}
