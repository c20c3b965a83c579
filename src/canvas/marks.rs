//! Data marks: bars and scatter points

use glam::DMat3;

use super::container::Container;
use super::defaults::{BAR_FILL, MARKER_SIZE, POINT_FILL};
use super::primitive::Primitive;
use crate::types::Align;

/// One bar of a bar chart, centered on its X position and rising from `y`.
#[derive(Debug, Clone)]
pub struct Bar {
    primitive: Primitive,
    value: f64,
}

impl Bar {
    pub(crate) fn new(parent: &Primitive, x: f64, y: f64, w: f64, h: f64, value: f64) -> Self {
        let primitive = Primitive::child_of(parent, DMat3::IDENTITY)
            .with_origin(x, y)
            .with_size(w, h)
            .with_align(Align::Center, Align::Leading)
            .with_fill(BAR_FILL);
        Self { primitive, value }
    }

    /// The datum this bar was built from.
    pub fn value(&self) -> f64 {
        self.value
    }
}

impl Container for Bar {
    fn primitive(&self) -> &Primitive {
        &self.primitive
    }

    fn primitive_mut(&mut self) -> &mut Primitive {
        &mut self.primitive
    }

    fn kind(&self) -> &'static str {
        "Bar"
    }
}

/// A small square marker centered on a data point.
#[derive(Debug, Clone)]
pub struct ScatterPoint {
    primitive: Primitive,
    x: f64,
    y: f64,
}

impl ScatterPoint {
    pub(crate) fn new(parent: &Primitive, x: f64, y: f64) -> Self {
        let primitive = Primitive::child_of(parent, DMat3::IDENTITY)
            .with_origin(x, y)
            .with_size(MARKER_SIZE, MARKER_SIZE)
            .with_align(Align::Center, Align::Center)
            .with_fill(POINT_FILL);
        Self { primitive, x, y }
    }

    /// Position of the marker in axes unit space.
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl Container for ScatterPoint {
    fn primitive(&self) -> &Primitive {
        &self.primitive
    }

    fn primitive_mut(&mut self) -> &mut Primitive {
        &mut self.primitive
    }

    fn kind(&self) -> &'static str {
        "ScatterPoint"
    }
}
