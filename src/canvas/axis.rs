//! Axis and Tick nodes

use glam::{DMat3, DVec2};
use image::RgbaImage;

use super::container::{Container, Node};
use super::context::RenderContext;
use super::defaults::{INK, LABEL_HEIGHT, LABEL_INSET, LABEL_OUTSET, TICK_LENGTH, TRANSPARENT};
use super::label::Label;
use super::layout::label_positions;
use super::primitive::Primitive;
use super::transform::placement;
use crate::types::{Align, PixelRect};

/// Edge of an axes an [`Axis`] is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Bottom,
    Left,
    Top,
    Right,
}

impl Side {
    /// Origin and size of the axis band, in axes unit space.
    pub fn rect(self) -> (DVec2, DVec2) {
        match self {
            Side::Bottom => (DVec2::new(0.0, -0.1), DVec2::new(1.0, 0.2)),
            Side::Left => (DVec2::new(-0.1, 0.0), DVec2::new(0.2, 1.0)),
            Side::Top => (DVec2::new(0.0, 0.9), DVec2::new(1.0, 0.2)),
            Side::Right => (DVec2::new(0.9, 0.0), DVec2::new(0.2, 1.0)),
        }
    }

    /// True for axes whose labels run left to right.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Side::Bottom | Side::Top)
    }

    /// Bottom and left axes carry ticks; top and right only mirror labels.
    pub fn has_ticks(self) -> bool {
        matches!(self, Side::Bottom | Side::Left)
    }

    fn label_align(self) -> (Align, Align) {
        match self {
            Side::Bottom => (Align::Center, Align::Trailing),
            Side::Left => (Align::Trailing, Align::Center),
            Side::Top => (Align::Center, Align::Leading),
            Side::Right => (Align::Leading, Align::Center),
        }
    }

    /// Cross-axis offset of labels (and ticks), in axis unit space.
    fn label_offset(self) -> f64 {
        if self.has_ticks() {
            LABEL_INSET
        } else {
            LABEL_OUTSET
        }
    }
}

/// A transparent band along one edge of an axes holding labels and ticks.
#[derive(Debug, Clone)]
pub struct Axis {
    primitive: Primitive,
    side: Side,
    tick_width: i32,
}

impl Axis {
    pub(crate) fn new(parent: &Primitive, side: Side, tick_width: i32) -> Self {
        let (origin, size) = side.rect();
        let primitive = Primitive::child_of(parent, placement(origin, size))
            .with_origin(origin.x, origin.y)
            .with_size(size.x, size.y)
            .with_fill(TRANSPARENT);
        Self {
            primitive,
            side,
            tick_width,
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Append one label per text, evenly spaced along the axis, each followed
    /// by a tick on sides that carry ticks.
    pub(crate) fn labels<S: AsRef<str>>(&mut self, texts: &[S], padding: f64) {
        let positions = label_positions(self.side, texts.len(), padding);
        let offset = self.side.label_offset();
        let (x_align, y_align) = self.side.label_align();
        // label height is a fixed share of the axes, expressed in this band's units
        let height = LABEL_HEIGHT / self.side.rect().1.y;

        for (text, at) in texts.iter().zip(positions) {
            let (x, y) = if self.side.is_horizontal() {
                (at, offset)
            } else {
                (offset, at)
            };
            let label = Label::new(&self.primitive, x, y, height, text.as_ref())
                .with_align(x_align, y_align);
            self.primitive.push(label);

            if self.side.has_ticks() {
                let tick = Tick::new(&self.primitive, self.side, x, y, self.tick_width);
                self.primitive.push(tick);
            }
        }
    }

    /// Labels of this axis, in order.
    pub fn label_nodes(&self) -> impl Iterator<Item = &Label> {
        self.primitive.children().iter().filter_map(Node::as_kind)
    }

    pub fn ticks(&self) -> impl Iterator<Item = &Tick> {
        self.primitive.children().iter().filter_map(Node::as_kind)
    }
}

impl Container for Axis {
    fn primitive(&self) -> &Primitive {
        &self.primitive
    }

    fn primitive_mut(&mut self) -> &mut Primitive {
        &mut self.primitive
    }

    fn kind(&self) -> &'static str {
        match self.side {
            Side::Bottom => "Axis(Bottom)",
            Side::Left => "Axis(Left)",
            Side::Top => "Axis(Top)",
            Side::Right => "Axis(Right)",
        }
    }

    /// Size the typeface used by the labels that follow, from the pixel
    /// height of the first one.
    fn render(&self, dst: &mut RgbaImage, ctx: &mut RenderContext<'_>) {
        self.primitive.paint(dst);
        let Some(first) = self.label_nodes().next() else {
            return;
        };
        if !ctx.has_text() {
            ctx.warn_missing_text();
            return;
        }
        let px = first.bounds().height().max(1);
        ctx.size_face(px as f32);
    }
}

/// A short stroke across an axis, a fixed number of pixels wide.
#[derive(Debug, Clone)]
pub struct Tick {
    primitive: Primitive,
    width: i32,
}

impl Tick {
    pub(crate) fn new(parent: &Primitive, side: Side, x: f64, y: f64, width: i32) -> Self {
        let (w, h) = if side.is_horizontal() {
            (0.0, TICK_LENGTH)
        } else {
            (TICK_LENGTH, 0.0)
        };
        let primitive = Primitive::child_of(parent, DMat3::IDENTITY)
            .with_origin(x, y)
            .with_size(w, h)
            .with_fill(INK);
        Self { primitive, width }
    }

    pub fn width(&self) -> i32 {
        self.width
    }
}

impl Container for Tick {
    fn primitive(&self) -> &Primitive {
        &self.primitive
    }

    fn primitive_mut(&mut self) -> &mut Primitive {
        &mut self.primitive
    }

    fn kind(&self) -> &'static str {
        "Tick"
    }

    /// The stroke's line, widened to the stroke width across any
    /// zero-length dimension.
    fn bounds(&self) -> PixelRect {
        let b = self.primitive.bounds();
        let dx = if b.width() == 0 { self.width } else { 0 };
        let dy = if b.height() == 0 { self.width } else { 0 };
        b.grow(dx, dy)
    }
}
