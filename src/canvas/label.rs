//! Text labels

use glam::DMat3;
use image::RgbaImage;

use super::container::Container;
use super::context::RenderContext;
use super::defaults::INK;
use super::primitive::Primitive;
use crate::types::Align;

/// A string anchored in its parent's unit space.
///
/// The label has no width of its own: its pixel bounds give the anchor (the
/// minimum corner) and the text height, and the typeface measures the string
/// to align it horizontally.
#[derive(Debug, Clone)]
pub struct Label {
    primitive: Primitive,
    text: String,
}

impl Label {
    pub(crate) fn new(parent: &Primitive, x: f64, y: f64, height: f64, text: &str) -> Self {
        let primitive = Primitive::child_of(parent, DMat3::IDENTITY)
            .with_origin(x, y)
            .with_size(0.0, height)
            .with_align(Align::Center, Align::Center)
            .with_fill(INK);
        Self {
            primitive,
            text: text.to_owned(),
        }
    }

    pub(crate) fn with_align(mut self, x_align: Align, y_align: Align) -> Self {
        self.primitive = self.primitive.with_align(x_align, y_align);
        self
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Container for Label {
    fn primitive(&self) -> &Primitive {
        &self.primitive
    }

    fn primitive_mut(&mut self) -> &mut Primitive {
        &mut self.primitive
    }

    fn kind(&self) -> &'static str {
        "Label"
    }

    fn text(&self) -> Option<&str> {
        Some(&self.text)
    }

    fn render(&self, dst: &mut RgbaImage, ctx: &mut RenderContext<'_>) {
        if !ctx.has_text() {
            ctx.warn_missing_text();
            return;
        }
        let bounds = self.bounds();
        if ctx.face().is_none() {
            ctx.size_face(bounds.height().max(1) as f32);
        }
        if let Some(face) = ctx.face() {
            face.draw_aligned(
                dst,
                bounds.min,
                &self.text,
                self.primitive.x_align,
                self.primitive.fill,
            );
        }
    }
}
