//! Rendering context - state carried through one traversal

use crate::config::Config;
use crate::text::{TextService, Typeface};

/// State shared by the nodes of one render pass.
///
/// Axes sizes a typeface for the labels that follow it in the traversal, so
/// labels never need to reach back to their parent.
pub struct RenderContext<'a> {
    text: Option<&'a dyn TextService>,
    face: Option<Box<dyn Typeface + 'a>>,
    warned: bool,
}

impl<'a> RenderContext<'a> {
    pub fn new(text: Option<&'a dyn TextService>) -> Self {
        Self {
            text,
            face: None,
            warned: false,
        }
    }

    pub fn from_config(config: &'a Config) -> Self {
        Self::new(config.text_service())
    }

    /// True when labels can be drawn at all.
    pub fn has_text(&self) -> bool {
        self.text.is_some()
    }

    /// Replace the current typeface with one `px` pixels high.
    pub fn size_face(&mut self, px: f32) {
        if let Some(text) = self.text {
            self.face = Some(text.face(px));
        }
    }

    /// Report, once per pass, that labels are being skipped.
    pub(crate) fn warn_missing_text(&mut self) {
        if !self.warned {
            self.warned = true;
            crate::log::warn!("no text service configured, labels are not drawn");
        }
    }

    /// The typeface most recently sized in this pass.
    pub fn face(&self) -> Option<&(dyn Typeface + 'a)> {
        self.face.as_deref()
    }
}
