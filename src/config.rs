//! Explicit configuration handed to a figure when it is built.

use std::fmt;
use std::rc::Rc;

use crate::canvas::defaults;
use crate::text::TextService;

/// Settings shared by every node of one figure.
///
/// Without a text service, labels are laid out but never drawn.
#[derive(Clone)]
pub struct Config {
    text: Option<Rc<dyn TextService>>,
    tick_width: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            text: None,
            tick_width: defaults::TICK_WIDTH,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text_service(self, text: impl TextService + 'static) -> Self {
        self.with_shared_text_service(Rc::new(text))
    }

    pub fn with_shared_text_service(mut self, text: Rc<dyn TextService>) -> Self {
        self.text = Some(text);
        self
    }

    /// Tick stroke width in pixels, never below [`defaults::TICK_WIDTH`].
    pub fn with_tick_width(mut self, width: i32) -> Self {
        self.tick_width = width.max(defaults::TICK_WIDTH);
        self
    }

    pub fn text_service(&self) -> Option<&dyn TextService> {
        self.text.as_deref()
    }

    pub fn tick_width(&self) -> i32 {
        self.tick_width
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("text", &self.text.as_ref().map(|_| "TextService"))
            .field("tick_width", &self.tick_width)
            .finish()
    }
}
