//! Text service contract and a `fontdue` backed implementation.
//!
//! The scene tree never shapes or rasterizes glyphs itself: labels hand a
//! pixel anchor and a string to a [`Typeface`], which owns measurement and
//! drawing. A [`TextService`] produces typefaces at a requested pixel size.

use std::fmt;
use std::path::Path;

use fontdue::{Font, FontSettings};
use glam::IVec2;
use image::{Pixel, Rgba, RgbaImage};

use crate::errors::TextError;
use crate::types::Align;

/// Produces typefaces sized in pixels.
pub trait TextService {
    fn face(&self, px: f32) -> Box<dyn Typeface + '_>;
}

/// A sized font able to measure and draw single-line strings.
pub trait Typeface {
    /// Advance width of `text` in pixels.
    fn measure(&self, text: &str) -> f32;

    /// Distance from the top of a line to its baseline, in pixels.
    fn ascent(&self) -> f32;

    /// Draw `text` with its baseline starting at `baseline`.
    fn draw(&self, dst: &mut RgbaImage, baseline: IVec2, text: &str, color: Rgba<u8>);

    /// Draw `text` hanging below `anchor`, aligned horizontally on it.
    fn draw_aligned(
        &self,
        dst: &mut RgbaImage,
        anchor: IVec2,
        text: &str,
        align: Align,
        color: Rgba<u8>,
    ) {
        let width = self.measure(text);
        let dx = match align {
            Align::Leading => 0.0,
            Align::Center => -width / 2.0,
            Align::Trailing => -width,
        };
        let baseline = anchor + IVec2::new(dx.round() as i32, self.ascent().round() as i32);
        self.draw(dst, baseline, text, color);
    }
}

/// Text service over one TrueType/OpenType font.
pub struct FontService {
    font: Font,
}

impl FontService {
    /// Parse a font from memory.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TextError> {
        let font = Font::from_bytes(bytes, FontSettings::default()).map_err(|message| {
            TextError::Parse {
                message: message.to_string(),
            }
        })?;
        Ok(Self { font })
    }

    /// Read and parse a font file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TextError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| TextError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(&bytes)
    }
}

impl fmt::Debug for FontService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontService")
            .field("name", &self.font.name())
            .finish()
    }
}

impl TextService for FontService {
    fn face(&self, px: f32) -> Box<dyn Typeface + '_> {
        Box::new(FontFace {
            font: &self.font,
            px: px.max(1.0),
        })
    }
}

struct FontFace<'a> {
    font: &'a Font,
    px: f32,
}

impl Typeface for FontFace<'_> {
    fn measure(&self, text: &str) -> f32 {
        text.chars()
            .map(|ch| self.font.metrics(ch, self.px).advance_width)
            .sum()
    }

    fn ascent(&self) -> f32 {
        self.font
            .horizontal_line_metrics(self.px)
            .map(|m| m.ascent)
            .unwrap_or(self.px * 0.8)
    }

    fn draw(&self, dst: &mut RgbaImage, baseline: IVec2, text: &str, color: Rgba<u8>) {
        let (w, h) = (dst.width() as i32, dst.height() as i32);
        let mut pen = baseline.x as f32;
        for ch in text.chars() {
            let (metrics, coverage) = self.font.rasterize(ch, self.px);
            // fontdue's ymin is the offset from the baseline up to the bitmap's bottom row
            let left = pen.round() as i32 + metrics.xmin;
            let top = baseline.y - metrics.height as i32 - metrics.ymin;
            for (i, &alpha) in coverage.iter().enumerate() {
                if alpha == 0 {
                    continue;
                }
                let x = left + (i % metrics.width) as i32;
                let y = top + (i / metrics.width) as i32;
                if x < 0 || y < 0 || x >= w || y >= h {
                    continue;
                }
                let mut ink = color;
                ink[3] = (u16::from(color[3]) * u16::from(alpha) / 255) as u8;
                dst.get_pixel_mut(x as u32, y as u32).blend(&ink);
            }
            pen += metrics.advance_width;
        }
    }
}
