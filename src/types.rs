//! Small shared types: alignment, pixel rectangles and numeric validation.

use std::fmt;

use glam::IVec2;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Validate a pixel extent (figure width or height): finite and strictly positive.
#[inline]
pub fn try_extent(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else if val == 0.0 {
        Err(NumericError::Zero)
    } else if val < 0.0 {
        Err(NumericError::Negative)
    } else {
        Ok(val)
    }
}

/// Which edge of a node's extent its origin anchors to, per axis.
///
/// On X, `Leading` is the left edge and `Trailing` the right edge. On Y (math
/// orientation, before the figure flips it), `Leading` is the bottom edge and
/// `Trailing` the top edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Leading,
    Center,
    Trailing,
}

impl Align {
    /// The `[min, max]` interval covered by an extent of `size` anchored at `origin`.
    #[inline]
    pub fn span(self, origin: f64, size: f64) -> (f64, f64) {
        match self {
            Align::Leading => (origin, origin + size),
            Align::Center => (origin - size / 2.0, origin + size / 2.0),
            Align::Trailing => (origin - size, origin),
        }
    }
}

/// Axis-aligned rectangle in integer pixel space, `min` inclusive, `max` exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct PixelRect {
    pub min: IVec2,
    pub max: IVec2,
}

impl PixelRect {
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        PixelRect {
            min: IVec2::new(x0, y0),
            max: IVec2::new(x1, y1),
        }
    }

    /// Rectangle spanning two arbitrary corners; min/max are taken per axis.
    pub fn from_corners(a: IVec2, b: IVec2) -> Self {
        PixelRect {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn width(&self) -> i32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> i32 {
        self.max.y - self.min.y
    }

    /// True when the rectangle covers no pixel.
    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Grow to `dx` more pixels wide and `dy` more pixels high, split as
    /// evenly as possible with the odd pixel going to the max side.
    pub fn grow(self, dx: i32, dy: i32) -> Self {
        PixelRect {
            min: self.min - IVec2::new(dx / 2, dy / 2),
            max: self.max + IVec2::new(dx - dx / 2, dy - dy / 2),
        }
    }

    /// Overlap with another rectangle (possibly empty).
    pub fn intersect(self, other: PixelRect) -> Self {
        PixelRect {
            min: self.min.max(other.min),
            max: self.max.min(other.max),
        }
    }
}

impl fmt::Display for PixelRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}, {}]",
            self.min.x, self.min.y, self.max.x, self.max.y
        )
    }
}
