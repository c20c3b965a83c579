//! Logging for chart building and rendering.
//!
//! Debug events cover figure creation and resize, grid layout, bar and scatter
//! construction, and each render pass. A warning is emitted once per pass when
//! labels are skipped because the figure's config has no text service.
//!
//! With the `tracing` feature these are `tracing`'s own macros; without it
//! they expand to nothing and their arguments are never evaluated.

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

/// No-op stand-in for `tracing::debug!`.
#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

/// No-op stand-in for `tracing::warn!`.
#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, warn};
