//! Bar and scatter charts rendered onto RGBA images.
//!
//! ```no_run
//! use canvasplot::{Config, Figure, FontService};
//!
//! let font = FontService::from_file("DejaVuSans.ttf")?;
//! let mut fig = Figure::with_config(640.0, 480.0, Config::new().with_text_service(font))?;
//! fig.new_axes().bar_plot(Some(&["Jan", "Feb", "Mar"]), &[3.0, 5.0, 2.0])?;
//! fig.render_image().save("bars.png")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod canvas;
pub mod config;
pub mod errors;
pub mod log;
pub mod text;
pub mod types;

use image::RgbaImage;

pub use canvas::{Axes, Container, Figure, Side, render_tree};
pub use config::Config;
pub use errors::{ChartError, TextError};
pub use text::{FontService, TextService, Typeface};
pub use types::{Align, PixelRect};

use canvas::RenderContext;
use canvas::defaults::{FIGURE_HEIGHT, FIGURE_WIDTH};

/// Paint `figure` and its whole tree into `dst`, parents before children.
pub fn render(figure: &Figure, dst: &mut RgbaImage) {
    crate::log::debug!(
        width = dst.width(),
        height = dst.height(),
        "render figure"
    );
    let mut ctx = RenderContext::from_config(figure.config());
    render_tree(figure, dst, &mut ctx);
}

/// A default-sized figure holding one bar chart, rendered.
pub fn bar_chart(
    labels: Option<&[&str]>,
    values: &[f64],
    config: Config,
) -> Result<RgbaImage, ChartError> {
    let mut fig = Figure::with_config(FIGURE_WIDTH, FIGURE_HEIGHT, config)?;
    fig.new_axes().bar_plot(labels, values)?;
    Ok(fig.render_image())
}
