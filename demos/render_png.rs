//! Render a bar chart and a grid of scatter charts to PNG files.
//!
//! Usage: `cargo run --example render_png --features tracing -- [font.ttf] [out_dir]`
//! (`CANVASPLOT_FONT` also names the font). Without a font, labels are skipped.

use canvasplot::{Config, Figure, FontService};
use miette::{IntoDiagnostic, Result};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::DEBUG.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let font = args.next().or_else(|| std::env::var("CANVASPLOT_FONT").ok());
    let out_dir = args.next().unwrap_or_else(|| ".".to_string());

    let mut config = Config::new();
    if let Some(path) = font {
        config = config.with_text_service(FontService::from_file(path)?);
    }

    let mut bars = Figure::with_config(640.0, 480.0, config.clone())?;
    bars.new_axes().bar_plot(
        Some(&["Jan", "Feb", "Mar", "Apr", "May"]),
        &[12.0, 30.5, 22.0, 8.25, 17.0],
    )?;
    save(&bars, &out_dir, "bars.png")?;

    let mut grid = Figure::with_config(800.0, 600.0, config)?;
    for (i, axes) in grid.sub_axes(2, 2)?.into_iter().enumerate() {
        let xs: Vec<f64> = (0..6).map(f64::from).collect();
        let ys: Vec<f64> = xs.iter().map(|x| (x * (i + 1) as f64).sin() + 1.5).collect();
        axes.scatter_plot(&xs, &ys)?;
    }
    save(&grid, &out_dir, "scatter_grid.png")?;

    // same tree, new size
    grid.resize(1200.0, 400.0)?;
    save(&grid, &out_dir, "scatter_grid_wide.png")?;

    Ok(())
}

fn save(fig: &Figure, dir: &str, name: &str) -> Result<()> {
    let path = std::path::Path::new(dir).join(name);
    fig.render_image().save(&path).into_diagnostic()?;
    eprintln!("wrote {}", path.display());
    Ok(())
}
