//! MGRS query density overlay generator.
//!
//! Reads `<grid-ref> <count>` rows produced by an m8b query and writes a KML
//! document with one color-graded, extruded polygon per matched cell. The
//! overlay goes to standard output; logs go to standard error.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use overlay_common::color::Rgb;
use query_viz::config::VizConfig;
use query_viz::pipeline;

#[derive(Parser, Debug)]
#[command(name = "query-viz")]
#[command(about = "Render m8b query results as a KML density overlay")]
struct Args {
    /// Query result file (reads standard input if absent)
    input: Option<PathBuf>,

    /// Exclusive minimum density for a cell to be rendered
    #[arg(long, default_value = "0")]
    threshold: i64,

    /// Geodesic SW-to-NE offset in meters, slightly under the 1 km cell size
    #[arg(long, default_value = "999")]
    cell_offset: f64,

    /// Polygon height above ground in meters
    #[arg(long, default_value = "170")]
    altitude: f64,

    /// Gradient color for density 1 (name or #RRGGBB)
    #[arg(long, default_value = "blue")]
    start_color: Rgb,

    /// Gradient color for the maximum density (name or #RRGGBB)
    #[arg(long, default_value = "green")]
    end_color: Rgb,

    /// Polygon fill alpha, 0-255
    #[arg(long, default_value = "136")]
    fill_alpha: u8,

    /// Metadata lines to skip before the first record
    #[arg(long, default_value = "3")]
    header_lines: usize,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // Logs go to stderr so stdout stays a clean KML document.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config = VizConfig {
        header_lines: args.header_lines,
        threshold: args.threshold,
        cell_offset_m: args.cell_offset,
        altitude_m: args.altitude,
        gradient_start: args.start_color,
        gradient_end: args.end_color,
        fill_alpha: args.fill_alpha,
    };

    let stdout = io::stdout();
    let summary = match &args.input {
        Some(path) => {
            info!(path = %path.display(), "reading query results");
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            pipeline::run(BufReader::new(file), &config, stdout.lock())?
        }
        None => {
            info!("reading query results from standard input");
            let stdin = io::stdin();
            pipeline::run(stdin.lock(), &config, stdout.lock())?
        }
    };

    info!(
        records = summary.records,
        rendered = summary.rendered,
        filtered = summary.filtered,
        gradient_steps = summary.gradient_steps,
        "overlay complete"
    );

    Ok(())
}
