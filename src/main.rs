//! # UUTIK Report
//!
//! Builds a single navigable PDF out of a case folder of small markdown
//! files, so the whole context can be handed over as one document.
//!
//! ## Input layout
//!
//! ```text
//! ./README.md            overview, optional
//! ./situations/*.md      recorded situations, named YYYY-MM-DD-...
//! ./profiles/*.md        participant profiles
//! ```
//!
//! ## Usage
//!
//! ```sh
//! uutik_report
//! ```
//!
//! ## Architecture
//!
//! 1. **Collecting**: list and read the markdown sources in name order
//! 2. **Assembling**: concatenate them behind section separators and anchors,
//!    rewriting the overview's relative links into in-document jumps
//! 3. **Rendering**: pass the markdown and the fixed page setup to
//!    `wkhtmltopdf`, then report the file size and section counts
//!
//! The process exits non-zero when anything fails, including the renderer.

use clap::Parser;
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod assemble;
mod cli;
mod error;
mod models;
mod pipeline;
mod render;
mod sources;
mod utils;

use cli::Cli;
use render::WkhtmltopdfRenderer;

#[tokio::main]
async fn main() -> ExitCode {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("uutik_report starting up");

    let args = Cli::parse();
    debug!(root = %args.root.display(), renderer = %args.renderer, "Parsed CLI arguments");

    let renderer = WkhtmltopdfRenderer::new(args.renderer);
    let outcome = pipeline::run(&args.root, &renderer).await;

    let elapsed = start_time.elapsed();
    match outcome {
        Ok(report) => {
            info!(
                path = %report.output.display(),
                ?elapsed,
                "Execution complete"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, ?elapsed, "Report generation failed");
            ExitCode::FAILURE
        }
    }
}
