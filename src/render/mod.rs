//! Hand-off of the assembled markdown to a rendering backend.
//!
//! # Submodules
//!
//! - [`options`]: the fixed page, header, footer and stylesheet settings
//! - [`html`]: markdown to HTML page conversion shared by page backends
//! - [`wkhtmltopdf`]: the default backend, an external process
//!
//! Layout and pagination belong to the backend. This module only passes
//! text and options across the [`Renderer`] boundary and reports on the
//! produced file.

pub mod html;
pub mod options;
pub mod wkhtmltopdf;

pub use options::RenderOptions;
pub use wkhtmltopdf::WkhtmltopdfRenderer;

use crate::error::{RenderError, ReportError, Result};
use crate::models::{AssembledDocument, RunReport};
use crate::utils::format_kib;
use std::path::Path;
use tokio::fs;
use tracing::{error, info, instrument};

/// A backend that turns report markdown into a paginated document.
///
/// Implementors write the finished document to `dest`, replacing any
/// existing file, and return once it is complete.
pub trait Renderer {
    async fn render(
        &self,
        markdown: &str,
        options: &RenderOptions,
        dest: &Path,
    ) -> std::result::Result<(), RenderError>;
}

/// Render `doc` to `dest` and collect the run statistics.
///
/// Counts come from assembly, not from inspecting the output. A renderer
/// failure is logged and returned; no statistics are reported for it.
#[instrument(level = "info", skip_all, fields(dest = %dest.display()))]
pub async fn dispatch<R: Renderer>(
    renderer: &R,
    doc: &AssembledDocument,
    options: &RenderOptions,
    dest: &Path,
) -> Result<RunReport> {
    info!("Converting to PDF");

    if let Err(e) = renderer.render(&doc.markdown, options, dest).await {
        error!(error = %e, "PDF generation failed");
        return Err(e.into());
    }

    let size_bytes = fs::metadata(dest)
        .await
        .map_err(|e| ReportError::io(dest, e))?
        .len();

    let report = RunReport {
        output: dest.to_path_buf(),
        size_bytes,
        situations: doc.situations,
        profiles: doc.profiles,
    };
    info!(
        path = %report.output.display(),
        size_kib = %format_kib(report.size_bytes),
        situations = report.situations,
        profiles = report.profiles,
        "PDF report created"
    );
    Ok(report)
}
