//! One report run, end to end.
//!
//! 1. **Collect**: read `README.md` and the `situations/` and `profiles/` groups
//! 2. **Assemble**: build the single markdown buffer
//! 3. **Render**: hand it to the renderer and report statistics
//!
//! The steps run strictly in this order. The run root holds the inputs and
//! receives `uutik-report.pdf`, which is overwritten on every run.

use crate::assemble::assemble;
use crate::error::Result;
use crate::models::{RunReport, SectionKind};
use crate::render::{RenderOptions, Renderer, dispatch};
use crate::sources::{load_group, read_optional};
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

pub const OVERVIEW_FILE: &str = "README.md";
pub const OUTPUT_FILE: &str = "uutik-report.pdf";

/// Location of the generated report for a run root.
pub fn output_path(root: &Path) -> PathBuf {
    root.join(OUTPUT_FILE)
}

/// Generate the report for `root` with `renderer`.
#[instrument(level = "info", skip_all, fields(root = %root.display()))]
pub async fn run<R: Renderer>(root: &Path, renderer: &R) -> Result<RunReport> {
    info!("Generating PDF report");

    info!("Adding {OVERVIEW_FILE}");
    let overview = read_optional(&root.join(OVERVIEW_FILE)).await?;

    info!("Adding situations");
    let situations = load_group(root, SectionKind::Situations).await?;

    info!("Adding profiles");
    let profiles = load_group(root, SectionKind::Profiles).await?;

    let doc = assemble(overview.as_deref(), &situations, &profiles);

    dispatch(renderer, &doc, &RenderOptions::default(), &output_path(root)).await
}
