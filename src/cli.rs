//! Command-line interface definitions for the report generator.
//!
//! The tool needs no arguments: run it from the case folder and it reads
//! `README.md`, `situations/` and `profiles/` there and writes
//! `uutik-report.pdf` next to them. The options below only relocate the run
//! root or swap the renderer executable; their defaults are the normal case.

use clap::Parser;
use std::path::PathBuf;

use crate::render::wkhtmltopdf::DEFAULT_PROGRAM;

/// Command-line arguments for the report generator.
///
/// # Examples
///
/// ```sh
/// # Generate the report for the current directory
/// uutik_report
///
/// # Generate it for another case folder
/// uutik_report --root ~/cases/uutik
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Directory holding README.md, situations/ and profiles/
    #[arg(short, long, env = "UUTIK_REPORT_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// wkhtmltopdf executable used to render the PDF
    #[arg(long, env = "UUTIK_REPORT_RENDERER", default_value = DEFAULT_PROGRAM)]
    pub renderer: String,
}
