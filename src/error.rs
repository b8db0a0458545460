//! Error types for report generation.
//!
//! Missing optional input (no `README.md`, empty section directories) is not
//! an error and never reaches these types; it is logged and skipped by the
//! collector and assembler. Everything here is fatal to a run.

use std::path::PathBuf;
use std::process::ExitStatus;

/// Top-level error for a report run.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Filesystem I/O error while discovering or reading sources.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The rendering collaborator failed.
    #[error("render failed: {0}")]
    Render(#[from] RenderError),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ReportError>;

impl ReportError {
    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Failure raised by a [`crate::render::Renderer`].
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The renderer executable could not be launched.
    #[error("failed to launch `{program}`: {source}. Is it installed?")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    /// I/O with the renderer process or the output file failed.
    #[error("renderer I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The renderer ran but exited unsuccessfully.
    #[error("renderer exited with {status}: {stderr}")]
    Failed { status: ExitStatus, stderr: String },

    /// The renderer reported success but left no file behind.
    #[error("renderer produced no output at {0:?}")]
    MissingOutput(PathBuf),

    /// Backend-specific failure with a free-form message.
    #[error("{0}")]
    Other(String),
}
