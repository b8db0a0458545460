//! Source discovery for the report.
//!
//! A section directory is scanned for regular files with the `.md`
//! extension and the result is sorted by file name. Situation files carry
//! their date as a `YYYY-MM-DD` prefix, so name order is chronological order.
//!
//! A directory that does not exist yields no sources. That is the normal
//! case for a case folder that has no profiles yet, not a failure.

use crate::error::{ReportError, Result};
use crate::models::{DocumentSource, SectionGroup, SectionKind, SectionMember};
use futures::future::try_join_all;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info, instrument};

const MARKDOWN_EXTENSION: &str = "md";

/// List the markdown files in `dir`, sorted by file name.
///
/// Source paths are absolute: `dir` is canonicalized before it is scanned.
///
/// Returns an empty list when `dir` does not exist. Other I/O failures
/// (permissions, `dir` being a file) are errors.
#[instrument(level = "debug", skip_all, fields(dir = %dir.display()))]
pub async fn collect_markdown(dir: &Path) -> Result<Vec<DocumentSource>> {
    let dir = match fs::canonicalize(dir).await {
        Ok(dir) => dir,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("Directory absent; nothing to collect");
            return Ok(Vec::new());
        }
        Err(e) => return Err(ReportError::io(dir, e)),
    };
    let mut entries = fs::read_dir(&dir)
        .await
        .map_err(|e| ReportError::io(&dir, e))?;

    let mut named = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| ReportError::io(&dir, e))?
    {
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some(MARKDOWN_EXTENSION) {
            continue;
        }
        // Follows symlinks, so a linked markdown file is still included.
        let meta = fs::metadata(&path)
            .await
            .map_err(|e| ReportError::io(&path, e))?;
        if !meta.is_file() {
            continue;
        }
        let Some(file_name) = entry.file_name().to_str().map(str::to_owned) else {
            debug!(path = %path.display(), "Skipping non UTF-8 file name");
            continue;
        };
        if let Some(source) = DocumentSource::from_path(path) {
            named.push((file_name, source));
        }
    }

    named.sort_by(|a, b| a.0.cmp(&b.0));
    debug!(count = named.len(), "Collected markdown files");
    Ok(named.into_iter().map(|(_, source)| source).collect())
}

/// Collect and read one section group under `root`.
///
/// Files are read concurrently; member order is the sorted discovery order
/// regardless of which read finishes first.
#[instrument(level = "info", skip_all, fields(section = kind.dir_name()))]
pub async fn load_group(root: &Path, kind: SectionKind) -> Result<SectionGroup> {
    let sources = collect_markdown(&root.join(kind.dir_name())).await?;

    let members = try_join_all(sources.into_iter().map(|source| async move {
        let content = fs::read_to_string(source.path())
            .await
            .map_err(|e| ReportError::io(source.path(), e))?;
        Ok::<_, ReportError>(SectionMember { source, content })
    }))
    .await?;

    for member in &members {
        info!(file = %member.source.base_name, "Including {}", kind.dir_name());
    }

    Ok(SectionGroup::new(kind, members))
}

/// Read an optional file, returning `None` if it does not exist.
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub async fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path).await {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(ReportError::io(path, e)),
    }
}
