//! Data models for report sources and the assembled document.
//!
//! - [`DocumentSource`]: one markdown file discovered on disk
//! - [`SectionKind`]: the fixed section groups, in output order
//! - [`SectionGroup`]: a kind plus its ordered, loaded members
//! - [`AssembledDocument`]: the single markdown buffer handed to the renderer
//! - [`RunReport`]: statistics reported after a successful render

use std::path::{Path, PathBuf};

/// A markdown file discovered in one of the source directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSource {
    /// Absolute path of the file.
    pub path: PathBuf,
    /// File name without the `.md` extension.
    pub base_name: String,
}

impl DocumentSource {
    /// Build a source from a path, deriving the base name from its file stem.
    ///
    /// Returns `None` for paths without a UTF-8 file stem.
    pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        let base_name = path.file_stem()?.to_str()?.to_string();
        Some(Self { path, base_name })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// The section groups a report is made of, in their fixed output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Situations,
    Profiles,
}

impl SectionKind {
    /// Directory name under the run root.
    pub fn dir_name(self) -> &'static str {
        match self {
            SectionKind::Situations => "situations",
            SectionKind::Profiles => "profiles",
        }
    }

    /// Heading text of the separator emitted before the first member.
    pub fn title(self) -> &'static str {
        match self {
            SectionKind::Situations => "📁 Записанные ситуации",
            SectionKind::Profiles => "👥 Профили участников",
        }
    }

    /// Prefix prepended to each member's anchor identifier.
    pub fn anchor_prefix(self) -> &'static str {
        match self {
            SectionKind::Situations => "",
            SectionKind::Profiles => "profile-",
        }
    }

    /// Label prepended to each member's heading text.
    pub fn heading_label(self) -> &'static str {
        match self {
            SectionKind::Situations => "",
            SectionKind::Profiles => "Профиль: ",
        }
    }
}

/// One member of a section group with its content already read.
#[derive(Debug, Clone)]
pub struct SectionMember {
    pub source: DocumentSource,
    pub content: String,
}

/// A section kind and its members in inclusion order.
#[derive(Debug, Clone)]
pub struct SectionGroup {
    pub kind: SectionKind,
    pub members: Vec<SectionMember>,
}

impl SectionGroup {
    pub fn new(kind: SectionKind, members: Vec<SectionMember>) -> Self {
        Self { kind, members }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// The assembled markdown and the member counts that went into it.
#[derive(Debug, Clone, Default)]
pub struct AssembledDocument {
    pub markdown: String,
    pub has_overview: bool,
    pub situations: usize,
    pub profiles: usize,
}

/// Statistics for a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub output: PathBuf,
    pub size_bytes: u64,
    pub situations: usize,
    pub profiles: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_name_strips_md_extension() {
        let src = DocumentSource::from_path("situations/2024-01-05-incident.md").unwrap();
        assert_eq!(src.base_name, "2024-01-05-incident");
        assert_eq!(src.path(), Path::new("situations/2024-01-05-incident.md"));
    }

    #[test]
    fn section_kinds_carry_fixed_labels() {
        assert_eq!(SectionKind::Situations.dir_name(), "situations");
        assert_eq!(SectionKind::Profiles.heading_label(), "Профиль: ");
        assert_eq!(SectionKind::Profiles.anchor_prefix(), "profile-");
        assert_eq!(SectionKind::Situations.anchor_prefix(), "");
    }
}
