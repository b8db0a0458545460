//! Assembly of the overview and section groups into one markdown buffer.
//!
//! # Layout
//!
//! ```text
//! README.md content (links rewritten)
//!
//! ---
//!
//! # 📁 Записанные ситуации
//!
//! <a id="2024-01-05-incident"></a>
//! ## 2024-01-05-incident
//!
//! ...file content verbatim...
//!
//! ---
//!
//! # 👥 Профили участников
//!
//! <a id="profile-nadya"></a>
//! ## Профиль: nadya
//!
//! ...
//! ```
//!
//! The overview always comes first, then situations, then profiles. An empty
//! group contributes nothing at all, not even its separator.

pub mod anchor;
pub mod links;

pub use anchor::anchor_id;
pub use links::rewrite_links;

use crate::models::{AssembledDocument, SectionGroup, SectionKind, SectionMember};
use tracing::{info, instrument, warn};

/// Accumulates the report markdown for a single run.
#[derive(Debug, Default)]
pub struct Assembler {
    doc: AssembledDocument,
}

impl Assembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the overview with its links rewritten, or log that it is missing.
    pub fn push_overview(&mut self, overview: Option<&str>) -> &mut Self {
        match overview {
            Some(content) => {
                self.doc.markdown.push_str(&rewrite_links(content));
                self.doc.has_overview = true;
            }
            None => warn!("README.md not found; report will have no overview"),
        }
        self
    }

    /// Append a section group: a separator, then every member in order.
    ///
    /// Member content is copied verbatim. Only the overview is rewritten.
    pub fn push_group(&mut self, group: &SectionGroup) -> &mut Self {
        if group.is_empty() {
            match group.kind {
                SectionKind::Situations => info!("No situations found"),
                SectionKind::Profiles => warn!("No profiles found"),
            }
            return self;
        }

        self.push_separator(group.kind.title());
        for member in &group.members {
            self.push_member(group.kind, member);
        }

        match group.kind {
            SectionKind::Situations => self.doc.situations += group.len(),
            SectionKind::Profiles => self.doc.profiles += group.len(),
        }
        self
    }

    fn push_separator(&mut self, title: &str) {
        self.doc.markdown.push_str(&format!("\n\n---\n\n# {title}\n\n"));
    }

    fn push_member(&mut self, kind: SectionKind, member: &SectionMember) {
        let base_name = &member.source.base_name;
        let anchor = format!("{}{}", kind.anchor_prefix(), anchor_id(base_name));
        self.doc.markdown.push_str(&format!(
            "\n\n<a id=\"{anchor}\"></a>\n## {}{base_name}\n\n{}",
            kind.heading_label(),
            member.content
        ));
    }

    pub fn finish(self) -> AssembledDocument {
        self.doc
    }
}

/// Assemble a report in the fixed order: overview, situations, profiles.
#[instrument(level = "info", skip_all, fields(
    has_overview = overview.is_some(),
    situations = situations.len(),
    profiles = profiles.len(),
))]
pub fn assemble(
    overview: Option<&str>,
    situations: &SectionGroup,
    profiles: &SectionGroup,
) -> AssembledDocument {
    debug_assert_eq!(situations.kind, SectionKind::Situations);
    debug_assert_eq!(profiles.kind, SectionKind::Profiles);

    let mut assembler = Assembler::new();
    assembler
        .push_overview(overview)
        .push_group(situations)
        .push_group(profiles);
    let doc = assembler.finish();
    info!(
        bytes = doc.markdown.len(),
        has_overview = doc.has_overview,
        "Assembled report markdown"
    );
    doc
}
