//! Rewriting of relative links in the overview into in-document anchors.
//!
//! Only three literal link shapes are recognised; this is not a general
//! markdown link parser:
//!
//! - `[text](profiles/<name>.md)` for each registered profile name
//! - `[text](situations/<any>.md)`
//!
//! Anything else, including links to unregistered profiles, is left
//! byte-for-byte untouched.

use super::anchor::anchor_id;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Profiles whose links are rewritten, with their fixed anchor.
///
/// Links to profiles not listed here stay relative in the output. Adding a
/// participant means adding a row here as well as the file under `profiles/`.
pub const REGISTERED_PROFILES: &[(&str, &str)] = &[
    ("nadya", "profile-nadya"),
    ("sasha", "profile-sasha"),
];

static PROFILE_LINKS: Lazy<Vec<(Regex, String)>> = Lazy::new(|| {
    REGISTERED_PROFILES
        .iter()
        .map(|(name, anchor)| {
            let pattern = format!(r"\[([^\]]+)\]\(profiles/{}\.md\)", regex::escape(name));
            let regex = Regex::new(&pattern).expect("profile link pattern is valid");
            (regex, format!("[${{1}}](#{anchor})"))
        })
        .collect()
});

static SITUATION_LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[([^\]]+)\]\(situations/([^)]+)\.md\)").expect("situation link pattern is valid")
});

/// Rewrite the recognised links in `overview`.
///
/// The substitutions run one after another over the whole text, registered
/// profiles first and situations last. Each occurrence is rewritten
/// independently.
pub fn rewrite_links(overview: &str) -> String {
    let mut text = overview.to_owned();

    for (regex, replacement) in PROFILE_LINKS.iter() {
        text = regex.replace_all(&text, replacement.as_str()).into_owned();
    }

    SITUATION_LINK
        .replace_all(&text, |caps: &Captures| {
            format!("[{}](#{})", &caps[1], anchor_id(&caps[2]))
        })
        .into_owned()
}
