//! Anchor identifiers for in-document links.

use once_cell::sync::Lazy;
use regex::Regex;

/// Any run of characters outside lowercase ASCII letters, digits and the
/// Cyrillic range `а-я`. `ё` sits outside that range and is treated as a
/// separator, which keeps existing hand-written anchors valid.
static DISALLOWED_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9а-я]+").expect("anchor pattern is valid"));

/// Derive the anchor identifier for a document base name.
///
/// The name is lower-cased and every run of disallowed characters becomes a
/// single `-`. Leading and trailing separators are kept, so `"(draft) x"`
/// becomes `"-draft-x"`. Links rewritten in the overview use the same
/// function, which keeps both ends of a jump in agreement.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(anchor_id("2024-01-05 Incident"), "2024-01-05-incident");
/// assert_eq!(anchor_id("Ссора на кухне"), "ссора-на-кухне");
/// ```
pub fn anchor_id(base_name: &str) -> String {
    DISALLOWED_RUN
        .replace_all(&base_name.to_lowercase(), "-")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_dated_names() {
        assert_eq!(anchor_id("2024-01-05-incident"), "2024-01-05-incident");
    }

    #[test]
    fn collapses_runs_into_one_separator() {
        assert_eq!(anchor_id("Meeting  --  Notes_v2"), "meeting-notes-v2");
        assert_eq!(anchor_id("(draft) x"), "-draft-x");
    }

    #[test]
    fn keeps_cyrillic_letters() {
        assert_eq!(anchor_id("Ссора на Кухне"), "ссора-на-кухне");
    }

    #[test]
    fn yo_is_a_separator() {
        assert_eq!(anchor_id("2024-01-05-ёлка"), "2024-01-05-лка");
        assert_eq!(anchor_id("Ёлка"), "-лка");
    }

    #[test]
    fn is_deterministic() {
        let name = "2024-02-10 Разговор, часть 2";
        assert_eq!(anchor_id(name), anchor_id(name));
        assert_eq!(anchor_id(name), "2024-02-10-разговор-часть-2");
    }
}
