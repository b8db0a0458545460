//! Small formatting helpers for log output.

/// Format a byte count as kibibytes with two decimals.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_kib(1536), "1.50 KB");
/// ```
pub fn format_kib(bytes: u64) -> String {
    format!("{:.2} KB", bytes as f64 / 1024.0)
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut to at most `max` bytes, backing off to a character
/// boundary, with an ellipsis and the number of dropped bytes appended.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…(+{} bytes)", &s[..end], s.len() - end)
}
