//! Shared helper functions for CLI commands

use crate::core::identity::PartId;

/// Format a part id for display, truncating if too long
///
/// Ids longer than 16 characters are truncated to 13 chars with "..." suffix.
pub fn format_short_id(id: &PartId) -> String {
    let s = id.to_string();
    if s.len() > 16 {
        format!("{}...", &s[..13])
    } else {
        s
    }
}

/// Truncate a string to max_len, adding "..." if truncated
///
/// Useful for table columns that need fixed-width output.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

/// Escape a string for comma-CSV list output
///
/// Handles commas, quotes, and newlines according to RFC 4180. This is the
/// piping-friendly list format, not the locale dialect of `export`.
pub fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
