//! Display formatting helpers.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, NaiveDateTime};

/// Format a server timestamp for the saved-at column.
///
/// Accepts RFC 3339 with an offset or a bare ISO 8601 datetime (the server
/// omits the timezone on some fields). Empty or unparseable input renders
/// as an empty cell.
pub fn saved_at(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return naive.format("%Y-%m-%d %H:%M").to_string();
    }
    String::new()
}
