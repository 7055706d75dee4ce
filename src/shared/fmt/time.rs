//! Timestamp formatting.

use chrono::{DateTime, Utc};

/// Render a timestamp as `2025-07-25 12:00 UTC`.
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M UTC").to_string()
}
