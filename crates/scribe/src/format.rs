//! Timestamp and log line rendering

use chrono::format::{Item, StrftimeItems};
use chrono::Local;
use scribe_core::{Error, Result, SEPARATOR_WIDTH};

/// Render the current wall-clock time with a strftime pattern.
///
/// The pattern is validated before rendering; an unrecognized specifier
/// fails with [`Error::DateFormatError`].
pub fn format_timestamp(pattern: &str) -> Result<String> {
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(Error::DateFormatError(pattern.to_string()));
    }
    Ok(Local::now().format_with_items(items.into_iter()).to_string())
}

/// Compose the final output for one entry: the log line plus the separator line
pub fn render_line(timestamp: &str, level: &str, message: &str) -> String {
    format!(
        "[{}] [{}] {}\n{}\n",
        timestamp,
        level,
        message,
        "-".repeat(SEPARATOR_WIDTH)
    )
}
