// SPDX-FileCopyrightText: 2024 Ohin "Kazani" Taylor <kazani@kazani.dev>
// SPDX-License-Identifier: MIT

use chrono::NaiveDate;

/// Shown in place of a date for metadata that carries none.
pub const UNDATED: &str = "Undated";

/// Escape text for use in element content or a quoted attribute.
pub fn escape(text: &str) -> String {
    // Quotes must never survive: the result also lands in attributes.
    build_html::escape_html(text).replace('"', "&quot;")
}

/// Long US-style date, e.g. `March 5, 2024`.
pub fn format_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => UNDATED.to_owned(),
    }
}
