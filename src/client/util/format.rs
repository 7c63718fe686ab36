use chrono::{NaiveDate, NaiveDateTime};

/// Formats a stored UTC timestamp for tables and cards.
pub fn timestamp(value: &NaiveDateTime) -> String {
    value.format("%Y-%m-%d %H:%M UTC").to_string()
}

pub fn date(value: &NaiveDate) -> String {
    value.format("%b %-d, %Y").to_string()
}

/// Parses the value of an `<input type="date">`, which is empty when nothing was picked.
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}
