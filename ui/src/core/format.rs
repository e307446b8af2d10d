//! Formatting helpers for presenting sample fields.

use time::{format_description::well_known::Rfc3339, macros::format_description, Date, OffsetDateTime};

/// DNA concentration in ng/μl, three decimals as in the chart tooltip.
pub fn format_concentration(value: f64) -> String {
    format!("{value:.3}")
}

/// Filtered water volume in ml; blank cell when absent.
pub fn format_volume(value: Option<f64>) -> String {
    match value {
        Some(ml) => format!("{ml:.0}"),
        None => String::new(),
    }
}

/// Collection timestamp for the table: the date part of whatever the
/// dataset published, which may be a bare date, a full timestamp, or
/// empty.
pub fn format_event_date(raw: &str) -> String {
    let (date, _) = raw.split_once('T').unwrap_or((raw, ""));
    date.to_string()
}

/// Footer "data last updated" label. Falls back to the raw string when
/// the stamp doesn't parse.
pub fn format_created(raw: &str) -> String {
    let display = format_description!("[day] [month repr:long] [year]");
    if let Ok(stamp) = OffsetDateTime::parse(raw, &Rfc3339) {
        return stamp.format(&display).unwrap_or_else(|_| raw.to_string());
    }
    if let Ok(date) = Date::parse(raw, &format_description!("[year]-[month]-[day]")) {
        return date.format(&display).unwrap_or_else(|_| raw.to_string());
    }
    raw.to_string()
}
