//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the application.

use std::sync::OnceLock;
use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$")
            .expect("email pattern is valid")
    })
}

/// Validate email format
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email.trim())
}

/// Validate a ten-digit mobile number
pub fn is_valid_phone(phone: &str) -> bool {
    has_exact_digits(phone.trim(), 10)
}

/// True when `text` is exactly `count` ASCII digits
pub fn has_exact_digits(text: &str, count: usize) -> bool {
    text.len() == count && text.chars().all(|c| c.is_ascii_digit())
}

/// Parse an event date as entered in the admin form.
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM` (datetime-local) and full RFC 3339.
pub fn parse_event_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    for format in ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Format an event date in long form ("June 15, 2024"); unparseable input is returned as is
pub fn format_event_date(raw: &str) -> String {
    match parse_event_date(raw) {
        Some(dt) => dt.format("%B %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

/// Case-insensitive containment used by list searches; an empty query matches everything
pub fn matches_query(query: &str, haystacks: &[&str]) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    haystacks.iter().any(|h| h.to_lowercase().contains(&query))
}

/// Truncate text to a maximum number of characters with ellipsis
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_length.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// File extension in lower case, without the dot
pub fn file_extension(name: &str) -> Option<String> {
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}
