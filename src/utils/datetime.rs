//! Date utility functions
//!
//! Deadlines travel as `YYYY-MM-DD` strings. This module parses them, formats
//! them for display (e.g. "yesterday", "today", "next Friday"), and turns
//! shorthand typed into the creation form into a wire date.

use chrono::format::{Item, StrftimeItems};
use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};

/// Date format used on the wire
pub const API_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date string in YYYY-MM-DD format to NaiveDate
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str.trim(), API_DATE_FORMAT)
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(API_DATE_FORMAT).to_string()
}

/// Whether a strftime pattern contains only recognised specifiers
pub fn is_valid_format(fmt: &str) -> bool {
    !fmt.is_empty() && !StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error))
}

/// Calculate the next occurrence of a target weekday from a given date
pub fn next_weekday(from: NaiveDate, target: Weekday) -> NaiveDate {
    let from_w = from.weekday().num_days_from_monday() as i64;
    let tgt_w = target.num_days_from_monday() as i64;
    let mut delta = (7 + tgt_w - from_w) % 7;
    if delta == 0 {
        delta = 7;
    }
    from + Duration::days(delta)
}

/// Turn form input into a wire deadline relative to `today`.
///
/// Accepts an empty string (no deadline), `today`, `tomorrow`, a weekday
/// name, `+N` days, or an explicit `YYYY-MM-DD` date.
pub fn normalize_deadline_input(input: &str, today: NaiveDate) -> Result<Option<String>, String> {
    let value = input.trim().to_lowercase();
    if value.is_empty() {
        return Ok(None);
    }

    let date = match value.as_str() {
        "today" => today,
        "tomorrow" => today + Duration::days(1),
        _ => {
            if let Some(days) = value.strip_prefix('+') {
                let days: i64 = days
                    .parse()
                    .map_err(|_| format!("'{}' is not a number of days", days))?;
                if !(0..=3650).contains(&days) {
                    return Err("Day offset must be between 0 and 3650".to_string());
                }
                today + Duration::days(days)
            } else if let Some(weekday) = parse_weekday(&value) {
                next_weekday(today, weekday)
            } else {
                parse_date(&value).map_err(|_| format!("Invalid deadline '{}', use YYYY-MM-DD", input.trim()))?
            }
        }
    };

    Ok(Some(format_ymd(date)))
}

/// Format a deadline for display.
///
/// With `human` on, dates near `today` read as relative words; otherwise the
/// date is rendered with `date_format`. Unparseable input is returned as is.
pub fn format_deadline(date_str: &str, today: NaiveDate, human: bool, date_format: &str) -> String {
    let input_date = match parse_date(date_str) {
        Ok(date) => date,
        Err(_) => return date_str.to_string(),
    };

    if human {
        format_human_date(input_date, today)
    } else if is_valid_format(date_format) {
        input_date.format(date_format).to_string()
    } else {
        format_ymd(input_date)
    }
}

/// Human-readable form of `date` relative to `today`
pub fn format_human_date(date: NaiveDate, today: NaiveDate) -> String {
    let days_diff = (date - today).num_days();

    match days_diff {
        -1 => "yesterday".to_string(),
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        diff if diff > 1 && diff <= 7 => format!("next {}", weekday_name(date.weekday())),
        diff if (-7..-1).contains(&diff) => format!("last {}", weekday_name(date.weekday())),
        diff if diff > 7 && diff <= 30 => format!("in {} days", diff),
        diff if (-30..-7).contains(&diff) => format!("{} days ago", -diff),
        _ => {
            if date.year() == today.year() {
                date.format("%b %d").to_string()
            } else {
                date.format("%b %d, %Y").to_string()
            }
        }
    }
}

/// Whether a deadline lies strictly before `today`
pub fn is_overdue(date_str: &str, today: NaiveDate) -> bool {
    parse_date(date_str).map(|d| d < today).unwrap_or(false)
}

/// Current local date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn parse_weekday(value: &str) -> Option<Weekday> {
    match value {
        "mon" | "monday" => Some(Weekday::Mon),
        "tue" | "tuesday" => Some(Weekday::Tue),
        "wed" | "wednesday" => Some(Weekday::Wed),
        "thu" | "thursday" => Some(Weekday::Thu),
        "fri" | "friday" => Some(Weekday::Fri),
        "sat" | "saturday" => Some(Weekday::Sat),
        "sun" | "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
