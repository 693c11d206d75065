//! Parsing of the `DD/MM/YY` birth dates sent by the roster forms.

use chrono::{Datelike, NaiveDate, Utc};

/// Parse a `DD/MM/YY` birth date relative to today.
///
/// Returns `None` for absent or malformed input instead of failing.
pub fn parse_birth_date(input: Option<&str>) -> Option<NaiveDate> {
    parse_birth_date_on(input?, Utc::now().date_naive())
}

/// Parse a `DD/MM/YY` (or `DD/MM/YYYY`) birth date.
///
/// A two-digit year expands to `20YY`, falling back to `19YY` when `20YY`
/// would be after `today`'s year.
pub fn parse_birth_date_on(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let mut parts = input.trim().split('/');
    let day = parse_component(parts.next()?, 1, 2)?;
    let month = parse_component(parts.next()?, 1, 2)?;
    let raw_year = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    let year = match raw_year.len() {
        2 => {
            let short = parse_component(raw_year, 2, 2)? as i32;
            let year = 2000 + short;
            if year > today.year() {
                year - 100
            } else {
                year
            }
        }
        4 => parse_component(raw_year, 4, 4)? as i32,
        _ => return None,
    };

    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_component(part: &str, min_len: usize, max_len: usize) -> Option<u32> {
    if part.len() < min_len || part.len() > max_len || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}
