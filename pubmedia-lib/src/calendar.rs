//! Magazine release calendar.
//!
//! The media API has no issue listing, so issue codes are derived from the
//! years and months each magazine was released in. Codes are `YYYYMM`, or
//! `YYYYMMDD` for issues before 2016 that were released twice a month.

use chrono::{Datelike, NaiveDate};

/// Awake!
pub const AWAKE: &str = "g";
/// The Watchtower (public edition)
pub const WATCHTOWER: &str = "wp";
/// The Watchtower (study edition)
pub const WATCHTOWER_STUDY: &str = "w";
/// The Watchtower (simplified edition)
pub const WATCHTOWER_SIMPLIFIED: &str = "ws";

pub const MAGAZINE_CODES: &[&str] = &[AWAKE, WATCHTOWER, WATCHTOWER_STUDY, WATCHTOWER_SIMPLIFIED];

/// Languages the simplified edition was published in.
pub const SIMPLIFIED_LANGUAGES: &[&str] = &["E", "F", "I", "T", "S"];

/// First year with audio recordings in English. Other languages started
/// later; their missing issues simply fail to load.
pub const FIRST_RECORDED_YEAR: i32 = 2008;

/// The simplified edition ran from 2013 until the end of 2017.
const SIMPLIFIED_YEARS: (i32, i32) = (2013, 2017);

pub fn is_magazine(code: &str) -> bool {
    MAGAZINE_CODES.contains(&code)
}

/// Magazines offered in `lang`, in menu order.
pub fn magazines_for_language(lang: &str) -> Vec<&'static str> {
    MAGAZINE_CODES
        .iter()
        .copied()
        .filter(|&code| code != WATCHTOWER_SIMPLIFIED || SIMPLIFIED_LANGUAGES.contains(&lang))
        .collect()
}

/// Years worth browsing for a magazine, newest first.
pub fn magazine_years(code: &str, this_year: i32) -> Vec<i32> {
    let (first, last) = match code {
        WATCHTOWER_STUDY | WATCHTOWER | AWAKE => (FIRST_RECORDED_YEAR, this_year),
        WATCHTOWER_SIMPLIFIED => SIMPLIFIED_YEARS,
        _ => return Vec::new(),
    };
    (first..=last).rev().collect()
}

/// Issue codes of `code` released in `year`, as of `today`.
///
/// Issues of the current year are limited to months up to today's month;
/// future years have none. Unknown magazines or years yield nothing.
pub fn magazine_issues(code: &str, year: i32, today: NaiveDate) -> Vec<String> {
    if year > today.year() {
        return Vec::new();
    }
    let last_month = if year == today.year() { today.month() } else { 12 };

    let Some((months, day)) = release_schedule(code, year) else {
        return Vec::new();
    };
    months
        .into_iter()
        .filter(|&month| month <= last_month)
        .map(|month| format!("{year}{month:02}{day}"))
        .collect()
}

/// Release months and the day suffix of the issue code.
fn release_schedule(code: &str, year: i32) -> Option<(Vec<u32>, &'static str)> {
    let monthly: Vec<u32> = (1..=12).collect();
    let schedule = if year >= 2018 {
        match code {
            WATCHTOWER_STUDY => (monthly, ""),
            WATCHTOWER => (vec![1, 5, 9], ""),
            AWAKE => (vec![3, 7, 11], ""),
            _ => return None,
        }
    } else if year >= 2016 {
        match code {
            WATCHTOWER_STUDY | WATCHTOWER_SIMPLIFIED => (monthly, ""),
            WATCHTOWER => ((1..=12).step_by(2).collect(), ""),
            AWAKE => ((2..=12).step_by(2).collect(), ""),
            _ => return None,
        }
    } else {
        match code {
            WATCHTOWER => (monthly, "01"),
            WATCHTOWER_STUDY | WATCHTOWER_SIMPLIFIED => (monthly, "15"),
            AWAKE => (monthly, ""),
            _ => return None,
        }
    };
    Some(schedule)
}

#[cfg(test)]
#[path = "tests/calendar_tests.rs"]
mod tests;
