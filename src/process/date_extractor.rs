//! Reads performance dates out of album titles.
//!
//! Titles are tried against three rules, first match wins:
//!
//! 1. A four digit year introduced by a comma, digit or hyphen, together with an
//!    English month name and a day (`"Fillmore East, May 2, 1970"`). Once the year
//!    pattern is present the title is committed to this rule: if no month/day pair
//!    can be read the title has no date, and the later rules are never consulted.
//! 2. A numeric `M/D/Y` date using `/`, `.` or `-` separators (`"Cornell 5/8/77"`).
//!    Two digit years below 25 belong to the 2000s, the rest to the 1900s.
//! 3. An undated `Live At/In/From ...` phrase. The title carries no date, so the
//!    caller keys it on the album's release date instead (see [`release_date_key`]).

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Two digit years below this value are read as 20xx.
const CENTURY_PIVOT: u32 = 25;

/// Year of keys that stop the chronological listing.
pub const SENTINEL_YEAR: &str = "9999";

lazy_static! {
    static ref YEAR_RE: Regex = Regex::new(r"(,|[0-9]|-)\s*([0-9]{4})").unwrap();
    static ref MONTH_DAY_RE: Regex = Regex::new(&format!(
        r"({}) ([0-9]{{1,2}})(?:[^0-9]|$)",
        MONTHS.join("|")
    ))
    .unwrap();
    static ref SHORT_NUMBER_RE: Regex = Regex::new(r"[^0-9]([0-9]{1,2})[^0-9]").unwrap();
    static ref NUMERIC_DATE_RE: Regex = Regex::new(
        r"(?:[^0-9]|^)([0-9]{1,4})[/.\-]([0-9]{1,4})[/.\-]([0-9]{1,4})(?:[^0-9]|$)"
    )
    .unwrap();
    static ref LIVE_PHRASE_RE: Regex = Regex::new(r"(?i)live (?:from|at|in)\s[^c]").unwrap();
}

/// `YYYYMMDD` sort key. Only the string ordering matters; it is never checked
/// against a calendar.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(String);

impl DateKey {
    pub fn new(key: impl Into<String>) -> Self {
        DateKey(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn year(&self) -> &str {
        self.0.get(..4).unwrap_or(&self.0)
    }

    pub fn is_sentinel_year(&self) -> bool {
        self.year() == SENTINEL_YEAR
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleDate {
    /// A full performance date was read from the title.
    Dated(DateKey),
    /// No date, but the title reads like a `Live At/In/From` release.
    LivePhrase,
    NoDate,
}

pub fn extract_title_date(title: &str) -> TitleDate {
    if let Some(year) = YEAR_RE.captures(title).and_then(|c| c.get(2)) {
        return month_name_date(title, year.as_str())
            .map(TitleDate::Dated)
            .unwrap_or(TitleDate::NoDate);
    }

    if let Some(key) = numeric_date(title) {
        return TitleDate::Dated(key);
    }

    if has_live_phrase(title) {
        return TitleDate::LivePhrase;
    }

    TitleDate::NoDate
}

fn month_name_date(title: &str, year: &str) -> Option<DateKey> {
    // At least one standalone day number. Multi-night titles have several; the
    // first month/day pair decides the key.
    SHORT_NUMBER_RE.find(title)?;

    let captures = MONTH_DAY_RE.captures(title)?;
    let month_name = captures.get(1)?.as_str();
    let day = captures.get(2)?.as_str();
    let month = MONTHS.iter().position(|m| *m == month_name)? + 1;

    Some(DateKey(format!("{}{:02}{:0>2}", year, month, day)))
}

fn numeric_date(title: &str) -> Option<DateKey> {
    let captures = NUMERIC_DATE_RE.captures(title)?;
    let month = captures.get(1)?.as_str();
    let day = captures.get(2)?.as_str();
    let year = expand_year(captures.get(3)?.as_str());

    Some(DateKey(format!("{}{:0>2}{:0>2}", year, month, day)))
}

fn expand_year(year: &str) -> String {
    if year.len() != 2 {
        return year.to_string();
    }
    match year.parse::<u32>() {
        Ok(short) if short < CENTURY_PIVOT => format!("20{}", year),
        _ => format!("19{}", year),
    }
}

/// `Live At/In/From`, whitespace, then any character but the `C` that would
/// start "Concert". Case-insensitive, so `"Live at Carnegie Hall"` is rejected too.
pub fn has_live_phrase(title: &str) -> bool {
    LIVE_PHRASE_RE.is_match(title)
}

/// Key for an album dated only by its release date.
///
/// Missing precision is padded with nines so the album sorts after everything
/// with a known date in the same year (`"1977"` -> `"19779999"`) or month
/// (`"1977-05"` -> `"19770599"`).
pub fn release_date_key(release_date: &str) -> DateKey {
    let mut key: String = release_date.chars().filter(|c| *c != '-').collect();
    match key.len() {
        4 => key.push_str("9999"),
        6 => key.push_str("99"),
        _ => {}
    }
    DateKey(key)
}
