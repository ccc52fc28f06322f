//! Calendar dates without a time of day.
//!
//! A [`Date`] is always a valid calendar day. The lenient constructor
//! [`Date::new`] falls back to 1/1/2000 when handed impossible components;
//! [`Date::try_new`] reports them instead and is what input prompts use.
//!
//! ## Text forms
//!
//! - Display: `day/month/year`, no zero padding (`5/8/2025`)
//! - Record: `day month year`, the layout of the data file
//! - Parsing accepts both forms, the numbers may be separated by whitespace
//!   and/or `/`

use super::error::{Result, TaskError};
use chrono::{Datelike, Local, NaiveDate};
use std::fmt;
use std::str::FromStr;

const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A day, month and year triple that always names a real calendar day.
///
/// Field order matters: the derived ordering compares year, then month,
/// then day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    year: i32,
    month: u32,
    day: u32,
}

impl Default for Date {
    /// 1/1/2000, the value invalid input collapses to.
    fn default() -> Self {
        Date { year: 2000, month: 1, day: 1 }
    }
}

/// Gregorian leap year rule.
pub fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`, `None` for a month outside 1..=12.
pub fn days_in_month(month: i64, year: i64) -> Option<u32> {
    if !(1..=12).contains(&month) {
        return None;
    }
    if month == 2 && is_leap_year(year) {
        return Some(29);
    }
    Some(DAYS_IN_MONTH[(month - 1) as usize])
}

impl Date {
    /// Builds a date, silently using the default 1/1/2000 for invalid input.
    pub fn new(day: i64, month: i64, year: i64) -> Self {
        Self::try_new(day, month, year).unwrap_or_default()
    }

    /// Builds a date or reports why the components are not a calendar day.
    pub fn try_new(day: i64, month: i64, year: i64) -> Result<Self> {
        let invalid = || TaskError::InvalidDate { day, month, year };

        if year < 0 || year > i64::from(i32::MAX) || day < 1 {
            return Err(invalid());
        }
        let max_day = days_in_month(month, year).ok_or_else(invalid)?;
        if day > i64::from(max_day) {
            return Err(invalid());
        }

        Ok(Date {
            year: year as i32,
            month: month as u32,
            day: day as u32,
        })
    }

    /// The current date in the local time zone.
    pub fn today() -> Self {
        Local::now().date_naive().into()
    }

    /// Parses `day month year` and rejects impossible dates.
    pub fn parse_strict(text: &str) -> Result<Self> {
        let (day, month, year) = split_components(text)?;
        Self::try_new(day, month, year)
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// The `day month year` form written to the data file.
    pub fn to_record(&self) -> String {
        format!("{} {} {}", self.day, self.month, self.year)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.day, self.month, self.year)
    }
}

impl FromStr for Date {
    type Err = TaskError;

    /// Reads three integers and builds the date leniently, so `30 2 2023`
    /// becomes 1/1/2000 while `thirty 2 2023` is an error.
    fn from_str(s: &str) -> Result<Self> {
        let (day, month, year) = split_components(s)?;
        Ok(Date::new(day, month, year))
    }
}

fn split_components(text: &str) -> Result<(i64, i64, i64)> {
    let malformed = || TaskError::MalformedDate(text.trim().to_string());

    let numbers = text
        .split(|c: char| c.is_whitespace() || c == '/')
        .filter(|part| !part.is_empty())
        .map(|part| part.parse::<i64>().map_err(|_| malformed()))
        .collect::<Result<Vec<_>>>()?;

    match numbers.as_slice() {
        [day, month, year] => Ok((*day, *month, *year)),
        _ => Err(malformed()),
    }
}
