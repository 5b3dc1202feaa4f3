//! Calendar periods for accounting summaries.
//!
//! Every period is a half-open range of dates `[start, end)`. Weeks are ISO weeks, starting
//! on Monday, so the week containing 1 January may belong to the previous year.

use super::AccountingError;
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc, Weekday};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    Day(NaiveDate),
    /// ISO week `week` of ISO year `year`.
    Week { year: i32, week: u32 },
    Month { year: i32, month: u32 },
    Year(i32),
}

impl Period {
    pub fn day(date: NaiveDate) -> Self {
        Period::Day(date)
    }

    /// The ISO week `date` falls in.
    pub fn week_containing(date: NaiveDate) -> Self {
        let iso = date.iso_week();
        Period::Week {
            year: iso.year(),
            week: iso.week(),
        }
    }

    pub fn month_containing(date: NaiveDate) -> Self {
        Period::Month {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year_containing(date: NaiveDate) -> Self {
        Period::Year(date.year())
    }

    /// First day of the period and first day after it.
    pub fn bounds(&self) -> Result<(NaiveDate, NaiveDate), AccountingError> {
        let invalid = || AccountingError::InvalidPeriod(self.to_string());
        match *self {
            Period::Day(date) => Ok((date, date.succ_opt().ok_or_else(invalid)?)),
            Period::Week { year, week } => {
                let start = NaiveDate::from_isoywd_opt(year, week, Weekday::Mon).ok_or_else(invalid)?;
                let end = start
                    .checked_add_signed(Duration::days(7))
                    .ok_or_else(invalid)?;
                Ok((start, end))
            }
            Period::Month { year, month } => {
                let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
                let end = if month == 12 {
                    NaiveDate::from_ymd_opt(year + 1, 1, 1)
                } else {
                    NaiveDate::from_ymd_opt(year, month + 1, 1)
                }
                .ok_or_else(invalid)?;
                Ok((start, end))
            }
            Period::Year(year) => {
                let start = NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(invalid)?;
                let end = NaiveDate::from_ymd_opt(year + 1, 1, 1).ok_or_else(invalid)?;
                Ok((start, end))
            }
        }
    }

    /// The bounds as UTC midnights, for filtering timestamps.
    pub fn utc_bounds(&self) -> Result<(DateTime<Utc>, DateTime<Utc>), AccountingError> {
        let (start, end) = self.bounds()?;
        Ok((midnight(start), midnight(end)))
    }

    pub fn contains_date(&self, date: NaiveDate) -> Result<bool, AccountingError> {
        let (start, end) = self.bounds()?;
        Ok(start <= date && date < end)
    }

    /// The next finer periods covering this one: months of a year, days of a month or
    /// week. A day has no subdivisions.
    pub fn subdivide(&self) -> Result<Vec<Period>, AccountingError> {
        match *self {
            Period::Day(_) => Ok(Vec::new()),
            Period::Year(year) => Ok((1..=12).map(|month| Period::Month { year, month }).collect()),
            Period::Week { .. } | Period::Month { .. } => {
                let (start, end) = self.bounds()?;
                Ok(start
                    .iter_days()
                    .take_while(|day| *day < end)
                    .map(Period::Day)
                    .collect())
            }
        }
    }
}

fn midnight(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Day(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Period::Week { year, week } => write!(f, "{}-W{:02}", year, week),
            Period::Month { year, month } => write!(f, "{}-{:02}", year, month),
            Period::Year(year) => write!(f, "{}", year),
        }
    }
}
