//! `Date` type.
//!
//! Dates are proleptic-Gregorian calendar days represented as a serial
//! number of days relative to 1970-01-01 (serial 0).  No time-of-day is
//! stored; values that carry one are truncated through [`CalendarDay`].
//!
//! # Range
//! Years 1 to 9999 inclusive.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, TimeZone};
use ph_core::errors::{Error, Result};

use crate::month::Month;
use crate::weekday::Weekday;

/// A calendar date represented as a serial day number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum valid date: January 1, year 1.
    pub const MIN: Date = Date(days_from_civil(1, 1, 1));

    /// Maximum valid date: December 31, 9999.
    pub const MAX: Date = Date(days_from_civil(9999, 12, 31));

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number (days since 1970-01-01).
    pub fn from_serial(serial: i32) -> Result<Self> {
        let d = Date(serial);
        if d < Self::MIN || d > Self::MAX {
            return Err(Error::Date(format!("serial {serial} out of range")));
        }
        Ok(d)
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self> {
        if !(1..=9999).contains(&year) {
            return Err(Error::Date(format!("year {year} out of range [1, 9999]")));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(days_from_civil(year, month as u32, day as u32)))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1–9999).
    pub fn year(&self) -> i32 {
        civil_from_days(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        civil_from_days(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        civil_from_days(self.0).2
    }

    /// Return `(year, month, day)` in one decomposition.
    pub fn ymd(&self) -> (i32, u8, u8) {
        civil_from_days(self.0)
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let y = self.year();
        (self.0 - days_from_civil(y, 1, 1) + 1) as u16
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // Serial 0 (1970-01-01) is a Thursday.
        Weekday::from_days_after_monday(self.0 + 3)
    }

    /// Return `true` if this date is a Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        self.weekday().is_weekend()
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        self.0
            .checked_add(n)
            .map(Date)
            .filter(|d| *d >= Self::MIN && *d <= Self::MAX)
            .ok_or_else(|| Error::Date(format!("{self} + {n} days is out of range")))
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = self.ymd();
        Date(days_from_civil(y, m as u32, days_in_month(y, m) as u32))
    }

    /// Return the *n*-th occurrence of `weekday` in `year`/`month`.
    ///
    /// Positive `n` counts from the start of the month (`1` is the first
    /// occurrence); negative `n` counts from the end (`-1` is the last).
    ///
    /// For example, `nth_weekday(-1, Weekday::Monday, 2021, 5)` returns the
    /// last Monday of May 2021 (2021-05-31).
    ///
    /// # Errors
    /// Returns an error if `n` is zero or the month has no such occurrence.
    pub fn nth_weekday(n: i8, weekday: Weekday, year: i32, month: u8) -> Result<Self> {
        if n == 0 {
            return Err(Error::Date("nth_weekday: n must be non-zero".into()));
        }
        let day = if n > 0 {
            let first = Date::from_ymd(year, month, 1)?;
            1 + first.weekday().days_until(weekday) + 7 * (n as i32 - 1)
        } else {
            let last = Date::from_ymd(year, month, days_in_month(year, month))?;
            let back = weekday.days_until(last.weekday());
            last.day_of_month() as i32 - back - 7 * (-(n as i32) - 1)
        };
        if day < 1 || day > days_in_month(year, month) as i32 {
            return Err(Error::Date(format!(
                "nth_weekday: occurrence {n} of {weekday} does not exist in {year}-{month:02}"
            )));
        }
        Date::from_ymd(year, month, day as u8)
    }

    /// Return the first `weekday` falling on or after this date.
    pub fn next_weekday_on_or_after(self, weekday: Weekday) -> Result<Self> {
        self.add_days(self.weekday().days_until(weekday))
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        *self = *self + rhs;
    }
}

impl std::ops::SubAssign<i32> for Date {
    fn sub_assign(&mut self, rhs: i32) {
        *self = *self - rhs;
    }
}

// ── Display / parsing ─────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

impl FromStr for Date {
    type Err = Error;

    /// Parse an ISO `YYYY-MM-DD` date.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::Date(format!("cannot parse {s:?} as YYYY-MM-DD"));
        let mut parts = s.trim().splitn(3, '-');
        let (Some(y), Some(m), Some(d)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid());
        };
        let year = y.parse::<i32>().map_err(|_| invalid())?;
        let month = m.parse::<u8>().map_err(|_| invalid())?;
        let day = d.parse::<u8>().map_err(|_| invalid())?;
        Date::from_ymd(year, month, day)
    }
}

// ── chrono interop ────────────────────────────────────────────────────────────

impl From<Date> for NaiveDate {
    fn from(d: Date) -> NaiveDate {
        let (y, m, day) = d.ymd();
        NaiveDate::from_ymd_opt(y, m as u32, day as u32)
            .expect("years 1..=9999 are within chrono's range")
    }
}

impl TryFrom<NaiveDate> for Date {
    type Error = Error;

    fn try_from(d: NaiveDate) -> Result<Self> {
        use chrono::Datelike;
        Date::from_ymd(d.year(), d.month() as u8, d.day() as u8)
    }
}

/// Anything that denotes a calendar day.
///
/// Values carrying a time of day are truncated to their date, so two inputs
/// differing only in time map to the same [`Date`].  Time-zone aware values
/// use the local date in their own zone.
pub trait CalendarDay {
    /// Return the calendar day, discarding any time-of-day component.
    fn calendar_day(&self) -> Result<Date>;
}

impl CalendarDay for Date {
    fn calendar_day(&self) -> Result<Date> {
        Ok(*self)
    }
}

impl CalendarDay for NaiveDate {
    fn calendar_day(&self) -> Result<Date> {
        Date::try_from(*self)
    }
}

impl CalendarDay for NaiveDateTime {
    fn calendar_day(&self) -> Result<Date> {
        Date::try_from(self.date())
    }
}

impl<Tz: TimeZone> CalendarDay for chrono::DateTime<Tz> {
    fn calendar_day(&self) -> Result<Date> {
        Date::try_from(self.date_naive())
    }
}

impl<T: CalendarDay + ?Sized> CalendarDay for &T {
    fn calendar_day(&self) -> Result<Date> {
        (**self).calendar_day()
    }
}

// ── serde ─────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl serde::Serialize for Date {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year (0 for an invalid month).
pub fn days_in_month(year: i32, month: u8) -> u8 {
    Month::from_number(month).map_or(0, |m| m.days_in(year))
}

/// Convert (year, month, day) to a serial relative to 1970-01-01.
///
/// Years are shifted to start in March so the leap day is the last day of
/// the shifted year; eras are 400-year blocks of 146 097 days.
const fn days_from_civil(year: i32, month: u32, day: u32) -> i32 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = (if y >= 0 { y } else { y - 399 }) / 400;
    let yoe = (y - era * 400) as u32;
    let mp = (month + 9) % 12;
    let doy = (153 * mp + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe as i32 - 719_468
}

/// Decompose a serial number into (year, month, day).
fn civil_from_days(serial: i32) -> (i32, u8, u8) {
    let z = serial + 719_468;
    let era = (if z >= 0 { z } else { z - 146_096 }) / 146_097;
    let doe = (z - era * 146_097) as u32;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = yoe as i32 + era * 400 + if m <= 2 { 1 } else { 0 };
    (y, m as u8, d as u8)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
