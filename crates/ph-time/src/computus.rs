//! Computus — the date of Easter Sunday.
//!
//! [`easter`] uses the Meeus/Jones/Butcher Gregorian algorithm.
//! [`orthodox_easter`] computes Easter on the Julian calendar (Meeus Julian
//! algorithm) and converts the result to the Gregorian date on which it is
//! actually observed.
//!
//! Both functions are defined for the years [`Date`] supports (1 to 9999)
//! and panic outside them.  They have been checked against published tables
//! for 1583–4099; results outside that window are arithmetic extrapolations.

use crate::date::Date;

/// Which Easter a jurisdiction keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EasterCalendar {
    /// Western (Gregorian) Easter.
    #[default]
    Western,
    /// Eastern Orthodox (Julian) Easter, expressed as a Gregorian date.
    Orthodox,
}

impl EasterCalendar {
    /// Easter Sunday of `year` under this calendar.
    ///
    /// # Panics
    /// If `year` is outside `1..=9999`.
    pub fn easter(self, year: i32) -> Date {
        match self {
            EasterCalendar::Western => easter(year),
            EasterCalendar::Orthodox => orthodox_easter(year),
        }
    }
}

/// Western Easter Sunday for `year`.
///
/// # Panics
/// If `year` is outside `1..=9999`, the range of [`Date`].
///
/// ```
/// use ph_time::{computus::easter, Date};
/// assert_eq!(easter(2017), Date::from_ymd(2017, 4, 16).unwrap());
/// ```
pub fn easter(year: i32) -> Date {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let n = h + l - 7 * m + 114;
    march_april(year, n)
}

/// Orthodox Easter Sunday for `year`, as a Gregorian date.
///
/// # Panics
/// If `year` is outside `1..=9999`, the range of [`Date`].
///
/// ```
/// use ph_time::{computus::orthodox_easter, Date};
/// assert_eq!(orthodox_easter(2021), Date::from_ymd(2021, 5, 2).unwrap());
/// ```
pub fn orthodox_easter(year: i32) -> Date {
    let a = year % 4;
    let b = year % 7;
    let c = year % 19;
    let d = (19 * c + 15) % 30;
    let e = (2 * a + 4 * b - d + 34) % 7;
    let julian = march_april(year, d + e + 114);
    // Julian calendar lag behind Gregorian for dates after the leap day.
    julian + (year / 100 - year / 400 - 2)
}

/// Decode the packed `month * 31 + (day - 1)` value both algorithms end with.
///
/// Inside `Date`'s year range the value always decodes to a day between
/// 22 March and 25 April, so only the year can make `from_ymd` fail.
fn march_april(year: i32, n: i32) -> Date {
    let month = (n / 31) as u8;
    let day = (n % 31 + 1) as u8;
    Date::from_ymd(year, month, day).expect("Easter is only computed for years 1..=9999")
}
