//! Business-day arithmetic over any holiday set.
//!
//! Every function takes the holidays as an [`IsHoliday`] implementor and
//! treats Saturday and Sunday as non-working days in addition.  Input dates
//! go through [`CalendarDay`], so a time of day is discarded before any
//! comparison.
//!
//! Scans walk one calendar day at a time.  A run of consecutive non-working
//! days longer than the [`ScanLimit`] aborts the scan with
//! [`Error::ScanLimit`], which bounds the work done against a holiday set
//! that never lets a working day through.  The plain functions use
//! [`ScanLimit::default`]; the `_with_limit` variants take it as an
//! argument.

use ph_core::errors::{Error, Result};
use ph_core::settings::ScanLimit;
use tracing::trace;

use crate::calendar::IsHoliday;
use crate::date::{CalendarDay, Date};

/// `true` if `date` is neither a weekend day nor a holiday.
pub fn is_working_day<H: IsHoliday + ?Sized>(holidays: &H, date: Date) -> bool {
    !date.is_weekend() && !holidays.is_holiday(date)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

impl Direction {
    fn step(self) -> i32 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// Walk from `origin` (exclusive) in `direction` until `count` working days
/// have been consumed, returning the last one.
fn scan<H: IsHoliday + ?Sized>(
    holidays: &H,
    origin: Date,
    count: u32,
    direction: Direction,
    limit: ScanLimit,
) -> Result<Date> {
    let limit = limit.days();
    let step = direction.step();
    let mut date = origin;
    let mut remaining = count;
    let mut gap = 0u32;
    while remaining > 0 {
        date = date.add_days(step)?;
        if is_working_day(holidays, date) {
            remaining -= 1;
            gap = 0;
        } else {
            gap += 1;
            if gap > limit {
                return Err(Error::ScanLimit { limit });
            }
        }
    }
    trace!(%origin, count, ?direction, result = %date, "business-day scan");
    Ok(date)
}

fn non_negative(n: i32, what: &str) -> Result<u32> {
    u32::try_from(n).map_err(|_| Error::InvalidArgument(format!("{what} must be non-negative, got {n}")))
}

/// The working day reached by moving `open_day_add` working days forward.
///
/// With `open_day_add == 0` and `same_day`, a working `date` is returned
/// unchanged; otherwise the result is the `max(open_day_add, 1)`-th working
/// day strictly after `date`.
///
/// # Errors
/// [`Error::InvalidArgument`] if `open_day_add` is negative.
///
/// ```
/// use std::collections::BTreeSet;
/// use ph_time::{business_days::next_working_day, Date};
///
/// let holidays: BTreeSet<Date> = ["2021-10-11"].iter().map(|s| s.parse().unwrap()).collect();
/// let friday: Date = "2021-10-08".parse().unwrap();
/// let next = next_working_day(&holidays, friday, 1, true).unwrap();
/// assert_eq!(next.to_string(), "2021-10-12");
/// ```
pub fn next_working_day<H, D>(holidays: &H, date: D, open_day_add: i32, same_day: bool) -> Result<Date>
where
    H: IsHoliday + ?Sized,
    D: CalendarDay,
{
    next_working_day_with_limit(holidays, date, open_day_add, same_day, ScanLimit::default())
}

/// [`next_working_day`] with an explicit scan limit.
///
/// # Errors
/// [`Error::InvalidArgument`] if `open_day_add` is negative,
/// [`Error::ScanLimit`] if more than `limit` consecutive days are closed.
pub fn next_working_day_with_limit<H, D>(
    holidays: &H,
    date: D,
    open_day_add: i32,
    same_day: bool,
    limit: ScanLimit,
) -> Result<Date>
where
    H: IsHoliday + ?Sized,
    D: CalendarDay,
{
    let count = non_negative(open_day_add, "open_day_add")?;
    let date = date.calendar_day()?;
    if count == 0 && same_day && is_working_day(holidays, date) {
        return Ok(date);
    }
    scan(holidays, date, count.max(1), Direction::Forward, limit)
}

/// Mirror image of [`next_working_day`], moving backward in time.
///
/// # Errors
/// [`Error::InvalidArgument`] if `open_day_subtract` is negative.
pub fn previous_working_day<H, D>(
    holidays: &H,
    date: D,
    open_day_subtract: i32,
    same_day: bool,
) -> Result<Date>
where
    H: IsHoliday + ?Sized,
    D: CalendarDay,
{
    previous_working_day_with_limit(holidays, date, open_day_subtract, same_day, ScanLimit::default())
}

/// [`previous_working_day`] with an explicit scan limit.
pub fn previous_working_day_with_limit<H, D>(
    holidays: &H,
    date: D,
    open_day_subtract: i32,
    same_day: bool,
    limit: ScanLimit,
) -> Result<Date>
where
    H: IsHoliday + ?Sized,
    D: CalendarDay,
{
    let count = non_negative(open_day_subtract, "open_day_subtract")?;
    let date = date.calendar_day()?;
    if count == 0 && same_day && is_working_day(holidays, date) {
        return Ok(date);
    }
    scan(holidays, date, count.max(1), Direction::Backward, limit)
}

/// The `count`-th working day strictly after `date`; `date` itself when
/// `count` is zero.
///
/// # Errors
/// [`Error::InvalidArgument`] if `count` is negative.
pub fn business_days_add<H, D>(holidays: &H, date: D, count: i32) -> Result<Date>
where
    H: IsHoliday + ?Sized,
    D: CalendarDay,
{
    business_days_add_with_limit(holidays, date, count, ScanLimit::default())
}

/// [`business_days_add`] with an explicit scan limit.
pub fn business_days_add_with_limit<H, D>(holidays: &H, date: D, count: i32, limit: ScanLimit) -> Result<Date>
where
    H: IsHoliday + ?Sized,
    D: CalendarDay,
{
    let count = non_negative(count, "count")?;
    let date = date.calendar_day()?;
    scan(holidays, date, count, Direction::Forward, limit)
}

/// Number of working days in the inclusive range `[start, end]`.
///
/// Returns 0 when `end < start`.
pub fn business_days_between<H, D1, D2>(holidays: &H, start: D1, end: D2) -> Result<u32>
where
    H: IsHoliday + ?Sized,
    D1: CalendarDay,
    D2: CalendarDay,
{
    let start = start.calendar_day()?;
    let end = end.calendar_day()?;
    if end < start {
        return Ok(0);
    }
    let mut count = 0;
    let mut d = start;
    loop {
        if is_working_day(holidays, d) {
            count += 1;
        }
        if d == end {
            break;
        }
        d += 1;
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{HolidayFn, NoHolidays};
    use std::collections::BTreeSet;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn october_2021() -> BTreeSet<Date> {
        [4, 5, 6, 11, 15, 20].iter().map(|&d| date(2021, 10, d)).collect()
    }

    fn christmas_2024() -> BTreeSet<Date> {
        [date(2024, 12, 25), date(2025, 1, 1)].into_iter().collect()
    }

    #[test]
    fn next_skips_weekend_and_holiday() {
        let h = october_2021();
        let at = chrono::NaiveDate::from_ymd_opt(2021, 10, 8)
            .unwrap()
            .and_hms_opt(1, 1, 1)
            .unwrap();
        assert_eq!(next_working_day(&h, at, 1, true).unwrap(), date(2021, 10, 12));
        assert_eq!(next_working_day(&h, at, 1, false).unwrap(), date(2021, 10, 12));
    }

    #[test]
    fn next_zero_same_day() {
        let h = october_2021();
        // Working Friday is returned as is.
        assert_eq!(next_working_day(&h, date(2021, 10, 8), 0, true).unwrap(), date(2021, 10, 8));
        // A holiday run moves to the first working day after it.
        assert_eq!(next_working_day(&h, date(2021, 10, 4), 0, true).unwrap(), date(2021, 10, 7));
        // same_day = false always moves.
        assert_eq!(next_working_day(&h, date(2021, 10, 8), 0, false).unwrap(), date(2021, 10, 12));
    }

    #[test]
    fn next_counts_multiple_days() {
        let h = october_2021();
        // Thu 7 → Fri 8 (1), Tue 12 (2), Wed 13 (3), Thu 14 (4), Mon 18 (5)
        assert_eq!(next_working_day(&h, date(2021, 10, 7), 5, true).unwrap(), date(2021, 10, 18));
    }

    #[test]
    fn previous_mirrors_next() {
        let h = october_2021();
        assert_eq!(previous_working_day(&h, date(2021, 10, 12), 1, true).unwrap(), date(2021, 10, 8));
        assert_eq!(previous_working_day(&h, date(2021, 10, 11), 0, true).unwrap(), date(2021, 10, 8));
        assert_eq!(previous_working_day(&h, date(2021, 10, 7), 0, true).unwrap(), date(2021, 10, 7));
        assert_eq!(previous_working_day(&h, date(2021, 10, 7), 0, false).unwrap(), date(2021, 10, 1));
    }

    #[test]
    fn negative_counts_are_rejected() {
        let h = october_2021();
        assert!(matches!(
            next_working_day(&h, date(2021, 10, 8), -1, true),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            previous_working_day(&h, date(2021, 10, 8), -3, false),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            business_days_add(&h, date(2021, 10, 8), -1),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn add_over_christmas() {
        let h = christmas_2024();
        assert_eq!(business_days_add(&h, date(2024, 12, 24), 5).unwrap(), date(2025, 1, 2));
        assert_eq!(business_days_add(&h, date(2024, 12, 24), 0).unwrap(), date(2024, 12, 24));
        assert_eq!(business_days_add(&h, date(2024, 12, 24), 1).unwrap(), date(2024, 12, 26));
    }

    #[test]
    fn between_over_christmas() {
        let h = christmas_2024();
        assert_eq!(business_days_between(&h, date(2024, 12, 24), date(2025, 1, 2)).unwrap(), 6);
    }

    #[test]
    fn between_degenerate_ranges() {
        let h = christmas_2024();
        assert_eq!(business_days_between(&h, date(2025, 1, 2), date(2024, 12, 24)).unwrap(), 0);
        assert_eq!(business_days_between(&h, date(2024, 12, 24), date(2024, 12, 24)).unwrap(), 1);
        assert_eq!(business_days_between(&h, date(2024, 12, 25), date(2024, 12, 25)).unwrap(), 0);
        assert_eq!(business_days_between(&h, date(2024, 12, 28), date(2024, 12, 28)).unwrap(), 0);
    }

    #[test]
    fn weekends_only() {
        // Mon 2023-09-04 .. Fri 2023-09-08
        assert_eq!(business_days_between(&NoHolidays, date(2023, 9, 4), date(2023, 9, 8)).unwrap(), 5);
        assert_eq!(next_working_day(&NoHolidays, date(2023, 9, 2), 0, true).unwrap(), date(2023, 9, 4));
    }

    #[test]
    fn limit_is_an_argument_not_a_setting() {
        let first = date(2024, 1, 1);
        let closure = HolidayFn(move |d: Date| (0..40).contains(&(d - first)));
        let short = ScanLimit::new(30);
        assert_eq!(
            next_working_day_with_limit(&closure, first, 0, true, short),
            Err(Error::ScanLimit { limit: 30 })
        );
        // The short limit above does not carry over into the defaulted call.
        assert_eq!(next_working_day(&closure, first, 0, true).unwrap(), date(2024, 2, 12));
        assert_eq!(
            business_days_add_with_limit(&closure, first, 1, ScanLimit::new(41)).unwrap(),
            date(2024, 2, 12)
        );
    }

    #[test]
    fn closure_holidays() {
        let fridays = HolidayFn(|d: Date| d.weekday() == crate::weekday::Weekday::Friday);
        assert_eq!(next_working_day(&fridays, date(2023, 9, 7), 1, true).unwrap(), date(2023, 9, 11));
    }
}
