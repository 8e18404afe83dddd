//! # ph-time
//!
//! The holiday calculation engine: dates, the computus, moving feasts,
//! weekend-observance policies, holiday records, and business-day
//! arithmetic over any holiday set.
//!
//! Everything here is pure: functions read their arguments and return
//! values, with no shared mutable state.  The business-day scan bound is a
//! [`ph_core::ScanLimit`] value, defaulted or passed in by the caller.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Business-day arithmetic over an [`IsHoliday`] set.
pub mod business_days;

/// `IsHoliday` and `PublicHolidays` capability traits.
pub mod calendar;

/// Easter Sunday (Western and Orthodox).
pub mod computus;

/// `Date` type.
pub mod date;

/// `HolidayRecord` and the per-year `YearHolidays` set.
pub mod holiday;

/// `Month` — month of the year.
pub mod month;

/// Feasts at fixed offsets from Easter.
pub mod moving_feast;

/// Weekend-observance policies.
pub mod observance;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use business_days::{
    business_days_add, business_days_add_with_limit, business_days_between, is_working_day,
    next_working_day, next_working_day_with_limit, previous_working_day,
    previous_working_day_with_limit,
};
pub use calendar::{HolidayFn, IsHoliday, NoHolidays, PublicHolidayCalendar, PublicHolidays};
pub use computus::{easter, orthodox_easter, EasterCalendar};
pub use date::{CalendarDay, Date};
pub use holiday::{HolidayRecord, YearHolidays};
pub use month::Month;
pub use moving_feast::MovingFeast;
pub use observance::{
    fix_sunday, fix_sunday_two_holiday_after, fix_weekend,
    fix_weekend_saturday_before_sunday_after, fix_weekend_two_holiday_after,
    fix_weekend_two_holiday_before, Observance,
};
pub use weekday::Weekday;
