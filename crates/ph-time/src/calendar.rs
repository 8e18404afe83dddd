//! Holiday capabilities.
//!
//! [`IsHoliday`] is the minimal membership test the business-day functions
//! consume.  [`PublicHolidays`] is the full capability a jurisdiction
//! provides: its holiday records for a year, with the membership and
//! business-day queries derived from them.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::hash::BuildHasher;

use ph_core::errors::Result;

use crate::business_days;
use crate::date::Date;
use crate::holiday::{HolidayRecord, YearHolidays};

/// Holiday membership test.
pub trait IsHoliday {
    /// Return `true` if `date` is a holiday (weekends are handled by the
    /// business-day functions, not here).
    fn is_holiday(&self, date: Date) -> bool;
}

impl<T: IsHoliday + ?Sized> IsHoliday for &T {
    fn is_holiday(&self, date: Date) -> bool {
        (**self).is_holiday(date)
    }
}

impl IsHoliday for BTreeSet<Date> {
    fn is_holiday(&self, date: Date) -> bool {
        self.contains(&date)
    }
}

impl<S: BuildHasher> IsHoliday for HashSet<Date, S> {
    fn is_holiday(&self, date: Date) -> bool {
        self.contains(&date)
    }
}

impl IsHoliday for [Date] {
    fn is_holiday(&self, date: Date) -> bool {
        self.contains(&date)
    }
}

impl IsHoliday for Vec<Date> {
    fn is_holiday(&self, date: Date) -> bool {
        self.contains(&date)
    }
}

impl IsHoliday for YearHolidays {
    fn is_holiday(&self, date: Date) -> bool {
        self.contains(date)
    }
}

/// Adapts a predicate `Fn(Date) -> bool` to [`IsHoliday`].
#[derive(Debug, Clone, Copy)]
pub struct HolidayFn<F>(pub F);

impl<F: Fn(Date) -> bool> IsHoliday for HolidayFn<F> {
    fn is_holiday(&self, date: Date) -> bool {
        (self.0)(date)
    }
}

/// No holidays at all: only weekends are non-working days.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHolidays;

impl IsHoliday for NoHolidays {
    fn is_holiday(&self, _date: Date) -> bool {
        false
    }
}

/// Public and bank holidays of one jurisdiction.
///
/// Implementors supply [`holidays`](PublicHolidays::holidays); every other
/// query is derived from it.  Only records flagged public count for
/// membership and business-day arithmetic.
pub trait PublicHolidays: Send + Sync {
    /// Human-readable name (e.g. `"United Kingdom"`).
    fn name(&self) -> &str;

    /// Registry code (e.g. `"GB"`).
    fn code(&self) -> &str;

    /// All holiday records of `year`, public or not, keyed by observed date.
    fn holidays(&self, year: i32) -> YearHolidays;

    /// Public holiday records of `year` in observed-date order.
    fn public_holidays_information(&self, year: i32) -> Vec<HolidayRecord> {
        self.holidays(year)
            .into_iter()
            .filter(HolidayRecord::is_public)
            .collect()
    }

    /// Observed dates of the public holidays of `year`.
    fn public_holidays(&self, year: i32) -> BTreeSet<Date> {
        self.holidays(year)
            .iter()
            .filter(|r| r.is_public())
            .map(HolidayRecord::observed_date)
            .collect()
    }

    /// Observed date → name for the public holidays of `year`.  Has exactly
    /// the keys of [`public_holidays`](PublicHolidays::public_holidays).
    fn public_holiday_names(&self, year: i32) -> BTreeMap<Date, String> {
        self.holidays(year)
            .into_iter()
            .filter(HolidayRecord::is_public)
            .map(|r| (r.observed_date(), r.name().to_owned()))
            .collect()
    }

    /// Holiday records of `year` applying in `region` (nationwide records
    /// included).
    fn holidays_in_region(&self, year: i32, region: &str) -> Vec<HolidayRecord> {
        self.holidays(year)
            .into_iter()
            .filter(|r| r.applies_to(region))
            .collect()
    }

    /// `true` if a public holiday is observed on `date`.
    fn is_public_holiday(&self, date: Date) -> bool {
        self.holidays(date.year())
            .get(date)
            .is_some_and(HolidayRecord::is_public)
    }

    /// `true` if `date` is neither a weekend day nor a public holiday.
    fn is_working_day(&self, date: Date) -> bool {
        business_days::is_working_day(&PublicHolidayCalendar::new(self), date)
    }

    /// `date` if it is a working day, else the next working day after it.
    fn next_working_day(&self, date: Date) -> Result<Date> {
        business_days::next_working_day(&PublicHolidayCalendar::new(self), date, 0, true)
    }

    /// `date` if it is a working day, else the last working day before it.
    fn previous_working_day(&self, date: Date) -> Result<Date> {
        business_days::previous_working_day(&PublicHolidayCalendar::new(self), date, 0, true)
    }

    /// The `count`-th working day strictly after `date`.
    fn business_days_add(&self, date: Date, count: i32) -> Result<Date> {
        business_days::business_days_add(&PublicHolidayCalendar::new(self), date, count)
    }

    /// Working days in the inclusive range `[start, end]`.
    fn business_days_between(&self, start: Date, end: Date) -> Result<u32> {
        business_days::business_days_between(&PublicHolidayCalendar::new(self), start, end)
    }
}

/// [`IsHoliday`] view of a [`PublicHolidays`] jurisdiction.
///
/// Caches the public holiday dates of the most recently queried year, so a
/// scan crossing many days of the same year builds that year only once.
pub struct PublicHolidayCalendar<'a, P: ?Sized> {
    jurisdiction: &'a P,
    cache: RefCell<Option<(i32, BTreeSet<Date>)>>,
}

impl<'a, P: PublicHolidays + ?Sized> PublicHolidayCalendar<'a, P> {
    /// Wrap `jurisdiction`.
    pub fn new(jurisdiction: &'a P) -> Self {
        Self {
            jurisdiction,
            cache: RefCell::new(None),
        }
    }
}

impl<P: PublicHolidays + ?Sized> IsHoliday for PublicHolidayCalendar<'_, P> {
    fn is_holiday(&self, date: Date) -> bool {
        let year = date.year();
        let mut cache = self.cache.borrow_mut();
        if let Some((cached, dates)) = cache.as_ref() {
            if *cached == year {
                return dates.contains(&date);
            }
        }
        let dates = self.jurisdiction.public_holidays(year);
        let hit = dates.contains(&date);
        *cache = Some((year, dates));
        hit
    }
}
