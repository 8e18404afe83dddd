//! Holiday rules: one row of a jurisdiction's table.
//!
//! A rule names how to find the nominal date in a year, how weekends are
//! observed, whether the holiday is public, and where it applies.  Rules
//! are `const`-constructible so tables are plain static data.

use ph_time::computus::EasterCalendar;
use ph_time::{Date, HolidayRecord, Month, MovingFeast, Observance, Weekday};

/// How the nominal date of a rule is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRule {
    /// The same month and day every year.
    Fixed {
        /// Month.
        month: Month,
        /// Day of month.
        day: u8,
    },
    /// A fixed offset from Easter Sunday.
    Easter {
        /// Which feast (offset) to take.
        feast: MovingFeast,
        /// Which Easter to offset from.
        calendar: EasterCalendar,
    },
    /// The `n`-th given weekday of a month (`n < 0` counts from the end).
    NthWeekday {
        /// Month.
        month: Month,
        /// Weekday.
        weekday: Weekday,
        /// Occurrence; `-1` is the last.
        n: i8,
    },
    /// The first given weekday falling on or after a month/day.
    WeekdayOnOrAfter {
        /// Month of the reference day.
        month: Month,
        /// Reference day of month.
        day: u8,
        /// Weekday sought.
        weekday: Weekday,
    },
    /// A single date, produced only in its own year.
    OneOff {
        /// Year.
        year: i32,
        /// Month.
        month: Month,
        /// Day of month.
        day: u8,
    },
}

impl DateRule {
    /// The nominal date in `year`, or `None` if the rule yields nothing
    /// that year.
    pub fn nominal_date(&self, year: i32) -> Option<Date> {
        if !(Date::MIN.year()..=Date::MAX.year()).contains(&year) {
            return None;
        }
        match *self {
            DateRule::Fixed { month, day } => Date::from_ymd(year, month.number(), day).ok(),
            DateRule::Easter { feast, calendar } => {
                Some(feast.date_from(calendar.easter(year)))
            }
            DateRule::NthWeekday { month, weekday, n } => {
                Date::nth_weekday(n, weekday, year, month.number()).ok()
            }
            DateRule::WeekdayOnOrAfter {
                month,
                day,
                weekday,
            } => Date::from_ymd(year, month.number(), day)
                .and_then(|d| d.next_weekday_on_or_after(weekday))
                .ok(),
            DateRule::OneOff {
                year: only,
                month,
                day,
            } => {
                if year == only {
                    Date::from_ymd(year, month.number(), day).ok()
                } else {
                    None
                }
            }
        }
    }
}

/// One holiday of a jurisdiction's table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HolidayRule {
    name: &'static str,
    date: DateRule,
    observance: Observance,
    public: bool,
    regions: &'static [&'static str],
    except_years: &'static [i32],
    moves_on_clash: bool,
}

impl HolidayRule {
    const fn with_date(name: &'static str, date: DateRule) -> Self {
        Self {
            name,
            date,
            observance: Observance::Nominal,
            public: true,
            regions: &[],
            except_years: &[],
            moves_on_clash: false,
        }
    }

    /// A holiday on the same month and day every year.
    pub const fn fixed(name: &'static str, month: Month, day: u8) -> Self {
        Self::with_date(name, DateRule::Fixed { month, day })
    }

    /// A Western-Easter moving feast.
    pub const fn easter(name: &'static str, feast: MovingFeast) -> Self {
        Self::with_date(
            name,
            DateRule::Easter {
                feast,
                calendar: EasterCalendar::Western,
            },
        )
    }

    /// An Orthodox-Easter moving feast.
    pub const fn orthodox(name: &'static str, feast: MovingFeast) -> Self {
        Self::with_date(
            name,
            DateRule::Easter {
                feast,
                calendar: EasterCalendar::Orthodox,
            },
        )
    }

    /// The `n`-th `weekday` of `month` (`n = -1` for the last).
    pub const fn nth_weekday(name: &'static str, month: Month, weekday: Weekday, n: i8) -> Self {
        Self::with_date(name, DateRule::NthWeekday { month, weekday, n })
    }

    /// The first `weekday` on or after `month`/`day`.
    pub const fn weekday_on_or_after(
        name: &'static str,
        month: Month,
        day: u8,
        weekday: Weekday,
    ) -> Self {
        Self::with_date(
            name,
            DateRule::WeekdayOnOrAfter {
                month,
                day,
                weekday,
            },
        )
    }

    /// A single-occasion holiday.
    pub const fn one_off(name: &'static str, year: i32, month: Month, day: u8) -> Self {
        Self::with_date(name, DateRule::OneOff { year, month, day })
    }

    /// Set the weekend observance policy.
    pub const fn observed(mut self, observance: Observance) -> Self {
        self.observance = observance;
        self
    }

    /// Restrict the holiday to `regions`.  Regional holidays are not
    /// public: they do not close the jurisdiction as a whole.
    pub const fn regional(mut self, regions: &'static [&'static str]) -> Self {
        self.regions = regions;
        self.public = false;
        self
    }

    /// Mark the holiday as an optional commemoration (not a day off).
    pub const fn commemoration(mut self) -> Self {
        self.public = false;
        self
    }

    /// Skip the rule in the listed years (e.g. when a holiday was moved
    /// by proclamation and a one-off rule takes its place).
    pub const fn except(mut self, years: &'static [i32]) -> Self {
        self.except_years = years;
        self
    }

    /// When the weekend substitute day is already taken by another holiday,
    /// move on to the next weekday that is free instead of being dropped.
    pub const fn moves_on_clash(mut self) -> Self {
        self.moves_on_clash = true;
        self
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Date rule.
    pub fn date_rule(&self) -> DateRule {
        self.date
    }

    /// Weekend observance policy.
    pub fn observance(&self) -> Observance {
        self.observance
    }

    /// `true` for a nationwide statutory holiday.
    pub fn is_public(&self) -> bool {
        self.public
    }

    /// Regions the rule is restricted to (empty for nationwide).
    pub fn regions(&self) -> &'static [&'static str] {
        self.regions
    }

    /// `true` if a taken substitute day moves on to the next free weekday.
    pub fn is_moved_on_clash(&self) -> bool {
        self.moves_on_clash
    }

    /// The holiday record this rule produces for `year`, if any.
    pub fn record(&self, year: i32) -> Option<HolidayRecord> {
        if self.except_years.contains(&year) {
            return None;
        }
        let nominal = self.date.nominal_date(year)?;
        let observed = self.observance.apply(nominal)?;
        Some(
            HolidayRecord::new(nominal, observed, self.name)
                .with_public(self.public)
                .with_regions(self.regions.iter().copied()),
        )
    }
}
