//! A jurisdiction driven by a regime table of holiday rules.

use ph_time::{Date, HolidayRecord, PublicHolidays, YearHolidays};
use tracing::{debug, warn};

use crate::regime::RegimeTable;
use crate::rule::HolidayRule;

/// A country (or similar) whose holidays come from a [`RegimeTable`].
///
/// Rules are evaluated for the neighbouring years as well as the requested
/// one, so a holiday whose observance crosses a year boundary (New Year's
/// Day on a Saturday observed on the preceding Friday, say) lands in the
/// year it is actually observed.
#[derive(Debug, Clone)]
pub struct Jurisdiction {
    code: &'static str,
    name: &'static str,
    regions: &'static [(&'static str, &'static str)],
    regimes: RegimeTable,
}

impl Jurisdiction {
    /// A jurisdiction with no subdivisions.
    pub fn new(code: &'static str, name: &'static str, regimes: RegimeTable) -> Self {
        Self {
            code,
            name,
            regions: &[],
            regimes,
        }
    }

    /// Attach the `(code, name)` list of subdivisions regional rules refer to.
    pub fn with_regions(mut self, regions: &'static [(&'static str, &'static str)]) -> Self {
        self.regions = regions;
        self
    }

    /// Subdivisions as `(code, name)` pairs.
    pub fn regions(&self) -> &'static [(&'static str, &'static str)] {
        self.regions
    }

    /// The underlying regime table.
    pub fn regimes(&self) -> &RegimeTable {
        &self.regimes
    }

    fn records_for_rule_year(
        &self,
        rule_year: i32,
    ) -> impl Iterator<Item = (&'static HolidayRule, HolidayRecord)> + '_ {
        self.regimes
            .regime_for(rule_year)
            .into_iter()
            .flat_map(|regime| regime.rules())
            .filter_map(move |rule| rule.record(rule_year).map(|record| (rule, record)))
    }
}

/// The first weekday after `record`'s observed date that is still free in
/// `set`, provided it stays inside `year`.
fn next_free_weekday(set: &YearHolidays, record: &HolidayRecord, year: i32) -> Option<Date> {
    let mut date = record.observed_date();
    loop {
        date = date.add_days(1).ok()?;
        if date.year() != year {
            return None;
        }
        if !date.is_weekend() && !set.contains(date) {
            return Some(date);
        }
    }
}

impl PublicHolidays for Jurisdiction {
    fn name(&self) -> &str {
        self.name
    }

    fn code(&self) -> &str {
        self.code
    }

    fn holidays(&self, year: i32) -> YearHolidays {
        let mut set = YearHolidays::new();
        let (min, max) = (Date::MIN.year(), Date::MAX.year());
        if !(min..=max).contains(&year) {
            return set;
        }
        for rule_year in (year - 1).max(min)..=(year + 1).min(max) {
            for (rule, record) in self.records_for_rule_year(rule_year) {
                if record.observed_date().year() != year {
                    continue;
                }
                let Err(clashing) = set.try_insert(record) else {
                    continue;
                };
                let dropped = if rule.is_moved_on_clash() && clashing.is_shifted() {
                    match next_free_weekday(&set, &clashing, year) {
                        Some(free) => {
                            debug!(
                                jurisdiction = self.code,
                                holiday = clashing.name(),
                                from = %clashing.observed_date(),
                                to = %free,
                                "substitute day taken; moving on"
                            );
                            set.try_insert(clashing.observed_on(free)).err()
                        }
                        None => Some(clashing),
                    }
                } else {
                    Some(clashing)
                };
                if let Some(dropped) = dropped {
                    warn!(
                        jurisdiction = self.code,
                        date = %dropped.observed_date(),
                        dropped = dropped.name(),
                        "holiday collides with an earlier rule; keeping the first"
                    );
                }
            }
        }
        set
    }
}
