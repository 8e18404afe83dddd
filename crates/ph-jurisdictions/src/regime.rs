//! Historical regimes: which rule tables were in force in which years.
//!
//! Holiday legislation changes over time.  A [`Regime`] is the rule set in
//! force over an inclusive range of years; a [`RegimeTable`] holds the
//! non-overlapping regimes of one jurisdiction and picks the right one for
//! a year.  Years covered by no regime have no holidays.

use std::ops::RangeInclusive;

use ph_core::ensure;
use ph_core::errors::Result;
use tracing::debug;

use crate::rule::HolidayRule;

/// Last year a [`Date`](ph_time::Date) can represent; the end of an
/// open-ended regime.
pub const LAST_YEAR: i32 = 9999;

/// Rules in force over an inclusive range of years.
///
/// Rules are given as a list of static tables so that regimes can share a
/// common core and differ only in their additions.
#[derive(Debug, Clone)]
pub struct Regime {
    years: RangeInclusive<i32>,
    tables: Vec<&'static [HolidayRule]>,
}

impl Regime {
    /// Rules in force from `first` to `last`, both inclusive.
    pub fn between(first: i32, last: i32, tables: &[&'static [HolidayRule]]) -> Self {
        Self {
            years: first..=last,
            tables: tables.to_vec(),
        }
    }

    /// Rules in force from `first` onward.
    pub fn since(first: i32, tables: &[&'static [HolidayRule]]) -> Self {
        Self::between(first, LAST_YEAR, tables)
    }

    /// Rules in force in `year` only.
    pub fn single(year: i32, tables: &[&'static [HolidayRule]]) -> Self {
        Self::between(year, year, tables)
    }

    /// Years covered.
    pub fn years(&self) -> &RangeInclusive<i32> {
        &self.years
    }

    /// First year covered.
    pub fn first_year(&self) -> i32 {
        *self.years.start()
    }

    /// Last year covered.
    pub fn last_year(&self) -> i32 {
        *self.years.end()
    }

    /// `true` if `year` falls inside the regime.
    pub fn covers(&self, year: i32) -> bool {
        self.years.contains(&year)
    }

    /// All rules of the regime, table by table.
    pub fn rules(&self) -> impl Iterator<Item = &'static HolidayRule> + '_ {
        self.tables.iter().flat_map(|&table| table.iter())
    }
}

/// The validated regimes of one jurisdiction, sorted by first year.
#[derive(Debug, Clone)]
pub struct RegimeTable {
    regimes: Vec<Regime>,
}

impl RegimeTable {
    /// Sort and validate `regimes`.
    ///
    /// # Errors
    /// [`Error::Precondition`](ph_core::Error::Precondition) if the table is
    /// empty, a regime has an empty year range, or two regimes overlap.
    pub fn new(mut regimes: Vec<Regime>) -> Result<Self> {
        ensure!(!regimes.is_empty(), "a regime table needs at least one regime");
        regimes.sort_by_key(Regime::first_year);
        for r in &regimes {
            ensure!(
                r.first_year() <= r.last_year(),
                "regime {}..={} has an empty year range",
                r.first_year(),
                r.last_year()
            );
        }
        for pair in regimes.windows(2) {
            ensure!(
                pair[0].last_year() < pair[1].first_year(),
                "regimes {}..={} and {}..={} overlap",
                pair[0].first_year(),
                pair[0].last_year(),
                pair[1].first_year(),
                pair[1].last_year()
            );
        }
        Ok(Self { regimes })
    }

    /// The regime in force in `year`, if any.
    pub fn regime_for(&self, year: i32) -> Option<&Regime> {
        let idx = self.regimes.partition_point(|r| r.last_year() < year);
        let found = self.regimes.get(idx).filter(|r| r.covers(year));
        match found {
            Some(r) => debug!(year, first = r.first_year(), last = r.last_year(), "regime selected"),
            None => debug!(year, "no regime covers year"),
        }
        found
    }

    /// First year with any rules.
    pub fn first_year(&self) -> i32 {
        self.regimes[0].first_year()
    }

    /// All regimes in chronological order.
    pub fn regimes(&self) -> &[Regime] {
        &self.regimes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ph_core::Error;
    use ph_time::Month;

    static CORE: [HolidayRule; 1] = [HolidayRule::fixed("New Year's Day", Month::January, 1)];
    static EXTRA: [HolidayRule; 1] = [HolidayRule::fixed("Extra", Month::June, 1)];

    fn table() -> RegimeTable {
        RegimeTable::new(vec![
            Regime::since(2000, &[&CORE, &EXTRA]),
            Regime::between(1990, 1995, &[&CORE]),
        ])
        .unwrap()
    }

    #[test]
    fn regimes_are_sorted() {
        let t = table();
        assert_eq!(t.first_year(), 1990);
        assert_eq!(t.regimes()[1].last_year(), LAST_YEAR);
    }

    #[test]
    fn selection() {
        let t = table();
        assert_eq!(t.regime_for(1992).unwrap().rules().count(), 1);
        assert_eq!(t.regime_for(2024).unwrap().rules().count(), 2);
        assert!(t.regime_for(1997).is_none(), "gap between regimes");
        assert!(t.regime_for(1900).is_none());
    }

    #[test]
    fn overlap_is_rejected() {
        let err = RegimeTable::new(vec![
            Regime::between(1990, 2000, &[&CORE]),
            Regime::since(2000, &[&CORE]),
        ])
        .unwrap_err();
        assert!(matches!(err, Error::Precondition(_)));
    }

    #[test]
    fn empty_inputs_are_rejected() {
        assert!(RegimeTable::new(Vec::new()).is_err());
        assert!(RegimeTable::new(vec![Regime::between(2001, 2000, &[&CORE])]).is_err());
    }

    #[test]
    fn single_year_regime() {
        let t = RegimeTable::new(vec![
            Regime::between(2010, 2016, &[&CORE]),
            Regime::single(2017, &[&CORE, &EXTRA]),
            Regime::since(2018, &[&CORE]),
        ])
        .unwrap();
        assert_eq!(t.regime_for(2017).unwrap().rules().count(), 2);
        assert_eq!(t.regime_for(2018).unwrap().rules().count(), 1);
    }
}
