//! Holiday records and the per-year holiday set.
//!
//! A [`HolidayRecord`] is compared, ordered and hashed by its **observed**
//! date only: two records denote the same day off when they are observed on
//! the same date, whatever their names.  The observed date is reached
//! through [`HolidayRecord::observed_date`]; there is no implicit
//! conversion to [`Date`].

use std::cmp::Ordering;
use std::collections::btree_map::{self, BTreeMap};
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

use tracing::warn;

use crate::date::Date;

/// One holiday as it applies in a given year.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HolidayRecord {
    nominal_date: Date,
    observed_date: Date,
    name: String,
    is_public: bool,
    regions: Option<BTreeSet<String>>,
}

impl HolidayRecord {
    /// A nationwide public holiday observed on `observed_date`.
    pub fn new(nominal_date: Date, observed_date: Date, name: impl Into<String>) -> Self {
        Self {
            nominal_date,
            observed_date,
            name: name.into(),
            is_public: true,
            regions: None,
        }
    }

    /// A nationwide public holiday observed on its nominal date.
    pub fn on(date: Date, name: impl Into<String>) -> Self {
        Self::new(date, date, name)
    }

    /// Mark the record as public (statutory) or not.
    pub fn with_public(mut self, is_public: bool) -> Self {
        self.is_public = is_public;
        self
    }

    /// The same holiday observed on `date` instead.
    pub fn observed_on(mut self, date: Date) -> Self {
        self.observed_date = date;
        self
    }

    /// Restrict the record to the given regions.  An empty iterator keeps it
    /// nationwide.
    pub fn with_regions<I, S>(mut self, regions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set: BTreeSet<String> = regions.into_iter().map(Into::into).collect();
        self.regions = (!set.is_empty()).then_some(set);
        self
    }

    /// The date the holiday formally falls on.
    pub fn nominal_date(&self) -> Date {
        self.nominal_date
    }

    /// The date the day off is taken.
    pub fn observed_date(&self) -> Date {
        self.observed_date
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `true` for a statutory holiday, `false` for an optional commemoration.
    pub fn is_public(&self) -> bool {
        self.is_public
    }

    /// Regions the holiday is restricted to; `None` means nationwide.
    pub fn regions(&self) -> Option<&BTreeSet<String>> {
        self.regions.as_ref()
    }

    /// `true` when the holiday applies everywhere in the jurisdiction.
    pub fn is_nationwide(&self) -> bool {
        self.regions.is_none()
    }

    /// `true` when the holiday applies in `region` (nationwide holidays
    /// apply in every region).
    pub fn applies_to(&self, region: &str) -> bool {
        self.regions
            .as_ref()
            .map_or(true, |r| r.iter().any(|x| x.eq_ignore_ascii_case(region)))
    }

    /// `true` when the observed date differs from the nominal date.
    pub fn is_shifted(&self) -> bool {
        self.observed_date != self.nominal_date
    }
}

impl PartialEq for HolidayRecord {
    fn eq(&self, other: &Self) -> bool {
        self.observed_date == other.observed_date
    }
}

impl Eq for HolidayRecord {}

impl PartialOrd for HolidayRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HolidayRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.observed_date.cmp(&other.observed_date)
    }
}

impl Hash for HolidayRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.observed_date.hash(state);
    }
}

impl std::fmt::Display for HolidayRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.observed_date, self.name)?;
        if self.is_shifted() {
            write!(f, " (from {})", self.nominal_date)?;
        }
        Ok(())
    }
}

/// The holidays of one jurisdiction for one year, keyed by observed date.
///
/// Keys are unique: at most one record per observed date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YearHolidays {
    records: BTreeMap<Date, HolidayRecord>,
}

impl YearHolidays {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` unless its observed date is already taken.
    ///
    /// On collision the existing record is kept and `record` is handed back.
    pub fn try_insert(&mut self, record: HolidayRecord) -> Result<(), HolidayRecord> {
        match self.records.entry(record.observed_date) {
            btree_map::Entry::Vacant(slot) => {
                slot.insert(record);
                Ok(())
            }
            btree_map::Entry::Occupied(_) => Err(record),
        }
    }

    /// The record observed on `date`, if any.
    pub fn get(&self, date: Date) -> Option<&HolidayRecord> {
        self.records.get(&date)
    }

    /// `true` if a holiday is observed on `date`.
    pub fn contains(&self, date: Date) -> bool {
        self.records.contains_key(&date)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// `true` if there are no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in observed-date order.
    pub fn iter(&self) -> btree_map::Values<'_, Date, HolidayRecord> {
        self.records.values()
    }

    /// Observed dates in order.
    pub fn dates(&self) -> BTreeSet<Date> {
        self.records.keys().copied().collect()
    }

    /// Keep only the records matching `keep`.
    pub fn retain(&mut self, mut keep: impl FnMut(&HolidayRecord) -> bool) {
        self.records.retain(|_, r| keep(r));
    }
}

impl FromIterator<HolidayRecord> for YearHolidays {
    /// Collect records; a later record colliding with an earlier observed
    /// date is discarded with a `warn!` event.
    fn from_iter<I: IntoIterator<Item = HolidayRecord>>(iter: I) -> Self {
        let mut set = YearHolidays::new();
        for record in iter {
            if let Err(dropped) = set.try_insert(record) {
                warn!(
                    date = %dropped.observed_date(),
                    dropped = dropped.name(),
                    "duplicate observed date; keeping the first record"
                );
            }
        }
        set
    }
}

impl IntoIterator for YearHolidays {
    type Item = HolidayRecord;
    type IntoIter = btree_map::IntoValues<Date, HolidayRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_values()
    }
}

impl<'a> IntoIterator for &'a YearHolidays {
    type Item = &'a HolidayRecord;
    type IntoIter = btree_map::Values<'a, Date, HolidayRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.values()
    }
}
