//! Weekend observance: mapping a nominal holiday date onto the date it is
//! observed when it falls on a weekend.
//!
//! Every policy is a shift table indexed by weekday (Monday = 0 … Sunday =
//! 6), so applying one is a single lookup.  Only the `*_two_holiday_after`
//! policies move a weekday: their Monday is the second holiday of a pair
//! whose first was pushed onto that Monday.

use crate::date::Date;

type ShiftTable = [i32; 7];

const FIX_WEEKEND: ShiftTable = [0, 0, 0, 0, 0, 2, 1];
const SATURDAY_BEFORE_SUNDAY_AFTER: ShiftTable = [0, 0, 0, 0, 0, -1, 1];
const TWO_HOLIDAY_AFTER: ShiftTable = [1, 0, 0, 0, 0, 2, 2];
const TWO_HOLIDAY_BEFORE: ShiftTable = [0, 0, 0, 0, 0, -1, -2];
const SUNDAY: ShiftTable = [0, 0, 0, 0, 0, 0, 1];
const SUNDAY_TWO_HOLIDAY_AFTER: ShiftTable = [1, 0, 0, 0, 0, 0, 1];

#[inline]
fn shift(table: &ShiftTable, date: Date) -> Date {
    match table[date.weekday().index()] {
        0 => date,
        n => date + n,
    }
}

/// Saturday and Sunday move to the following Monday.
///
/// ```
/// use ph_time::{observance::fix_weekend, Date};
/// let sat = Date::from_ymd(2021, 10, 9).unwrap();
/// assert_eq!(fix_weekend(sat), Date::from_ymd(2021, 10, 11).unwrap());
/// ```
pub fn fix_weekend(date: Date) -> Date {
    shift(&FIX_WEEKEND, date)
}

/// Saturday moves to the preceding Friday, Sunday to the following Monday.
pub fn fix_weekend_saturday_before_sunday_after(date: Date) -> Date {
    shift(&SATURDAY_BEFORE_SUNDAY_AFTER, date)
}

/// Second holiday of an adjacent pair (e.g. Boxing Day after Christmas).
///
/// Saturday moves to Monday; Sunday and Monday move to Tuesday, because the
/// first holiday of the pair has already taken the Monday.
pub fn fix_weekend_two_holiday_after(date: Date) -> Date {
    shift(&TWO_HOLIDAY_AFTER, date)
}

/// Saturday and Sunday move back to the preceding Friday.
pub fn fix_weekend_two_holiday_before(date: Date) -> Date {
    shift(&TWO_HOLIDAY_BEFORE, date)
}

/// Sunday moves to the following Monday; Saturday stays.
pub fn fix_sunday(date: Date) -> Date {
    shift(&SUNDAY, date)
}

/// Second day of a pair under [`fix_sunday`]: Sunday moves to Monday, and
/// Monday to Tuesday because the first day of the pair took the Monday.
pub fn fix_sunday_two_holiday_after(date: Date) -> Date {
    shift(&SUNDAY_TWO_HOLIDAY_AFTER, date)
}

/// How a rule treats a nominal date that falls on a weekend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Observance {
    /// Observed on the nominal date, even on a weekend.
    #[default]
    Nominal,
    /// Dropped for the year when it falls on a weekend.
    SkipWeekend,
    /// [`fix_weekend`].
    FixWeekend,
    /// [`fix_weekend_saturday_before_sunday_after`].
    SaturdayBeforeSundayAfter,
    /// [`fix_weekend_two_holiday_after`].
    TwoHolidayAfter,
    /// [`fix_weekend_two_holiday_before`].
    TwoHolidayBefore,
    /// [`fix_sunday`].
    SundayAfter,
    /// [`fix_sunday_two_holiday_after`].
    SundayTwoHolidayAfter,
}

impl Observance {
    /// The observed date for `nominal`, or `None` if the holiday is not
    /// observed at all this year.
    pub fn apply(self, nominal: Date) -> Option<Date> {
        match self {
            Observance::Nominal => Some(nominal),
            Observance::SkipWeekend => (!nominal.is_weekend()).then_some(nominal),
            Observance::FixWeekend => Some(fix_weekend(nominal)),
            Observance::SaturdayBeforeSundayAfter => {
                Some(fix_weekend_saturday_before_sunday_after(nominal))
            }
            Observance::TwoHolidayAfter => Some(fix_weekend_two_holiday_after(nominal)),
            Observance::TwoHolidayBefore => Some(fix_weekend_two_holiday_before(nominal)),
            Observance::SundayAfter => Some(fix_sunday(nominal)),
            Observance::SundayTwoHolidayAfter => Some(fix_sunday_two_holiday_after(nominal)),
        }
    }

    /// Whether this policy may leave the holiday on a Saturday or Sunday.
    pub fn allows_weekend(self) -> bool {
        matches!(
            self,
            Observance::Nominal | Observance::SundayAfter | Observance::SundayTwoHolidayAfter
        )
    }
}
