//! United States federal holidays.

use ph_core::errors::Result;
use ph_time::{Month, Observance, Weekday};

use crate::jurisdiction::Jurisdiction;
use crate::regime::{Regime, RegimeTable};
use crate::rule::HolidayRule;

const SAT_FRI_SUN_MON: Observance = Observance::SaturdayBeforeSundayAfter;

/// Uniform Monday Holiday Act, in force from 1971.
static FEDERAL: [HolidayRule; 7] = [
    HolidayRule::fixed("New Year's Day", Month::January, 1).observed(SAT_FRI_SUN_MON),
    HolidayRule::nth_weekday("Washington's Birthday", Month::February, Weekday::Monday, 3),
    HolidayRule::nth_weekday("Memorial Day", Month::May, Weekday::Monday, -1),
    HolidayRule::fixed("Independence Day", Month::July, 4).observed(SAT_FRI_SUN_MON),
    HolidayRule::nth_weekday("Labor Day", Month::September, Weekday::Monday, 1),
    HolidayRule::nth_weekday("Columbus Day", Month::October, Weekday::Monday, 2),
    HolidayRule::nth_weekday("Thanksgiving Day", Month::November, Weekday::Thursday, 4),
];

static CHRISTMAS: [HolidayRule; 1] =
    [HolidayRule::fixed("Christmas Day", Month::December, 25).observed(SAT_FRI_SUN_MON)];

static VETERANS_DAY_OCTOBER: [HolidayRule; 1] = [HolidayRule::nth_weekday(
    "Veterans Day",
    Month::October,
    Weekday::Monday,
    4,
)];

static VETERANS_DAY: [HolidayRule; 1] =
    [HolidayRule::fixed("Veterans Day", Month::November, 11).observed(SAT_FRI_SUN_MON)];

static MLK_DAY: [HolidayRule; 1] = [HolidayRule::nth_weekday(
    "Martin Luther King Jr. Day",
    Month::January,
    Weekday::Monday,
    3,
)];

static JUNETEENTH: [HolidayRule; 1] = [HolidayRule::fixed(
    "Juneteenth National Independence Day",
    Month::June,
    19,
)
.observed(SAT_FRI_SUN_MON)];

/// The United States (`US`), federal holidays.
///
/// Fixed-date holidays falling on a Saturday are observed the Friday before,
/// on a Sunday the Monday after:
/// * New Year's Day (Jan 1)
/// * Martin Luther King Jr. Day (third Monday of January, since 1986)
/// * Washington's Birthday (third Monday of February)
/// * Memorial Day (last Monday of May)
/// * Juneteenth (Jun 19, since 2021)
/// * Independence Day (Jul 4)
/// * Labor Day (first Monday of September)
/// * Columbus Day (second Monday of October)
/// * Veterans Day (Nov 11; fourth Monday of October 1971-1977)
/// * Thanksgiving Day (fourth Thursday of November)
/// * Christmas Day (Dec 25)
pub fn united_states() -> Result<Jurisdiction> {
    let regimes = RegimeTable::new(vec![
        Regime::between(1971, 1977, &[&FEDERAL, &VETERANS_DAY_OCTOBER, &CHRISTMAS]),
        Regime::between(1978, 1985, &[&FEDERAL, &VETERANS_DAY, &CHRISTMAS]),
        Regime::between(1986, 2020, &[&MLK_DAY, &FEDERAL, &VETERANS_DAY, &CHRISTMAS]),
        Regime::since(2021, &[&MLK_DAY, &JUNETEENTH, &FEDERAL, &VETERANS_DAY, &CHRISTMAS]),
    ])?;
    Ok(Jurisdiction::new("US", "United States", regimes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ph_time::{Date, PublicHolidays};

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn year_2021() {
        let us = united_states().unwrap();
        let got: Vec<Date> = us.public_holidays(2021).into_iter().collect();
        let want: Vec<Date> = [
            (1, 1),
            (1, 18),
            (2, 15),
            (5, 31),
            (6, 18),
            (7, 5),
            (9, 6),
            (10, 11),
            (11, 11),
            (11, 25),
            (12, 24),
            (12, 31),
        ]
        .iter()
        .map(|&(m, d)| date(2021, m, d))
        .collect();
        assert_eq!(got, want);
        // New Year's Day 2022 fell on a Saturday.
        let rec = us.holidays(2021).get(date(2021, 12, 31)).cloned().unwrap();
        assert_eq!(rec.name(), "New Year's Day");
        assert_eq!(rec.nominal_date(), date(2022, 1, 1));
    }

    #[test]
    fn year_2022_has_no_new_year() {
        let us = united_states().unwrap();
        let y = us.public_holidays(2022);
        assert_eq!(y.len(), 10);
        assert!(!y.contains(&date(2022, 1, 1)));
        assert!(y.contains(&date(2022, 6, 20)));
        assert!(y.contains(&date(2022, 12, 26)));
    }

    #[test]
    fn independence_day_2020_on_friday() {
        let us = united_states().unwrap();
        assert!(us.is_public_holiday(date(2020, 7, 3)));
        assert!(!us.is_public_holiday(date(2020, 7, 4)));
        assert!(!us.public_holidays(2020).contains(&date(2020, 6, 19)));
    }

    #[test]
    fn historical_regimes() {
        let us = united_states().unwrap();
        // Veterans Day 1975 was the fourth Monday of October.
        assert!(us.is_public_holiday(date(1975, 10, 27)));
        assert!(!us.is_public_holiday(date(1975, 11, 11)));
        // No MLK Day before 1986.
        assert!(!us.is_public_holiday(date(1985, 1, 21)));
        assert!(us.is_public_holiday(date(1986, 1, 20)));
    }
}
