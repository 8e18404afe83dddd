//! United Kingdom bank holidays.
//!
//! Nationwide records are the England & Wales bank holidays; Scotland and
//! Northern Ireland additions are regional.

use ph_core::errors::Result;
use ph_time::{Month, MovingFeast, Observance, Weekday};

use crate::jurisdiction::Jurisdiction;
use crate::regime::{Regime, RegimeTable};
use crate::rule::HolidayRule;

const ENGLAND: &str = "ENG";
const WALES: &str = "WLS";
const SCOTLAND: &str = "SCT";
const NORTHERN_IRELAND: &str = "NIR";

static REGIONS: [(&str, &str); 4] = [
    (ENGLAND, "England"),
    (WALES, "Wales"),
    (SCOTLAND, "Scotland"),
    (NORTHERN_IRELAND, "Northern Ireland"),
];

/// Bank Holidays Act 1871.
static BANK_HOLIDAYS_1871: [HolidayRule; 6] = [
    HolidayRule::easter("Good Friday", MovingFeast::GoodFriday),
    HolidayRule::easter("Easter Monday", MovingFeast::EasterMonday),
    HolidayRule::easter("Whit Monday", MovingFeast::WhitMonday),
    HolidayRule::nth_weekday("Summer bank holiday", Month::August, Weekday::Monday, 1),
    HolidayRule::fixed("Christmas Day", Month::December, 25),
    HolidayRule::fixed("Boxing Day", Month::December, 26).observed(Observance::FixWeekend),
];

/// Banking and Financial Dealings Act 1971.
static BANK_HOLIDAYS_1971: [HolidayRule; 6] = [
    HolidayRule::easter("Good Friday", MovingFeast::GoodFriday),
    HolidayRule::easter("Easter Monday", MovingFeast::EasterMonday),
    HolidayRule::nth_weekday("Spring bank holiday", Month::May, Weekday::Monday, -1)
        .except(&[2002, 2012, 2022]),
    HolidayRule::nth_weekday("Summer bank holiday", Month::August, Weekday::Monday, -1),
    HolidayRule::fixed("Christmas Day", Month::December, 25).observed(Observance::FixWeekend),
    HolidayRule::fixed("Boxing Day", Month::December, 26).observed(Observance::TwoHolidayAfter),
];

static REGIONAL_1971: [HolidayRule; 3] = [
    HolidayRule::fixed("St Patrick's Day", Month::March, 17)
        .observed(Observance::FixWeekend)
        .regional(&[NORTHERN_IRELAND]),
    HolidayRule::fixed("Battle of the Boyne", Month::July, 12)
        .observed(Observance::FixWeekend)
        .regional(&[NORTHERN_IRELAND]),
    HolidayRule::nth_weekday("Summer bank holiday", Month::August, Weekday::Monday, 1)
        .regional(&[SCOTLAND]),
];

static NEW_YEAR: [HolidayRule; 2] = [
    HolidayRule::fixed("New Year's Day", Month::January, 1).observed(Observance::FixWeekend),
    HolidayRule::fixed("2nd January", Month::January, 2)
        .observed(Observance::TwoHolidayAfter)
        .regional(&[SCOTLAND]),
];

static EARLY_MAY: [HolidayRule; 1] = [
    HolidayRule::nth_weekday("Early May bank holiday", Month::May, Weekday::Monday, 1)
        .except(&[1995, 2020]),
];

static ST_ANDREW: [HolidayRule; 1] = [HolidayRule::fixed("St Andrew's Day", Month::November, 30)
    .observed(Observance::FixWeekend)
    .regional(&[SCOTLAND])];

/// Holidays proclaimed for a single year, including regular holidays moved
/// by proclamation (their regular rule lists the year as an exception).
static PROCLAIMED: [HolidayRule; 14] = [
    HolidayRule::one_off("Wedding of Princess Anne", 1973, Month::November, 14),
    HolidayRule::one_off("Wedding of Prince Charles", 1981, Month::July, 29),
    HolidayRule::one_off("VE Day", 1995, Month::May, 8),
    HolidayRule::one_off("Millennium Celebrations", 1999, Month::December, 31),
    HolidayRule::one_off("Spring bank holiday", 2002, Month::June, 3),
    HolidayRule::one_off("Golden Jubilee", 2002, Month::June, 4),
    HolidayRule::one_off("Royal Wedding", 2011, Month::April, 29),
    HolidayRule::one_off("Spring bank holiday", 2012, Month::June, 4),
    HolidayRule::one_off("Diamond Jubilee", 2012, Month::June, 5),
    HolidayRule::one_off("Early May bank holiday (VE Day)", 2020, Month::May, 8),
    HolidayRule::one_off("Spring bank holiday", 2022, Month::June, 2),
    HolidayRule::one_off("Platinum Jubilee", 2022, Month::June, 3),
    HolidayRule::one_off("State Funeral of Queen Elizabeth II", 2022, Month::September, 19),
    HolidayRule::one_off("Coronation of King Charles III", 2023, Month::May, 8),
];

/// The United Kingdom (`GB`).
///
/// Weekends and the following holidays are observed since 1978:
/// * New Year's Day (Jan 1, moved to Monday from a weekend)
/// * Good Friday, Easter Monday
/// * Early May bank holiday (first Monday of May)
/// * Spring bank holiday (last Monday of May)
/// * Summer bank holiday (last Monday of August)
/// * Christmas Day, Boxing Day (with substitute days)
/// * proclaimed one-off holidays
///
/// Earlier years follow the 1871 and 1971 Acts.
pub fn united_kingdom() -> Result<Jurisdiction> {
    let regimes = RegimeTable::new(vec![
        Regime::between(1871, 1970, &[&BANK_HOLIDAYS_1871]),
        Regime::between(1971, 1973, &[&BANK_HOLIDAYS_1971, &REGIONAL_1971, &PROCLAIMED]),
        Regime::between(
            1974,
            1977,
            &[&NEW_YEAR, &BANK_HOLIDAYS_1971, &REGIONAL_1971, &PROCLAIMED],
        ),
        Regime::between(
            1978,
            2006,
            &[&NEW_YEAR, &BANK_HOLIDAYS_1971, &EARLY_MAY, &REGIONAL_1971, &PROCLAIMED],
        ),
        Regime::since(
            2007,
            &[
                &NEW_YEAR,
                &BANK_HOLIDAYS_1971,
                &EARLY_MAY,
                &REGIONAL_1971,
                &ST_ANDREW,
                &PROCLAIMED,
            ],
        ),
    ])?;
    Ok(Jurisdiction::new("GB", "United Kingdom", regimes).with_regions(&REGIONS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ph_time::{Date, PublicHolidays};

    fn dates(y: i32, md: &[(u8, u8)]) -> Vec<Date> {
        md.iter().map(|&(m, d)| Date::from_ymd(y, m, d).unwrap()).collect()
    }

    fn public(gb: &Jurisdiction, year: i32) -> Vec<Date> {
        gb.public_holidays(year).into_iter().collect()
    }

    #[test]
    fn year_2021() {
        let gb = united_kingdom().unwrap();
        assert_eq!(
            public(&gb, 2021),
            dates(2021, &[(1, 1), (4, 2), (4, 5), (5, 3), (5, 31), (8, 30), (12, 27), (12, 28)])
        );
        let names = gb.public_holiday_names(2021);
        assert_eq!(names[&Date::from_ymd(2021, 12, 27).unwrap()], "Christmas Day");
        assert_eq!(names[&Date::from_ymd(2021, 12, 28).unwrap()], "Boxing Day");
    }

    #[test]
    fn year_2022_has_the_jubilee_and_the_funeral() {
        let gb = united_kingdom().unwrap();
        assert_eq!(
            public(&gb, 2022),
            dates(
                2022,
                &[(1, 3), (4, 15), (4, 18), (5, 2), (6, 2), (6, 3), (8, 29), (9, 19), (12, 26), (12, 27)]
            )
        );
    }

    #[test]
    fn moved_early_may_holidays() {
        let gb = united_kingdom().unwrap();
        let y2020 = gb.public_holidays(2020);
        assert!(y2020.contains(&Date::from_ymd(2020, 5, 8).unwrap()));
        assert!(!y2020.contains(&Date::from_ymd(2020, 5, 4).unwrap()));
        let y1995 = gb.public_holidays(1995);
        assert!(y1995.contains(&Date::from_ymd(1995, 5, 8).unwrap()));
        assert!(!y1995.contains(&Date::from_ymd(1995, 5, 1).unwrap()));
    }

    #[test]
    fn scottish_holidays_are_regional() {
        let gb = united_kingdom().unwrap();
        let scotland: Vec<_> = gb
            .holidays_in_region(2021, "SCT")
            .into_iter()
            .filter(|r| !r.is_public())
            .map(|r| r.name().to_owned())
            .collect();
        assert_eq!(scotland, ["2nd January", "Summer bank holiday", "St Andrew's Day"]);
        // St Andrew's Day 2021 fell on a Tuesday and is not a bank holiday in England.
        assert!(!gb.is_public_holiday(Date::from_ymd(2021, 11, 30).unwrap()));
        assert!(gb.holidays_in_region(2006, "SCT").iter().all(|r| r.name() != "St Andrew's Day"));
    }

    #[test]
    fn before_1971() {
        let gb = united_kingdom().unwrap();
        // Whit Monday 1970 and the first Monday in August.
        let y1970 = gb.public_holidays(1970);
        assert!(y1970.contains(&Date::from_ymd(1970, 5, 18).unwrap()));
        assert!(y1970.contains(&Date::from_ymd(1970, 8, 3).unwrap()));
        assert!(!y1970.contains(&Date::from_ymd(1970, 1, 1).unwrap()));
        assert!(gb.public_holidays(1870).is_empty());
    }
}
