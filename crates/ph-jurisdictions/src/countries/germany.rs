//! Germany: federal holidays plus the holidays of the sixteen states.
//!
//! German holidays are never moved off a weekend.

use ph_core::errors::Result;
use ph_time::{Month, MovingFeast, Weekday};

use crate::jurisdiction::Jurisdiction;
use crate::regime::{Regime, RegimeTable};
use crate::rule::HolidayRule;

static STATES: [(&str, &str); 16] = [
    ("BB", "Brandenburg"),
    ("BE", "Berlin"),
    ("BW", "Baden-Württemberg"),
    ("BY", "Bayern"),
    ("HB", "Bremen"),
    ("HE", "Hessen"),
    ("HH", "Hamburg"),
    ("MV", "Mecklenburg-Vorpommern"),
    ("NI", "Niedersachsen"),
    ("NW", "Nordrhein-Westfalen"),
    ("RP", "Rheinland-Pfalz"),
    ("SH", "Schleswig-Holstein"),
    ("SL", "Saarland"),
    ("SN", "Sachsen"),
    ("ST", "Sachsen-Anhalt"),
    ("TH", "Thüringen"),
];

static FEDERAL: [HolidayRule; 9] = [
    HolidayRule::fixed("Neujahr", Month::January, 1),
    HolidayRule::easter("Karfreitag", MovingFeast::GoodFriday),
    HolidayRule::easter("Ostermontag", MovingFeast::EasterMonday),
    HolidayRule::fixed("Tag der Arbeit", Month::May, 1),
    HolidayRule::easter("Christi Himmelfahrt", MovingFeast::Ascension),
    HolidayRule::easter("Pfingstmontag", MovingFeast::WhitMonday),
    HolidayRule::fixed("Tag der Deutschen Einheit", Month::October, 3),
    HolidayRule::fixed("Erster Weihnachtstag", Month::December, 25),
    HolidayRule::fixed("Zweiter Weihnachtstag", Month::December, 26),
];

static STATE: [HolidayRule; 4] = [
    HolidayRule::fixed("Heilige Drei Könige", Month::January, 6).regional(&["BW", "BY", "ST"]),
    HolidayRule::easter("Fronleichnam", MovingFeast::CorpusChristi)
        .regional(&["BW", "BY", "HE", "NW", "RP", "SL"]),
    HolidayRule::fixed("Mariä Himmelfahrt", Month::August, 15).regional(&["SL"]),
    HolidayRule::fixed("Allerheiligen", Month::November, 1)
        .regional(&["BW", "BY", "NW", "RP", "SL"]),
];

const REPENTANCE_DAY: HolidayRule =
    HolidayRule::weekday_on_or_after("Buß- und Bettag", Month::November, 16, Weekday::Wednesday);

const REFORMATION_DAY: HolidayRule = HolidayRule::fixed("Reformationstag", Month::October, 31);

static REPENTANCE_FEDERAL: [HolidayRule; 1] = [REPENTANCE_DAY];

static REPENTANCE_SAXONY: [HolidayRule; 1] = [REPENTANCE_DAY.regional(&["SN"])];

static REFORMATION_EAST: [HolidayRule; 1] =
    [REFORMATION_DAY.regional(&["BB", "MV", "SN", "ST", "TH"])];

/// 500th anniversary of the Reformation.
static REFORMATION_2017: [HolidayRule; 1] = [REFORMATION_DAY];

static REFORMATION_NORTH: [HolidayRule; 1] =
    [REFORMATION_DAY.regional(&["BB", "HB", "HH", "MV", "NI", "SH", "SN", "ST", "TH"])];

static SINCE_2019: [HolidayRule; 2] = [
    HolidayRule::fixed("Internationaler Frauentag", Month::March, 8).regional(&["BE"]),
    HolidayRule::fixed("Weltkindertag", Month::September, 20).regional(&["TH"]),
];

static SINCE_2023: [HolidayRule; 2] = [
    HolidayRule::fixed("Internationaler Frauentag", Month::March, 8).regional(&["BE", "MV"]),
    HolidayRule::fixed("Weltkindertag", Month::September, 20).regional(&["TH"]),
];

/// Germany (`DE`), since reunification.
///
/// Nationwide holidays:
/// * New Year's Day (Jan 1)
/// * Good Friday (Easter - 2), Easter Monday (Easter + 1)
/// * Labour Day (May 1)
/// * Ascension Day (Easter + 39), Whit Monday (Easter + 50)
/// * German Unity Day (Oct 3)
/// * Christmas Day, St Stephen's Day (Dec 25 and 26)
/// * Repentance and Prayer Day until 1994, Reformation Day in 2017
///
/// State holidays are recorded as regional, non-public holidays.
pub fn germany() -> Result<Jurisdiction> {
    let regimes = RegimeTable::new(vec![
        Regime::between(1990, 1994, &[&FEDERAL, &STATE, &REPENTANCE_FEDERAL, &REFORMATION_EAST]),
        Regime::between(1995, 2016, &[&FEDERAL, &STATE, &REPENTANCE_SAXONY, &REFORMATION_EAST]),
        Regime::single(2017, &[&FEDERAL, &STATE, &REPENTANCE_SAXONY, &REFORMATION_2017]),
        Regime::single(2018, &[&FEDERAL, &STATE, &REPENTANCE_SAXONY, &REFORMATION_NORTH]),
        Regime::between(
            2019,
            2022,
            &[&FEDERAL, &STATE, &REPENTANCE_SAXONY, &REFORMATION_NORTH, &SINCE_2019],
        ),
        Regime::since(
            2023,
            &[&FEDERAL, &STATE, &REPENTANCE_SAXONY, &REFORMATION_NORTH, &SINCE_2023],
        ),
    ])?;
    Ok(Jurisdiction::new("DE", "Germany", regimes).with_regions(&STATES))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ph_time::{Date, PublicHolidays};

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn names_in(de: &Jurisdiction, year: i32, region: &str) -> Vec<String> {
        de.holidays_in_region(year, region)
            .into_iter()
            .map(|r| r.name().to_owned())
            .collect()
    }

    #[test]
    fn federal_2021() {
        let de = germany().unwrap();
        let got: Vec<Date> = de.public_holidays(2021).into_iter().collect();
        let want: Vec<Date> = [(1, 1), (4, 2), (4, 5), (5, 1), (5, 13), (5, 24), (10, 3), (12, 25), (12, 26)]
            .iter()
            .map(|&(m, d)| date(2021, m, d))
            .collect();
        assert_eq!(got, want);
    }

    #[test]
    fn weekend_holidays_are_not_moved() {
        let de = germany().unwrap();
        // 2021-05-01 was a Saturday.
        assert!(de.is_public_holiday(date(2021, 5, 1)));
        assert!(!de.is_public_holiday(date(2021, 5, 3)));
    }

    #[test]
    fn corpus_christi_only_in_listed_states() {
        let de = germany().unwrap();
        for state in ["BW", "BY", "HE", "NW", "RP", "SL"] {
            assert!(names_in(&de, 2021, state).iter().any(|n| n == "Fronleichnam"), "{state}");
        }
        for state in ["BE", "HH", "SN"] {
            assert!(!names_in(&de, 2021, state).iter().any(|n| n == "Fronleichnam"), "{state}");
        }
        assert!(!de.is_public_holiday(date(2021, 6, 3)));
    }

    #[test]
    fn reformation_day_history() {
        let de = germany().unwrap();
        assert!(!de.is_public_holiday(date(2016, 10, 31)));
        assert!(de.is_public_holiday(date(2017, 10, 31)));
        assert!(!de.is_public_holiday(date(2018, 10, 31)));
        assert!(names_in(&de, 2018, "HH").iter().any(|n| n == "Reformationstag"));
        assert!(!names_in(&de, 2016, "HH").iter().any(|n| n == "Reformationstag"));
    }

    #[test]
    fn repentance_day_history() {
        let de = germany().unwrap();
        assert!(de.is_public_holiday(date(1993, 11, 17)));
        assert!(!de.is_public_holiday(date(1995, 11, 22)));
        assert!(names_in(&de, 1995, "SN").iter().any(|n| n == "Buß- und Bettag"));
    }

    #[test]
    fn womens_day_spreads() {
        let de = germany().unwrap();
        assert!(!names_in(&de, 2018, "BE").iter().any(|n| n == "Internationaler Frauentag"));
        assert!(names_in(&de, 2019, "BE").iter().any(|n| n == "Internationaler Frauentag"));
        assert!(!names_in(&de, 2022, "MV").iter().any(|n| n == "Internationaler Frauentag"));
        assert!(names_in(&de, 2023, "MV").iter().any(|n| n == "Internationaler Frauentag"));
    }

    #[test]
    fn ascension_on_labour_day_2008() {
        let de = germany().unwrap();
        let names = de.public_holiday_names(2008);
        assert_eq!(names[&date(2008, 5, 1)], "Tag der Arbeit");
        assert_eq!(names.len(), 8);
    }

    #[test]
    fn nothing_before_reunification() {
        assert!(germany().unwrap().holidays(1989).is_empty());
    }
}
