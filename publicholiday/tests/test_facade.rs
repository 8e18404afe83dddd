use chrono::NaiveDate;
use publicholiday::time::{business_days, PublicHolidayCalendar};
use publicholiday::{codes, lookup, Date, Error, PublicHolidays};

#[test]
fn every_registered_code_resolves() {
    let codes: Vec<_> = codes().collect();
    assert!(!codes.is_empty());
    for code in codes {
        assert_eq!(lookup(&code.to_lowercase()).unwrap().code(), code);
    }
    assert!(matches!(lookup("??"), Err(Error::UnknownJurisdiction(_))));
}

#[test]
fn chrono_datetimes_are_truncated() {
    let us = lookup("US").unwrap();
    let cal = PublicHolidayCalendar::new(us.as_ref());
    let late_friday = NaiveDate::from_ymd_opt(2021, 7, 2)
        .unwrap()
        .and_hms_opt(23, 59, 59)
        .unwrap();
    // Monday 5 July is the observed Independence Day.
    assert_eq!(
        business_days::next_working_day(&cal, late_friday, 1, true).unwrap(),
        Date::from_ymd(2021, 7, 6).unwrap()
    );
}
