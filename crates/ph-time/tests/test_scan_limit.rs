//! Scan limit behaviour: a closed run longer than the limit is an error, and
//! the limit passed to one call never affects another.

use std::thread;

use ph_core::{Error, ScanLimit};
use ph_time::business_days::{
    business_days_add_with_limit, next_working_day, next_working_day_with_limit,
    previous_working_day_with_limit,
};
use ph_time::calendar::HolidayFn;
use ph_time::Date;

#[test]
fn everything_closed_hits_the_limit() {
    let closed = HolidayFn(|_: Date| true);
    let start = Date::from_ymd(2024, 1, 1).unwrap();
    let limit = ScanLimit::new(30);
    let err = next_working_day_with_limit(&closed, start, 0, true, limit).unwrap_err();
    assert_eq!(err, Error::ScanLimit { limit: 30 });
    let err = previous_working_day_with_limit(&closed, start, 2, true, limit).unwrap_err();
    assert_eq!(err, Error::ScanLimit { limit: 30 });
    let err = next_working_day(&closed, start, 0, true).unwrap_err();
    assert_eq!(err, Error::ScanLimit { limit: ScanLimit::default().days() });
}

#[test]
fn long_closure_passes_under_a_larger_limit() {
    // Closed 1 January to 9 February; the weekend after makes 41 closed days.
    let first = Date::from_ymd(2024, 1, 1).unwrap();
    let long_closure = HolidayFn(move |d: Date| (0..40).contains(&(d - first)));
    let reopening = Date::from_ymd(2024, 2, 12).unwrap();

    assert!(next_working_day_with_limit(&long_closure, first, 0, true, ScanLimit::new(40)).is_err());
    assert_eq!(
        next_working_day_with_limit(&long_closure, first, 0, true, ScanLimit::new(41)).unwrap(),
        reopening
    );
    assert_eq!(
        business_days_add_with_limit(&long_closure, first, 1, ScanLimit::new(60)).unwrap(),
        reopening
    );
}

#[test]
fn concurrent_limits_do_not_interfere() {
    let first = Date::from_ymd(2024, 1, 1).unwrap();
    let reopening = Date::from_ymd(2024, 2, 12).unwrap();
    let handles: Vec<_> = [7, 50, 41, 3660]
        .into_iter()
        .map(|days| {
            thread::spawn(move || {
                let long_closure = HolidayFn(move |d: Date| (0..40).contains(&(d - first)));
                (days, next_working_day_with_limit(&long_closure, first, 0, true, ScanLimit::new(days)))
            })
        })
        .collect();
    for handle in handles {
        let (days, result) = handle.join().unwrap();
        if days < 41 {
            assert_eq!(result, Err(Error::ScanLimit { limit: days }));
        } else {
            assert_eq!(result, Ok(reopening));
        }
    }
    let long_closure = HolidayFn(move |d: Date| (0..40).contains(&(d - first)));
    assert_eq!(next_working_day(&long_closure, first, 0, true), Ok(reopening));
}
