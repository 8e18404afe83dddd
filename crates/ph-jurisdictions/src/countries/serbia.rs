//! Serbia.
//!
//! Two-day holidays move off a Sunday only: the first day goes to Monday
//! and the second follows it to Tuesday.  A Saturday is kept.  Easter is
//! the Orthodox one, from Good Friday through Easter Monday.
//!
//! Labour Day can fall inside the Easter weekend (2005, 2016, 2021, 2027).
//! The Easter days are listed first and keep their dates.  A Labour Day
//! that lands on one of them on a weekday or Saturday simply coincides with
//! it.  A Sunday Labour Day whose substitute Monday or Tuesday is taken by
//! Easter Monday moves on to the first free weekday, so 2 May 2021 (Easter
//! Sunday) is taken on Tuesday 4 May.

use ph_core::errors::Result;
use ph_time::{Month, MovingFeast, Observance};

use crate::jurisdiction::Jurisdiction;
use crate::regime::{Regime, RegimeTable};
use crate::rule::HolidayRule;

const FIRST: Observance = Observance::SundayAfter;
const SECOND: Observance = Observance::SundayTwoHolidayAfter;

static EASTER: [HolidayRule; 4] = [
    HolidayRule::orthodox("Veliki petak", MovingFeast::GoodFriday),
    HolidayRule::orthodox("Velika subota", MovingFeast::HolySaturday),
    HolidayRule::orthodox("Vaskrs", MovingFeast::EasterSunday),
    HolidayRule::orthodox("Vaskršnji ponedeljak", MovingFeast::EasterMonday),
];

static STATUTORY: [HolidayRule; 7] = [
    HolidayRule::fixed("Nova godina", Month::January, 1)
        .observed(FIRST)
        .moves_on_clash(),
    HolidayRule::fixed("Nova godina (drugi dan)", Month::January, 2)
        .observed(SECOND)
        .moves_on_clash(),
    HolidayRule::fixed("Božić", Month::January, 7),
    HolidayRule::fixed("Sretenje, Dan državnosti", Month::February, 15)
        .observed(FIRST)
        .moves_on_clash(),
    HolidayRule::fixed("Sretenje, Dan državnosti (drugi dan)", Month::February, 16)
        .observed(SECOND)
        .moves_on_clash(),
    HolidayRule::fixed("Praznik rada", Month::May, 1)
        .observed(FIRST)
        .moves_on_clash(),
    HolidayRule::fixed("Praznik rada (drugi dan)", Month::May, 2)
        .observed(SECOND)
        .moves_on_clash(),
];

static ARMISTICE_DAY: [HolidayRule; 1] = [HolidayRule::fixed(
    "Dan primirja u Prvom svetskom ratu",
    Month::November,
    11,
)
.observed(FIRST)
.moves_on_clash()];

/// Marked but worked.
static COMMEMORATIONS: [HolidayRule; 2] = [
    HolidayRule::fixed("Savindan", Month::January, 27).commemoration(),
    HolidayRule::fixed("Vidovdan", Month::June, 28).commemoration(),
];

/// Serbia (`RS`), from the 2002 holidays law.
pub fn serbia() -> Result<Jurisdiction> {
    let regimes = RegimeTable::new(vec![
        Regime::between(2002, 2011, &[&EASTER, &STATUTORY, &COMMEMORATIONS]),
        Regime::since(2012, &[&EASTER, &STATUTORY, &ARMISTICE_DAY, &COMMEMORATIONS]),
    ])?;
    Ok(Jurisdiction::new("RS", "Serbia", regimes))
}
