//! Moving feasts: holidays defined as a fixed day offset from Easter Sunday.
//!
//! Each feast is exposed as a plain function of the Easter date so that rule
//! tables can compose them explicitly.  [`MovingFeast`] names the same
//! offsets for data-driven tables.

use crate::date::Date;

/// Maundy Thursday (Easter − 3).
pub fn maundy_thursday(easter: Date) -> Date {
    easter + MovingFeast::MaundyThursday.offset()
}

/// Good Friday (Easter − 2).
pub fn good_friday(easter: Date) -> Date {
    easter + MovingFeast::GoodFriday.offset()
}

/// Holy Saturday (Easter − 1).
pub fn holy_saturday(easter: Date) -> Date {
    easter + MovingFeast::HolySaturday.offset()
}

/// Easter Monday (Easter + 1).
pub fn easter_monday(easter: Date) -> Date {
    easter + MovingFeast::EasterMonday.offset()
}

/// Ascension Day (Easter + 39).
pub fn ascension(easter: Date) -> Date {
    easter + MovingFeast::Ascension.offset()
}

/// Whit Sunday / Pentecost (Easter + 49).
pub fn whit_sunday(easter: Date) -> Date {
    easter + MovingFeast::WhitSunday.offset()
}

/// Whit Monday (Easter + 50).
pub fn whit_monday(easter: Date) -> Date {
    easter + MovingFeast::WhitMonday.offset()
}

/// Corpus Christi (Easter + 60).
pub fn corpus_christi(easter: Date) -> Date {
    easter + MovingFeast::CorpusChristi.offset()
}

/// A feast at a fixed offset from Easter Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MovingFeast {
    /// Easter − 3.
    MaundyThursday,
    /// Easter − 2.
    GoodFriday,
    /// Easter − 1.
    HolySaturday,
    /// Easter itself.
    EasterSunday,
    /// Easter + 1.
    EasterMonday,
    /// Easter + 39.
    Ascension,
    /// Easter + 49.
    WhitSunday,
    /// Easter + 50.
    WhitMonday,
    /// Easter + 60.
    CorpusChristi,
}

impl MovingFeast {
    /// Day offset from Easter Sunday.
    pub const fn offset(self) -> i32 {
        match self {
            MovingFeast::MaundyThursday => -3,
            MovingFeast::GoodFriday => -2,
            MovingFeast::HolySaturday => -1,
            MovingFeast::EasterSunday => 0,
            MovingFeast::EasterMonday => 1,
            MovingFeast::Ascension => 39,
            MovingFeast::WhitSunday => 49,
            MovingFeast::WhitMonday => 50,
            MovingFeast::CorpusChristi => 60,
        }
    }

    /// The feast's date given that year's Easter Sunday.
    pub fn date_from(self, easter: Date) -> Date {
        easter + self.offset()
    }
}
