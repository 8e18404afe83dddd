//! `Weekday` — day-of-week enum.

/// Day of the week.
///
/// Variants are numbered 1–7 (Monday = 1, Sunday = 7), following ISO 8601.
/// Saturday and Sunday are the only non-working weekdays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Weekday {
    /// Monday (1).
    Monday = 1,
    /// Tuesday (2).
    Tuesday = 2,
    /// Wednesday (3).
    Wednesday = 3,
    /// Thursday (4).
    Thursday = 4,
    /// Friday (5).
    Friday = 5,
    /// Saturday (6).
    Saturday = 6,
    /// Sunday (7).
    Sunday = 7,
}

impl Weekday {
    /// Monday through Sunday.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Construct from the ISO ordinal (1 = Monday … 7 = Sunday).
    pub fn from_ordinal(n: u8) -> Option<Self> {
        Self::ALL.get(usize::from(n).checked_sub(1)?).copied()
    }

    /// The weekday `n` days after a Monday; any `n`, negative included.
    pub fn from_days_after_monday(n: i32) -> Self {
        Self::ALL[n.rem_euclid(7) as usize]
    }

    /// Return the ISO ordinal (1 = Monday … 7 = Sunday).
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Zero-based position in the week (Monday = 0), for weekday-indexed tables.
    pub fn index(&self) -> usize {
        usize::from(self.ordinal() - 1)
    }

    /// Days to move forward from `self` to reach the next `target` (0–6;
    /// 0 when they are equal).
    pub fn days_until(self, target: Weekday) -> i32 {
        (target.ordinal() as i32 - self.ordinal() as i32).rem_euclid(7)
    }

    /// Return `true` if this is Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }

    /// English name.
    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(w: chrono::Weekday) -> Self {
        Self::ALL[w.num_days_from_monday() as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals() {
        for (i, w) in Weekday::ALL.iter().enumerate() {
            assert_eq!(w.index(), i);
            assert_eq!(Weekday::from_ordinal(w.ordinal()), Some(*w));
        }
        assert!(Weekday::from_ordinal(0).is_none());
        assert!(Weekday::from_ordinal(8).is_none());
    }

    #[test]
    fn days_after_monday_wraps() {
        assert_eq!(Weekday::from_days_after_monday(0), Weekday::Monday);
        assert_eq!(Weekday::from_days_after_monday(13), Weekday::Sunday);
        assert_eq!(Weekday::from_days_after_monday(-1), Weekday::Sunday);
    }

    #[test]
    fn days_until() {
        assert_eq!(Weekday::Monday.days_until(Weekday::Monday), 0);
        assert_eq!(Weekday::Thursday.days_until(Weekday::Wednesday), 6);
        assert_eq!(Weekday::Saturday.days_until(Weekday::Monday), 2);
    }

    #[test]
    fn weekend_flags() {
        let weekend: Vec<_> = Weekday::ALL.into_iter().filter(Weekday::is_weekend).collect();
        assert_eq!(weekend, [Weekday::Saturday, Weekday::Sunday]);
        assert_eq!(Weekday::Friday.to_string(), "Friday");
    }

    #[test]
    fn from_chrono() {
        assert_eq!(Weekday::from(chrono::Weekday::Sat), Weekday::Saturday);
        assert_eq!(Weekday::from(chrono::Weekday::Mon), Weekday::Monday);
        assert_eq!(Weekday::from(chrono::Weekday::Sun), Weekday::Sunday);
    }
}
