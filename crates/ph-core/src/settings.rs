//! Library settings.
//!
//! [`ScanLimit`] is the maximum number of consecutive non-working calendar
//! days a business-day search may walk through before giving up.  It is a
//! plain value passed to the functions that scan; nothing in the library
//! keeps a global copy, so two callers with different limits never see each
//! other's setting.

/// Default scan limit: ten years of calendar days.
pub const DEFAULT_MAX_SCAN_DAYS: u32 = 3660;

/// Upper bound on a run of consecutive non-working days in a business-day
/// scan.
///
/// ```
/// use ph_core::settings::{ScanLimit, DEFAULT_MAX_SCAN_DAYS};
///
/// assert_eq!(ScanLimit::default().days(), DEFAULT_MAX_SCAN_DAYS);
/// assert_eq!(ScanLimit::new(0).days(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScanLimit(u32);

impl ScanLimit {
    /// A limit of `days` calendar days.  Zero is raised to one.
    pub const fn new(days: u32) -> Self {
        if days == 0 {
            Self(1)
        } else {
            Self(days)
        }
    }

    /// The limit in calendar days.
    pub const fn days(self) -> u32 {
        self.0
    }
}

impl Default for ScanLimit {
    fn default() -> Self {
        Self(DEFAULT_MAX_SCAN_DAYS)
    }
}

impl From<u32> for ScanLimit {
    fn from(days: u32) -> Self {
        Self::new(days)
    }
}

impl std::fmt::Display for ScanLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} days", self.0)
    }
}
