//! Error types for publicholiday-rs.
//!
//! Every fallible operation in the workspace returns the single
//! `thiserror`-derived [`Error`] enum.  Preconditions are checked with the
//! [`ensure!`](crate::ensure) macro and unconditional failures raised with
//! [`fail!`](crate::fail).

use thiserror::Error;

/// The top-level error type used throughout publicholiday-rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// General runtime error (raised by `fail!`).
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated (raised by `ensure!`).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Invalid argument, e.g. a negative business-day count.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Date-related error: invalid components, out-of-range arithmetic or
    /// an unparseable date string.
    #[error("date error: {0}")]
    Date(String),

    /// A business-day scan walked `limit` calendar days without finding
    /// enough working days.
    #[error("no working day found within {limit} calendar days")]
    ScanLimit {
        /// The scan limit in force when the search gave up.
        limit: u32,
    },

    /// No jurisdiction is registered under the requested code.
    #[error("unknown jurisdiction code: {0}")]
    UnknownJurisdiction(String),
}

/// Shorthand `Result` type used throughout publicholiday-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use ph_core::{ensure, errors::Error};
/// fn month(m: u8) -> ph_core::errors::Result<u8> {
///     ensure!((1..=12).contains(&m), "month {m} out of range");
///     Ok(m)
/// }
/// assert!(month(3).is_ok());
/// assert!(month(13).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use ph_core::{fail, errors::Error};
/// fn always_err() -> ph_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checked(n: i32) -> Result<i32> {
        crate::ensure!(n >= 0, "count must be non-negative, got {n}");
        Ok(n)
    }

    #[test]
    fn ensure_passes_and_fails() {
        assert_eq!(checked(3), Ok(3));
        assert_eq!(
            checked(-1),
            Err(Error::Precondition("count must be non-negative, got -1".into()))
        );
    }

    #[test]
    fn display_messages() {
        assert_eq!(
            Error::ScanLimit { limit: 10 }.to_string(),
            "no working day found within 10 calendar days"
        );
        assert_eq!(
            Error::UnknownJurisdiction("XX".into()).to_string(),
            "unknown jurisdiction code: XX"
        );
        assert_eq!(
            Error::InvalidArgument("negative".into()).to_string(),
            "invalid argument: negative"
        );
    }
}
