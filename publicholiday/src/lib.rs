//! # publicholiday
//!
//! Public and bank holidays for national and regional jurisdictions, and
//! business-day arithmetic over any holiday set.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `ph-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! publicholiday = "0.1"
//! ```
//!
//! ```rust
//! use publicholiday::{lookup, Date, PublicHolidays};
//!
//! let gb = lookup("GB").unwrap();
//! let christmas_eve: Date = "2021-12-24".parse().unwrap();
//! assert_eq!(gb.business_days_add(christmas_eve, 1).unwrap().to_string(), "2021-12-29");
//! ```
//!
//! The business-day functions also accept a plain set of dates:
//!
//! ```rust
//! use std::collections::BTreeSet;
//! use publicholiday::time::business_days::business_days_between;
//! use publicholiday::Date;
//!
//! let holidays: BTreeSet<Date> = ["2024-12-25", "2025-01-01"]
//!     .iter()
//!     .map(|s| s.parse().unwrap())
//!     .collect();
//! let start: Date = "2024-12-24".parse().unwrap();
//! let end: Date = "2025-01-02".parse().unwrap();
//! assert_eq!(business_days_between(&holidays, start, end).unwrap(), 6);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and settings.
pub use ph_core as core;

/// Dates, computus, observance policies and business-day arithmetic.
pub use ph_time as time;

/// Jurisdiction tables and the code registry.
pub use ph_jurisdictions as jurisdictions;

pub use ph_core::{Error, Result, ScanLimit};
pub use ph_jurisdictions::{codes, lookup, Jurisdiction};
pub use ph_time::{Date, HolidayRecord, IsHoliday, PublicHolidays, YearHolidays};
