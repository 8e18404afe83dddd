//! # ph-jurisdictions
//!
//! Holiday tables for a handful of jurisdictions, expressed as static rule
//! data over the `ph-time` primitives, with historical regimes and a
//! code-keyed registry.
//!
//! ```
//! use ph_jurisdictions::registry;
//! use ph_time::{Date, PublicHolidays};
//!
//! let us = registry::lookup("US").unwrap();
//! let friday: Date = "2021-07-02".parse().unwrap();
//! assert_eq!(us.next_working_day(friday).unwrap(), friday);
//! assert_eq!(us.business_days_add(friday, 1).unwrap().to_string(), "2021-07-06");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Country holiday tables.
pub mod countries;

/// `Jurisdiction`: a `PublicHolidays` implementation over a regime table.
pub mod jurisdiction;

/// Historical regimes and their validated table.
pub mod regime;

/// Lookup by jurisdiction code.
pub mod registry;

/// `HolidayRule`: one row of a holiday table.
pub mod rule;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use jurisdiction::Jurisdiction;
pub use regime::{Regime, RegimeTable};
pub use registry::{codes, lookup};
pub use rule::{DateRule, HolidayRule};
