//! # ph-core
//!
//! Core building blocks shared across the publicholiday-rs workspace: the
//! error hierarchy with its `ensure!` / `fail!` macros, and the business-day
//! [`ScanLimit`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Library settings (business-day scan limit).
pub mod settings;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::ScanLimit;
