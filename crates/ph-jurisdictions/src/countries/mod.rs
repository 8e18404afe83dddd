//! Country holiday tables.
//!
//! Each country is a constructor returning a [`Jurisdiction`](crate::Jurisdiction)
//! built from static rule tables.

/// Germany (`DE`).
pub mod germany;

/// Serbia (`RS`).
pub mod serbia;

/// United Kingdom (`GB`).
pub mod united_kingdom;

/// United States (`US`).
pub mod united_states;

pub use germany::germany;
pub use serbia::serbia;
pub use united_kingdom::united_kingdom;
pub use united_states::united_states;
