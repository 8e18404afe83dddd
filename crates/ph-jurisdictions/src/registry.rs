//! Lookup of jurisdictions by code.
//!
//! Codes are ISO 3166-1 alpha-2 and matched case-insensitively.

use ph_core::errors::{Error, Result};
use ph_time::PublicHolidays;
use tracing::debug;

use crate::countries;
use crate::jurisdiction::Jurisdiction;

type Factory = fn() -> Result<Jurisdiction>;

static FACTORIES: [(&str, Factory); 4] = [
    ("DE", countries::germany),
    ("GB", countries::united_kingdom),
    ("RS", countries::serbia),
    ("US", countries::united_states),
];

fn factory(code: &str) -> Option<Factory> {
    FACTORIES
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code.trim()))
        .map(|&(_, f)| f)
}

/// Build the jurisdiction registered under `code`.
///
/// # Errors
/// [`Error::UnknownJurisdiction`] if no jurisdiction has that code.
///
/// ```
/// use ph_jurisdictions::registry::lookup;
/// use ph_time::PublicHolidays;
/// let gb = lookup("gb").unwrap();
/// assert_eq!(gb.name(), "United Kingdom");
/// assert!(lookup("XX").is_err());
/// ```
pub fn lookup(code: &str) -> Result<Box<dyn PublicHolidays>> {
    let jurisdiction = jurisdiction(code)?;
    Ok(Box::new(jurisdiction))
}

/// Like [`lookup`], returning the concrete [`Jurisdiction`] (with its
/// regions and regime table).
pub fn jurisdiction(code: &str) -> Result<Jurisdiction> {
    match factory(code) {
        Some(build) => {
            debug!(code, "jurisdiction lookup");
            build()
        }
        None => {
            debug!(code, "unknown jurisdiction code");
            Err(Error::UnknownJurisdiction(code.to_owned()))
        }
    }
}

/// Registered codes, sorted.
pub fn codes() -> impl Iterator<Item = &'static str> {
    FACTORIES.iter().map(|&(c, _)| c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_sorted_and_build() {
        let all: Vec<_> = codes().collect();
        assert_eq!(all, ["DE", "GB", "RS", "US"]);
        for code in all {
            let j = lookup(code).unwrap();
            assert_eq!(j.code(), code);
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(lookup("us").unwrap().name(), "United States");
        assert_eq!(lookup(" De ").unwrap().code(), "DE");
    }

    #[test]
    fn unknown_codes() {
        assert_eq!(
            lookup("XX").err(),
            Some(Error::UnknownJurisdiction("XX".into()))
        );
        assert!(jurisdiction("").is_err());
    }

    #[test]
    fn concrete_jurisdiction_exposes_regions() {
        assert_eq!(jurisdiction("DE").unwrap().regions().len(), 16);
        assert!(jurisdiction("US").unwrap().regions().is_empty());
    }
}
