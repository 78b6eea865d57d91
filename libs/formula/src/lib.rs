//! Chemical formula parsing.
//!
//! Turns strings such as `Fe2(SO4)3`, `K[Fe(NO3)2]4` or `CuSO4 * 5H2O` into
//! element counts.
//!
//! ```rust
//! let c = stoich_formula::parse_formula("Fe2(SO4)3").unwrap();
//! assert_eq!(c.get("Fe"), Some(2));
//! assert_eq!(c.get("S"), Some(3));
//! assert_eq!(c.get("O"), Some(12));
//! ```
//!
//! Element symbols are not checked against the periodic table; any
//! `Upper lower*` name is accepted.

#![forbid(unsafe_code)]

mod composition;
mod error;
mod group;
mod scanner;
mod splitter;

pub use composition::Composition;
pub use error::{Error, Result};
pub use splitter::{parse, Parsed, HYDRATE_SEPARATOR};

/// Parses a single formula segment (no `" * "` separator).
pub fn parse_formula(input: &str) -> Result<Composition> {
    let composition = scanner::scan(input)?;
    tracing::trace!(input, elements = composition.len(), "parsed formula");
    Ok(composition)
}
