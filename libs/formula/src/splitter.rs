//! Hydrate splitting (`CuSO4 * 5H2O`).

use crate::composition::Composition;
use crate::error::Result;
use crate::scanner::scan;

/// Separator between the parts of a multi-formula input.
pub const HYDRATE_SEPARATOR: &str = " * ";

/// Result of [`parse`]: one composition, or one per separated segment.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Parsed {
    Single(Composition),
    Multi(Vec<Composition>),
}

impl Parsed {
    /// All segment results in input order.
    pub fn segments(&self) -> &[Composition] {
        match self {
            Parsed::Single(c) => std::slice::from_ref(c),
            Parsed::Multi(cs) => cs,
        }
    }

    pub fn is_multi(&self) -> bool {
        matches!(self, Parsed::Multi(_))
    }

    pub fn into_segments(self) -> Vec<Composition> {
        match self {
            Parsed::Single(c) => vec![c],
            Parsed::Multi(cs) => cs,
        }
    }
}

/// Parses a formula that may hold several `" * "`-separated segments.
///
/// Without a separator the whole input is a single segment. Empty segments
/// are skipped. The first failing segment aborts the whole parse.
pub fn parse(input: &str) -> Result<Parsed> {
    if !input.contains(HYDRATE_SEPARATOR) {
        return scan(input).map(Parsed::Single);
    }

    let segments = input
        .split(HYDRATE_SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .map(scan)
        .collect::<Result<Vec<_>>>()?;
    tracing::debug!(input, segments = segments.len(), "parsed multi-formula");
    Ok(Parsed::Multi(segments))
}
