//! Element counts produced by a formula parse.

use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Mapping from element symbol to total atom count.
///
/// Every stored count is at least 1. Iteration is ordered by symbol so that
/// rendering is deterministic; the order itself carries no meaning.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Composition(BTreeMap<String, u32>);

impl Composition {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn get(&self, symbol: &str) -> Option<u32> {
        self.0.get(symbol).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(symbol, count)| (symbol.as_str(), *count))
    }

    pub fn into_inner(self) -> BTreeMap<String, u32> {
        self.0
    }

    /// Adds `quantity` atoms of `symbol`, summing with any earlier occurrence.
    ///
    /// A missing quantity counts as 1. No validation happens here; the scanner
    /// has already rejected zero digits.
    pub fn add(&mut self, symbol: &str, quantity: Option<u32>) -> Result<()> {
        let quantity = quantity.unwrap_or(1);
        match self.0.get_mut(symbol) {
            Some(count) => *count = count.checked_add(quantity).ok_or(Error::Overflow)?,
            None => {
                self.0.insert(symbol.to_string(), quantity);
            }
        }
        Ok(())
    }

    /// Multiplies every count in `other` by `factor` and sums the result into `self`.
    pub fn merge_scaled(&mut self, other: Composition, factor: u32) -> Result<()> {
        for (symbol, count) in other.0 {
            let scaled = count.checked_mul(factor).ok_or(Error::Overflow)?;
            match self.0.get_mut(&symbol) {
                Some(existing) => {
                    *existing = existing.checked_add(scaled).ok_or(Error::Overflow)?
                }
                None => {
                    self.0.insert(symbol, scaled);
                }
            }
        }
        Ok(())
    }

    /// Multiplies every count by `factor`.
    pub fn scale(&mut self, factor: u32) -> Result<()> {
        for count in self.0.values_mut() {
            *count = count.checked_mul(factor).ok_or(Error::Overflow)?;
        }
        Ok(())
    }
}

impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (symbol, count) in self.iter() {
            f.write_str(symbol)?;
            if count > 1 {
                write!(f, "{count}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Composition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::parse_formula(s)
    }
}

impl FromIterator<(String, u32)> for Composition {
    fn from_iter<I: IntoIterator<Item = (String, u32)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
