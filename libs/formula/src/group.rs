//! Bracket group evaluation.

use crate::composition::Composition;
use crate::error::Result;

/// A closed `(...)` or `[...]` group and the digits that followed it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Group<'a> {
    pub body: &'a str,
    pub multiplier: Option<u32>,
}

impl<'a> Group<'a> {
    pub fn new(body: &'a str, multiplier: Option<u32>) -> Self {
        Self { body, multiplier }
    }

    /// Parses the body as a formula of its own, scales it by the multiplier
    /// (1 when absent) and merges it into `into`.
    ///
    /// Errors from the nested parse propagate unchanged.
    pub fn evaluate_into(&self, into: &mut Composition) -> Result<()> {
        let inner = crate::scanner::scan(self.body)?;
        let factor = self.multiplier.unwrap_or(1);
        tracing::trace!(body = self.body, factor, "evaluated bracket group");
        into.merge_scaled(inner, factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn scales_body_by_multiplier() {
        let mut c = Composition::new();
        c.add("Fe", Some(2)).unwrap();
        Group::new("SO4", Some(3)).evaluate_into(&mut c).unwrap();
        assert_eq!(c.get("Fe"), Some(2));
        assert_eq!(c.get("S"), Some(3));
        assert_eq!(c.get("O"), Some(12));
    }

    #[test]
    fn missing_multiplier_means_one() {
        let mut c = Composition::new();
        Group::new("OH", None).evaluate_into(&mut c).unwrap();
        assert_eq!(c.get("O"), Some(1));
        assert_eq!(c.get("H"), Some(1));
    }

    #[test]
    fn nested_errors_propagate() {
        let mut c = Composition::new();
        let err = Group::new("cl", Some(2)).evaluate_into(&mut c).unwrap_err();
        assert_eq!(err, Error::LowerCaseLetterStart);
        assert!(c.is_empty());
    }
}
