//! Single-pass formula scanner.
//!
//! Walks one formula segment character by character and drives an explicit
//! state machine:
//!
//! ```text
//! Prefix --A-Z--> Name --0-9--> Quantity
//!                   ^               |
//!                   '------A-Z------'
//! any --( or [--> Bracket --close--> Multiplier --other--> Idle (reprocess)
//! ```
//!
//! Bracket bodies are captured as raw text up to the first matching close
//! character and parsed recursively through [`Group`].

use crate::composition::Composition;
use crate::error::{Error, Result};
use crate::group::Group;

#[derive(Debug)]
enum State<'a> {
    /// Nothing but digits (or skipped characters) seen so far.
    Prefix,
    /// A bracket group was just flushed; no element is open.
    Idle,
    /// Reading an element symbol.
    Name { symbol: String },
    /// Reading the count that follows a symbol.
    Quantity { symbol: String, quantity: u32 },
    /// Capturing bracket text; `start` is the byte offset after the opener.
    Bracket { start: usize, close: char },
    /// Reading the digits after a closed bracket.
    Multiplier { body: &'a str, multiplier: Option<u32> },
}

struct Scanner<'a> {
    input: &'a str,
    state: State<'a>,
    prefix: Option<u32>,
    /// Uppercase letters that started an element symbol.
    element_starts: usize,
    composition: Composition,
}

/// Parses a single formula segment into element counts.
pub(crate) fn scan(input: &str) -> Result<Composition> {
    let mut scanner = Scanner::new(input);
    for (pos, c) in input.char_indices() {
        scanner.step(pos, c)?;
    }
    scanner.finish()
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            state: State::Prefix,
            prefix: None,
            element_starts: 0,
            composition: Composition::new(),
        }
    }

    fn step(&mut self, pos: usize, c: char) -> Result<()> {
        let input = self.input;
        match &mut self.state {
            State::Bracket { start, close } => {
                if c == *close {
                    let body = &input[*start..pos];
                    self.state = State::Multiplier {
                        body,
                        multiplier: None,
                    };
                }
                return Ok(());
            }
            State::Multiplier { multiplier, .. } if c.is_ascii_digit() => {
                *multiplier = Some(push_digit(*multiplier, c)?);
                return Ok(());
            }
            State::Multiplier { body, multiplier } => {
                // The group ends here; `c` is then handled as if no group preceded it.
                Group::new(*body, *multiplier).evaluate_into(&mut self.composition)?;
                self.state = State::Idle;
            }
            _ => {}
        }
        self.step_outside_bracket(pos, c)
    }

    fn step_outside_bracket(&mut self, pos: usize, c: char) -> Result<()> {
        match c {
            'A'..='Z' => {
                self.flush_element()?;
                self.element_starts += 1;
                self.state = State::Name {
                    symbol: c.to_string(),
                };
            }
            'a'..='z' => match &mut self.state {
                State::Name { symbol } => symbol.push(c),
                _ => return Err(Error::LowerCaseLetterStart),
            },
            '0'..='9' => match &mut self.state {
                State::Prefix | State::Idle => self.prefix = Some(push_digit(self.prefix, c)?),
                State::Name { symbol } => {
                    let quantity = push_digit(None, c)?;
                    let symbol = std::mem::take(symbol);
                    self.state = State::Quantity { symbol, quantity };
                }
                State::Quantity { quantity, .. } => *quantity = push_digit(Some(*quantity), c)?,
                // Bracket states consume digits in `step`.
                State::Bracket { .. } | State::Multiplier { .. } => {}
            },
            '-' if matches!(self.state, State::Name { .. } | State::Quantity { .. }) => {
                return Err(Error::WrongElementQuantity);
            }
            '(' | '[' => {
                self.flush_element()?;
                self.state = State::Bracket {
                    start: pos + c.len_utf8(),
                    close: if c == '(' { ')' } else { ']' },
                };
            }
            _ => {}
        }
        Ok(())
    }

    /// Moves a pending symbol and its count into the composition.
    fn flush_element(&mut self) -> Result<()> {
        match std::mem::replace(&mut self.state, State::Idle) {
            State::Name { symbol } => self.composition.add(&symbol, None),
            State::Quantity { symbol, quantity } => {
                self.composition.add(&symbol, Some(quantity))
            }
            other => {
                self.state = other;
                Ok(())
            }
        }
    }

    fn finish(mut self) -> Result<Composition> {
        match std::mem::replace(&mut self.state, State::Idle) {
            State::Name { symbol } => self.composition.add(&symbol, None)?,
            State::Quantity { symbol, quantity } => {
                self.composition.add(&symbol, Some(quantity))?
            }
            State::Bracket { start, .. } => {
                Group::new(&self.input[start..], None).evaluate_into(&mut self.composition)?
            }
            State::Multiplier { body, multiplier } => {
                Group::new(body, multiplier).evaluate_into(&mut self.composition)?
            }
            State::Prefix | State::Idle => {}
        }

        if let Some(prefix) = self.prefix {
            // A leading count on a lone element is ambiguous with a plain quantity.
            if self.element_starts < 2 {
                return Err(Error::WrongElementQuantityPlacement);
            }
            self.composition.scale(prefix)?;
        }

        Ok(self.composition)
    }
}

/// Appends one decimal digit to an accumulated value. A zero digit is never valid.
fn push_digit(acc: Option<u32>, c: char) -> Result<u32> {
    let digit = c.to_digit(10).ok_or(Error::WrongElementQuantity)?;
    if digit == 0 {
        return Err(Error::WrongElementQuantity);
    }
    acc.unwrap_or(0)
        .checked_mul(10)
        .and_then(|v| v.checked_add(digit))
        .ok_or(Error::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(input: &str) -> Vec<(String, u32)> {
        scan(input)
            .unwrap()
            .into_inner()
            .into_iter()
            .collect()
    }

    fn pairs(expected: &[(&str, u32)]) -> Vec<(String, u32)> {
        let mut v: Vec<_> = expected
            .iter()
            .map(|(s, n)| (s.to_string(), *n))
            .collect();
        v.sort();
        v
    }

    #[test]
    fn test_bare_symbol() {
        assert_eq!(counts("Fe"), pairs(&[("Fe", 1)]));
    }

    #[test]
    fn test_symbol_with_quantity() {
        assert_eq!(counts("Ag12"), pairs(&[("Ag", 12)]));
    }

    #[test]
    fn test_uppercase_starts_new_element() {
        assert_eq!(counts("HOH"), pairs(&[("H", 2), ("O", 1)]));
        assert_eq!(counts("H2SO4"), pairs(&[("H", 2), ("S", 1), ("O", 4)]));
    }

    #[test]
    fn test_bracket_then_element_reprocesses_character() {
        assert_eq!(
            counts("(OH)2Ca"),
            pairs(&[("O", 2), ("H", 2), ("Ca", 1)])
        );
    }

    #[test]
    fn test_adjacent_groups() {
        assert_eq!(counts("(A)2(B)3"), pairs(&[("A", 2), ("B", 3)]));
        assert_eq!(counts("(A)[B]"), pairs(&[("A", 1), ("B", 1)]));
    }

    #[test]
    fn test_trailing_group_without_multiplier() {
        assert_eq!(counts("Na(OH)"), pairs(&[("Na", 1), ("O", 1), ("H", 1)]));
    }

    #[test]
    fn test_unclosed_bracket_is_evaluated() {
        assert_eq!(counts("K(OH"), pairs(&[("K", 1), ("O", 1), ("H", 1)]));
    }

    #[test]
    fn test_prefix_scales_segment() {
        assert_eq!(counts("5H2O"), pairs(&[("H", 10), ("O", 5)]));
        assert_eq!(counts("3HH"), pairs(&[("H", 6)]));
        assert_eq!(
            counts("2Ca(OH)2Mg"),
            pairs(&[("Ca", 2), ("O", 4), ("H", 4), ("Mg", 2)])
        );
    }

    #[test]
    fn test_prefix_on_single_element_rejected() {
        assert_eq!(scan("2F"), Err(Error::WrongElementQuantityPlacement));
        assert_eq!(scan("2(OH)"), Err(Error::WrongElementQuantityPlacement));
        assert_eq!(scan("2Ca(OH)2"), Err(Error::WrongElementQuantityPlacement));
    }

    #[test]
    fn test_zero_digits_rejected() {
        assert_eq!(scan("N0"), Err(Error::WrongElementQuantity));
        assert_eq!(scan("C10"), Err(Error::WrongElementQuantity));
        assert_eq!(scan("0HO"), Err(Error::WrongElementQuantity));
        assert_eq!(scan("(OH)0"), Err(Error::WrongElementQuantity));
    }

    #[test]
    fn test_negative_quantity_rejected() {
        assert_eq!(scan("N-1"), Err(Error::WrongElementQuantity));
        assert_eq!(scan("N2-1"), Err(Error::WrongElementQuantity));
    }

    #[test]
    fn test_lowercase_without_name() {
        assert_eq!(scan("cl"), Err(Error::LowerCaseLetterStart));
        assert_eq!(scan("Fe2e"), Err(Error::LowerCaseLetterStart));
        assert_eq!(scan("(OH)e"), Err(Error::LowerCaseLetterStart));
        assert_eq!(scan("K(Fe)2e"), Err(Error::LowerCaseLetterStart));
    }

    #[test]
    fn test_digits_after_skipped_text_following_group() {
        // Digits with no open element join the prefix.
        assert_eq!(scan("(OH)2 3"), Err(Error::WrongElementQuantityPlacement));
        assert_eq!(scan("(OH)2 0"), Err(Error::WrongElementQuantity));
        assert_eq!(
            counts("HO(N)2 3"),
            pairs(&[("H", 3), ("O", 3), ("N", 6)])
        );
    }

    #[test]
    fn test_quantity_overflow() {
        assert_eq!(scan("H99999999999"), Err(Error::Overflow));
    }

    #[test]
    fn test_empty_input() {
        assert!(scan("").unwrap().is_empty());
    }
}
