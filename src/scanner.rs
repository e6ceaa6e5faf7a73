use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::units::{self, BARE_NUMBER};
use crate::ParseDurationError;

/// Quantities collected during one scan, keyed by unit multiplier.
///
/// `"5m 10m"` produces `{60: 15}`.
pub type Accumulator = BTreeMap<u64, u64>;

/// How the scanner reacts to input it does not understand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// Unknown units are ignored and text without any quantity parses as zero.
    #[default]
    Permissive,
    /// Unknown units and inputs without any quantity are errors.
    Strict,
}

/// Options controlling how duration strings are parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub mode: ParseMode,
}

impl ParseOptions {
    pub fn permissive() -> Self {
        Self {
            mode: ParseMode::Permissive,
        }
    }

    pub fn strict() -> Self {
        Self {
            mode: ParseMode::Strict,
        }
    }

    pub fn is_strict(&self) -> bool {
        self.mode == ParseMode::Strict
    }
}

/// Splits a source string into `(quantity, unit)` tokens and accumulates them.
///
/// Anything that is not an ASCII digit is skipped until a quantity starts.
/// The quantity is followed directly by an optional run of ASCII letters
/// naming the unit.
pub struct Scanner<'a> {
    source: &'a str,
    options: ParseOptions,
    result: Accumulator,
    tokens: usize,
    current: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str, options: ParseOptions) -> Self {
        Self {
            source,
            options,
            result: Accumulator::new(),
            tokens: 0,
            current: 0,
        }
    }

    /// Consumes the whole source and returns the per-multiplier sums.
    pub fn scan_tokens(mut self) -> Result<Accumulator, ParseDurationError> {
        while !self.at_end() {
            self.scan_token()?;
        }

        if self.tokens == 0 && self.options.is_strict() {
            return Err(ParseDurationError::Empty);
        }

        Ok(self.result)
    }

    fn at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> u8 {
        let byte = self.source.as_bytes()[self.current];
        self.current += 1;
        byte
    }

    fn peek(&self) -> Option<u8> {
        self.source.as_bytes().get(self.current).copied()
    }

    fn skip_while(&mut self, accept: fn(&u8) -> bool) {
        while self.peek().is_some_and(|b| accept(&b)) {
            self.current += 1;
        }
    }

    fn scan_token(&mut self) -> Result<(), ParseDurationError> {
        let start = self.current;
        if !self.advance().is_ascii_digit() {
            return Ok(());
        }

        // Both runs are ASCII, so the slice bounds always sit on char boundaries.
        self.skip_while(u8::is_ascii_digit);
        let digits = &self.source[start..self.current];
        if self.options.is_strict() {
            self.reject_malformed_number(start)?;
        }
        let offset = self.current;
        self.skip_while(u8::is_ascii_alphabetic);
        let literal = &self.source[offset..self.current];

        let quantity: u64 = digits
            .parse()
            .map_err(|_| ParseDurationError::InvalidNumber(digits.to_string()))?;
        self.tokens += 1;

        let multiplier = if literal.is_empty() {
            BARE_NUMBER
        } else if let Some(multiplier) = units::multiplier(literal) {
            multiplier
        } else if self.options.is_strict() {
            return Err(ParseDurationError::UnsupportedUnit(literal.to_string()));
        } else {
            tracing::debug!(unit = literal, quantity, "ignoring unknown duration unit");
            return Ok(());
        };

        tracing::trace!(quantity, multiplier, "duration token");
        self.add_value(multiplier, quantity)
    }

    /// Fails on a signed quantity (`-5m`) or one with a fraction (`1.5h`, `1,5h`).
    /// Called with the cursor right after the digit run starting at `start`.
    fn reject_malformed_number(&self, start: usize) -> Result<(), ParseDurationError> {
        let bytes = self.source.as_bytes();
        let signed = start > 0 && matches!(bytes[start - 1], b'-' | b'+');
        let fraction = matches!(self.peek(), Some(b'.' | b','))
            && bytes.get(self.current + 1).is_some_and(u8::is_ascii_digit);
        if !signed && !fraction {
            return Ok(());
        }

        let from = if signed { start - 1 } else { start };
        let mut end = self.current;
        if fraction {
            end += 1;
            while bytes.get(end).is_some_and(u8::is_ascii_digit) {
                end += 1;
            }
        }
        Err(ParseDurationError::InvalidNumber(self.source[from..end].to_string()))
    }

    fn add_value(&mut self, multiplier: u64, quantity: u64) -> Result<(), ParseDurationError> {
        let value = self.result.entry(multiplier).or_insert(0);
        *value = value
            .checked_add(quantity)
            .ok_or(ParseDurationError::Overflow)?;
        Ok(())
    }
}

/// Reduces an [`Accumulator`] to a number of seconds.
pub fn total_seconds(accumulator: &Accumulator) -> Result<u64, ParseDurationError> {
    accumulator
        .iter()
        .try_fold(0u64, |total, (&multiplier, &value)| {
            multiplier
                .checked_mul(value)
                .and_then(|seconds| total.checked_add(seconds))
        })
        .ok_or(ParseDurationError::Overflow)
}

/// Parse strings like "2d 5h 30m", "1d2h3m4s" or "90" into a number of seconds,
/// ignoring anything the scanner does not recognise.
pub fn parse_seconds(source: &str) -> Result<u64, ParseDurationError> {
    parse_seconds_with(source, &ParseOptions::default())
}

pub fn parse_seconds_with(source: &str, options: &ParseOptions) -> Result<u64, ParseDurationError> {
    let accumulator = Scanner::new(source, *options).scan_tokens()?;
    total_seconds(&accumulator)
}
