//! Precision formatter - decimal rendering of estimates
//!
//! Two renderings are provided:
//! - truncated: digits past the target are dropped (files, comparison)
//! - labelled: a [`FormatSpec`] asks for extra look-ahead digits, rounds to
//!   nearest there, and [`trim_formatting_artifact`] removes them again.

use std::fmt;

use astro_float::{BigFloat, Consts, Radix, RoundingMode, Sign};

use super::{Estimate, EstimateError};

/// Digits requested past the nominal boundary, so that rounding to nearest
/// happens beyond the digits that are kept.
pub const LOOKAHEAD_DIGITS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    TowardZero,
    /// Half away from zero on the decimal digits
    Nearest,
}

/// Base-10 digits of a value: `[-]integer.fraction`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalExpansion {
    negative: bool,
    integer: Vec<u8>,
    fraction: Vec<u8>,
}

impl DecimalExpansion {
    /// Convert a binary float to its decimal digits
    pub fn from_big_float(value: &BigFloat) -> Result<Self, EstimateError> {
        if value.is_zero() {
            return Ok(Self {
                negative: false,
                integer: vec![0],
                fraction: Vec::new(),
            });
        }

        let mut cc = Consts::new()?;
        // mantissa digits m1 m2 ... represent 0.m1m2... * 10^exponent
        let (sign, digits, exponent) =
            value.convert_to_radix(Radix::Dec, RoundingMode::ToZero, &mut cc)?;

        let (integer, fraction) = if exponent > 0 {
            let split = exponent as usize;
            let mut integer: Vec<u8> = digits.iter().copied().take(split).collect();
            integer.resize(split, 0);
            let fraction = digits.get(split..).map(<[u8]>::to_vec).unwrap_or_default();
            (integer, fraction)
        } else {
            let mut fraction = vec![0; exponent.unsigned_abs() as usize];
            fraction.extend_from_slice(&digits);
            (vec![0], fraction)
        };

        Ok(Self {
            negative: sign == Sign::Neg,
            integer,
            fraction,
        })
    }

    /// Fixed-point text with exactly `fractional_digits` digits after the point
    ///
    /// The decimal point is always present, so zero digits renders as `"3."`.
    pub fn fixed_point(&self, fractional_digits: usize, rounding: Rounding) -> String {
        let mut integer = self.integer.clone();
        let mut fraction: Vec<u8> = self
            .fraction
            .iter()
            .copied()
            .chain(std::iter::repeat(0))
            .take(fractional_digits)
            .collect();

        let round_up = rounding == Rounding::Nearest
            && self.fraction.get(fractional_digits).is_some_and(|&d| d >= 5);
        if round_up {
            carry(&mut integer, &mut fraction);
        }

        let nonzero = integer.iter().chain(&fraction).any(|&d| d != 0);
        let mut text = String::with_capacity(integer.len() + fraction.len() + 2);
        if self.negative && nonzero {
            text.push('-');
        }
        text.extend(integer.iter().map(|&d| char::from(b'0' + d)));
        text.push('.');
        text.extend(fraction.iter().map(|&d| char::from(b'0' + d)));
        text
    }
}

/// Add one unit in the last fractional place
fn carry(integer: &mut Vec<u8>, fraction: &mut [u8]) {
    for digit in fraction.iter_mut().rev().chain(integer.iter_mut().rev()) {
        if *digit == 9 {
            *digit = 0;
        } else {
            *digit += 1;
            return;
        }
    }
    integer.insert(0, 1);
}

/// A labelled, variable-precision rendering request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatSpec {
    label: String,
    fractional_digits: usize,
    lookahead: usize,
}

/// Build the format for `fractional_digits` kept digits behind `label`
pub fn build_format(label: &str, fractional_digits: usize) -> FormatSpec {
    FormatSpec {
        label: label.to_string(),
        fractional_digits,
        lookahead: LOOKAHEAD_DIGITS,
    }
}

impl FormatSpec {
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Digits kept after trimming
    pub fn fractional_digits(&self) -> usize {
        self.fractional_digits
    }

    /// Digits the renderer produces, look-ahead included
    pub fn rendered_digits(&self) -> usize {
        self.fractional_digits + self.lookahead
    }
}

impl fmt::Display for FormatSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%.{}Rf", self.label, self.rendered_digits())
    }
}

/// Label followed by the estimate rounded to nearest at the look-ahead width
///
/// The result still carries the look-ahead digits; pass it through
/// [`trim_formatting_artifact`] before display.
pub fn render(estimate: &Estimate, spec: &FormatSpec) -> Result<String, EstimateError> {
    let number = estimate
        .expansion()?
        .fixed_point(spec.rendered_digits(), Rounding::Nearest);
    Ok(format!("{}{}", spec.label, number))
}

/// Strip the look-ahead digits that [`render`] appends
///
/// Exactly `LOOKAHEAD_DIGITS` trailing characters are removed, but never the
/// label, the integer part or the decimal point. Text shorter than that is
/// returned as is.
pub fn trim_formatting_artifact(text: &str, spec: &FormatSpec) -> String {
    let label_len = if text.starts_with(spec.label.as_str()) {
        spec.label.len()
    } else {
        0
    };
    let number = &text[label_len..];
    let floor = label_len + number.find('.').map_or(number.len(), |dot| dot + 1);

    let mut keep = text.len().saturating_sub(spec.lookahead).max(floor);
    while !text.is_char_boundary(keep) {
        keep += 1;
    }
    text[..keep].to_string()
}

/// [`render`] followed by [`trim_formatting_artifact`]
pub fn render_trimmed(estimate: &Estimate, spec: &FormatSpec) -> Result<String, EstimateError> {
    let text = render(estimate, spec)?;
    Ok(trim_formatting_artifact(&text, spec))
}

/// Estimate truncated toward zero at `fractional_digits`
pub fn render_truncated(estimate: &Estimate, fractional_digits: usize) -> Result<String, EstimateError> {
    Ok(estimate
        .expansion()?
        .fixed_point(fractional_digits, Rounding::TowardZero))
}
