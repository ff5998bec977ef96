//! Working precision - requested digits plus a guard margin
//!
//! All computation happens at the working precision. The guard digits absorb
//! rounding and convergence error and are dropped before anything is shown.

use super::EstimateError;

/// Default guard margin in decimal digits.
///
/// Chosen empirically, not derived from the convergence rate of either formula.
pub const GUARD_DIGITS: u64 = 1000;

/// ceil(log2(10) * 10^6)
const LOG2_10_MICROS: u64 = 3_321_929;
const MICROS: u64 = 1_000_000;

/// astro-float stores mantissas in 64-bit words
const WORD_BITS: u64 = 64;

/// Precision for a single run, fixed once derived
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkingPrecision {
    requested: u64,
    guard: u64,
}

/// Working precision for `requested_digits` with the default guard margin
pub fn derive_working_precision(requested_digits: u64) -> WorkingPrecision {
    WorkingPrecision::with_guard(requested_digits, GUARD_DIGITS)
}

impl WorkingPrecision {
    pub fn with_guard(requested_digits: u64, guard_digits: u64) -> Self {
        Self {
            requested: requested_digits,
            guard: guard_digits,
        }
    }

    /// Decimal digits carried during computation
    pub fn digits(&self) -> u64 {
        self.requested.saturating_add(self.guard)
    }

    pub fn guard_digits(&self) -> u64 {
        self.guard
    }

    /// Digits left once the guard margin is discarded
    pub fn requested_digits(&self) -> u64 {
        self.digits() - self.guard
    }

    /// Binary precision handed to astro-float
    ///
    /// At least `digits() * log2(10)` bits, rounded up to a whole word.
    pub fn bits(&self) -> usize {
        let bits = self
            .digits()
            .saturating_mul(LOG2_10_MICROS)
            .div_ceil(MICROS)
            .max(WORD_BITS);
        let words = bits.div_ceil(WORD_BITS);
        usize::try_from(words.saturating_mul(WORD_BITS)).unwrap_or(usize::MAX)
    }
}

/// Convert a digit count to a length usable for string building
pub fn fraction_len(digits: u64) -> Result<usize, EstimateError> {
    usize::try_from(digits).map_err(|_| EstimateError::PrecisionOverflow { digits })
}
