//! Machin-like estimation engine
//!
//! Estimates pi from arctangent formulas and cross-checks two estimates:
//! - precision: requested digits -> working precision (guard margin, bits)
//! - formulas: the Takano and Stormer term tables
//! - series: generic evaluator, one call per formula
//! - compare: digit agreement between two estimates
//! - format: fixed-point rendering, format specs, artifact trimming

pub mod compare;
pub mod format;
pub mod formulas;
pub mod precision;
pub mod series;

use std::cell::OnceCell;

use astro_float::BigFloat;
use thiserror::Error;

use format::DecimalExpansion;
use precision::WorkingPrecision;

#[derive(Error, Debug)]
pub enum EstimateError {
    #[error("formula '{formula}' has no terms")]
    EmptyFormula { formula: &'static str },
    #[error("formula '{formula}' term {term} has a zero denominator")]
    ZeroDenominator { formula: &'static str, term: usize },
    #[error("formula '{formula}' evaluated to a non-finite value")]
    NonFinite { formula: &'static str },
    #[error("estimates computed at {found} working digits, expected {expected}")]
    PrecisionMismatch { expected: u64, found: u64 },
    #[error("{digits} digits do not fit in memory on this platform")]
    PrecisionOverflow { digits: u64 },
    #[error("arbitrary-precision arithmetic failed: {0:?}")]
    Arithmetic(astro_float::Error),
}

impl From<astro_float::Error> for EstimateError {
    fn from(err: astro_float::Error) -> Self {
        EstimateError::Arithmetic(err)
    }
}

/// A high-precision value of pi produced by one formula evaluation.
///
/// The decimal expansion is derived on first use and cached, so rendering
/// the same estimate for the console, the output file and the comparator
/// only pays for one radix conversion.
#[derive(Debug)]
pub struct Estimate {
    value: BigFloat,
    working: WorkingPrecision,
    expansion: OnceCell<DecimalExpansion>,
}

impl Estimate {
    pub(crate) fn new(value: BigFloat, working: WorkingPrecision) -> Self {
        Self {
            value,
            working,
            expansion: OnceCell::new(),
        }
    }

    /// The binary value as computed
    pub fn value(&self) -> &BigFloat {
        &self.value
    }

    /// Working precision the value was computed at
    pub fn working(&self) -> WorkingPrecision {
        self.working
    }

    /// Base-10 digits of the value
    pub fn expansion(&self) -> Result<&DecimalExpansion, EstimateError> {
        if let Some(expansion) = self.expansion.get() {
            return Ok(expansion);
        }
        let expansion = DecimalExpansion::from_big_float(&self.value)?;
        Ok(self.expansion.get_or_init(|| expansion))
    }
}
