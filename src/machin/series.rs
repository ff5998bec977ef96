//! Arctangent series evaluator
//!
//! Turns a formula table into a single estimate. Every operation rounds to
//! nearest at the working precision, so the result only depends on the
//! formula and the precision.

use std::time::Instant;

use astro_float::{BigFloat, Consts, RoundingMode};

use super::formulas::{Formula, FormulaTerm};
use super::precision::WorkingPrecision;
use super::{Estimate, EstimateError};

const RM: RoundingMode = RoundingMode::ToEven;

/// Evaluate `formula` at `working` precision
///
/// Terms are accumulated in declared order. Each call owns its constant
/// cache, so concurrent evaluations share no state.
pub fn evaluate(formula: &Formula, working: WorkingPrecision) -> Result<Estimate, EstimateError> {
    let (first, rest) = formula
        .terms()
        .split_first()
        .ok_or(EstimateError::EmptyFormula {
            formula: formula.name(),
        })?;

    if let Some(term) = formula.terms().iter().position(|t| t.denominator == 0) {
        return Err(EstimateError::ZeroDenominator {
            formula: formula.name(),
            term,
        });
    }

    let p = working.bits();
    let mut cc = Consts::new()?;
    let started = Instant::now();

    let mut sum = contribution(first, p, &mut cc);
    for term in rest {
        sum = sum.add(&contribution(term, p, &mut cc), p, RM);
    }

    if sum.is_nan() || sum.is_inf() {
        tracing::error!(formula = formula.name(), err = ?sum.err(), "non-finite estimate");
        return Err(EstimateError::NonFinite {
            formula: formula.name(),
        });
    }

    tracing::debug!(
        formula = formula.name(),
        bits = p,
        terms = formula.terms().len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Formula evaluated"
    );

    Ok(Estimate::new(sum, working))
}

/// `coefficient * atan(1 / denominator)` at `p` bits
fn contribution(term: &FormulaTerm, p: usize, cc: &mut Consts) -> BigFloat {
    let arctangent = unit_fraction(term.denominator, p).atan(p, RM, cc);
    BigFloat::from_i64(term.coefficient, p).mul(&arctangent, p, RM)
}

/// 1 / denominator, correctly rounded from the exact rational
fn unit_fraction(denominator: u64, p: usize) -> BigFloat {
    let one = BigFloat::from_u64(1, p);
    one.div(&BigFloat::from_u64(denominator, p), p, RM)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machin::format::render_truncated;
    use crate::machin::formulas::{FormulaTerm, STORMER, TAKANO};
    use crate::machin::precision::derive_working_precision;

    const PI_50: &str = "3.14159265358979323846264338327950288419716939937510";

    #[test]
    fn test_takano_ten_digits() {
        let working = derive_working_precision(10);
        let estimate = evaluate(&TAKANO, working).unwrap();
        assert_eq!(render_truncated(&estimate, 10).unwrap(), "3.1415926535");
    }

    #[test]
    fn test_both_formulas_fifty_digits() {
        let working = derive_working_precision(50);
        for formula in [TAKANO, STORMER] {
            let estimate = evaluate(&formula, working).unwrap();
            assert_eq!(render_truncated(&estimate, 50).unwrap(), PI_50, "{}", formula.name());
        }
    }

    #[test]
    fn test_deterministic() {
        let working = derive_working_precision(200);
        let a = evaluate(&STORMER, working).unwrap();
        let b = evaluate(&STORMER, working).unwrap();
        assert_eq!(a.value(), b.value());
        assert_eq!(
            render_truncated(&a, 200).unwrap(),
            render_truncated(&b, 200).unwrap()
        );
    }

    #[test]
    fn test_estimate_keeps_precision() {
        let working = derive_working_precision(3);
        let estimate = evaluate(&TAKANO, working).unwrap();
        assert_eq!(estimate.working(), working);
    }

    #[test]
    fn test_zero_denominator_rejected() {
        const BROKEN: Formula = Formula::new(
            "broken",
            "Broken",
            "broken.txt",
            &[FormulaTerm::new(4, 1), FormulaTerm::new(1, 0)],
        );
        let err = evaluate(&BROKEN, derive_working_precision(5)).unwrap_err();
        assert!(matches!(
            err,
            EstimateError::ZeroDenominator { formula: "Broken", term: 1 }
        ));
    }

    #[test]
    fn test_empty_formula_rejected() {
        const EMPTY: Formula = Formula::new("empty", "Empty", "empty.txt", &[]);
        let err = evaluate(&EMPTY, derive_working_precision(5)).unwrap_err();
        assert!(matches!(err, EstimateError::EmptyFormula { formula: "Empty" }));
    }

    #[test]
    fn test_single_term_machin_style() {
        // 4 * atan(1) = pi
        const QUARTER: Formula =
            Formula::new("atan1", "atan(1)", "atan1.txt", &[FormulaTerm::new(4, 1)]);
        let estimate = evaluate(&QUARTER, derive_working_precision(20)).unwrap();
        assert_eq!(render_truncated(&estimate, 20).unwrap(), &PI_50[..22]);
    }
}
