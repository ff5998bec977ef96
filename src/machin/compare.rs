//! Digit agreement between two estimates
//!
//! Both estimates are truncated to the requested precision and compared
//! character by character. Two structurally different series are unlikely
//! to agree on a wrong digit, so the count is a lower bound on the digits
//! both reproduce correctly. It is a heuristic, not a proof.

use super::format::render_truncated;
use super::precision::{fraction_len, WorkingPrecision};
use super::{Estimate, EstimateError};

/// Leading characters that always match: the integer digit and the point ("3.")
const LEADING_CHARS: u64 = 2;

/// Count the fractional digits `a` and `b` agree on at `working` precision
pub fn compare(a: &Estimate, b: &Estimate, working: WorkingPrecision) -> Result<u64, EstimateError> {
    for estimate in [a, b] {
        if estimate.working() != working {
            return Err(EstimateError::PrecisionMismatch {
                expected: working.digits(),
                found: estimate.working().digits(),
            });
        }
    }

    let fractional = fraction_len(working.digits() - working.guard_digits())?;
    let left = render_truncated(a, fractional)?;
    let right = render_truncated(b, fractional)?;

    let matched = common_prefix_len(&left, &right) as u64;
    let agreement = matched.saturating_sub(LEADING_CHARS);
    tracing::debug!(fractional, matched, agreement, "Estimates compared");
    Ok(agreement)
}

/// Length of the longest shared prefix, in bytes
pub fn common_prefix_len(a: &str, b: &str) -> usize {
    a.bytes().zip(b.bytes()).take_while(|(x, y)| x == y).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machin::formulas::{STORMER, TAKANO};
    use crate::machin::precision::derive_working_precision;
    use crate::machin::series::evaluate;

    #[test]
    fn test_common_prefix_len() {
        assert_eq!(common_prefix_len("3.14159", "3.14160"), 5);
        assert_eq!(common_prefix_len("3.14", "3.14159"), 4);
        assert_eq!(common_prefix_len("", "3.1"), 0);
        assert_eq!(common_prefix_len("2.7", "3.1"), 0);
    }

    #[test]
    fn test_self_agreement_is_requested_digits() {
        for digits in [1u64, 10, 75] {
            let working = derive_working_precision(digits);
            let estimate = evaluate(&TAKANO, working).unwrap();
            assert_eq!(compare(&estimate, &estimate, working).unwrap(), digits);
        }
    }

    #[test]
    fn test_takano_and_stormer_agree() {
        let working = derive_working_precision(10);
        let takano = evaluate(&TAKANO, working).unwrap();
        let stormer = evaluate(&STORMER, working).unwrap();
        let agreement = compare(&takano, &stormer, working).unwrap();
        assert!(agreement >= 8, "agreement {}", agreement);
        assert!(agreement <= 10);
    }

    #[test]
    fn test_agreement_never_exceeds_requested() {
        for digits in [1u64, 2, 5, 30] {
            let working = derive_working_precision(digits);
            let takano = evaluate(&TAKANO, working).unwrap();
            let stormer = evaluate(&STORMER, working).unwrap();
            let agreement = compare(&takano, &stormer, working).unwrap();
            assert!(agreement >= 1);
            assert!(agreement <= digits);
        }
    }

    #[test]
    fn test_zero_digits_is_zero() {
        let working = derive_working_precision(0);
        let takano = evaluate(&TAKANO, working).unwrap();
        let stormer = evaluate(&STORMER, working).unwrap();
        assert_eq!(compare(&takano, &stormer, working).unwrap(), 0);
    }

    #[test]
    fn test_mismatched_precision_rejected() {
        let low = derive_working_precision(5);
        let high = derive_working_precision(6);
        let a = evaluate(&TAKANO, low).unwrap();
        let b = evaluate(&TAKANO, high).unwrap();
        let err = compare(&a, &b, low).unwrap_err();
        assert!(matches!(
            err,
            EstimateError::PrecisionMismatch { expected: 1005, found: 1006 }
        ));
    }
}
