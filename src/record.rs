//! Estimate files
//!
//! Each formula's estimate is written to its own fixed-name file as plain
//! decimal text: the integer digit, the point and the requested fractional
//! digits, truncated toward zero. No label, no trailing newline.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::machin::format::render_truncated;
use crate::machin::formulas::Formula;
use crate::machin::precision::fraction_len;
use crate::machin::{Estimate, EstimateError};

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("cannot create output file {}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write output file {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Estimate(#[from] EstimateError),
}

/// Write `estimate` to `dir/<formula file name>`, returning the path
pub fn write_estimate(dir: &Path, formula: &Formula, estimate: &Estimate) -> Result<PathBuf, RecordError> {
    let digits = estimate.working().requested_digits();
    let text = render_truncated(estimate, fraction_len(digits)?)?;

    let path = dir.join(formula.file_name());
    let mut file = File::create(&path).map_err(|source| RecordError::Create {
        path: path.clone(),
        source,
    })?;
    file.write_all(text.as_bytes())
        .and_then(|()| file.flush())
        .map_err(|source| RecordError::Write {
            path: path.clone(),
            source,
        })?;

    tracing::info!(formula = formula.name(), digits, path = %path.display(), "Estimate recorded");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machin::formulas::{STORMER, TAKANO};
    use crate::machin::precision::derive_working_precision;
    use crate::machin::series::evaluate;

    #[test]
    fn test_writes_truncated_digits() {
        let dir = tempfile::tempdir().unwrap();
        let estimate = evaluate(&TAKANO, derive_working_precision(10)).unwrap();

        let path = write_estimate(dir.path(), &TAKANO, &estimate).unwrap();
        assert_eq!(path, dir.path().join("pi_K_Takano.txt"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "3.1415926535");
    }

    #[test]
    fn test_digit_count_matches_request() {
        let dir = tempfile::tempdir().unwrap();
        let estimate = evaluate(&STORMER, derive_working_precision(37)).unwrap();

        let path = write_estimate(dir.path(), &STORMER, &estimate).unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        let digits = content.chars().filter(char::is_ascii_digit).count();
        assert_eq!(digits, 38);
        assert!(!content.ends_with('\n'));
    }

    #[test]
    fn test_zero_digits() {
        let dir = tempfile::tempdir().unwrap();
        let estimate = evaluate(&TAKANO, derive_working_precision(0)).unwrap();

        let path = write_estimate(dir.path(), &TAKANO, &estimate).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "3.");
    }

    #[test]
    fn test_missing_directory_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let estimate = evaluate(&TAKANO, derive_working_precision(1)).unwrap();

        let err = write_estimate(&missing, &TAKANO, &estimate).unwrap_err();
        match &err {
            RecordError::Create { path, source } => {
                assert_eq!(path, &missing.join("pi_K_Takano.txt"));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("pi_K_Takano.txt"));
    }
}
