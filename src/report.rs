//! Run report - console summary and JSON

use serde::Serialize;
use std::path::PathBuf;

use crate::machin::precision::WorkingPrecision;

/// One evaluated formula
#[derive(Debug, Clone, Serialize)]
pub struct FormulaRun {
    pub name: &'static str,
    pub file: PathBuf,
    pub elapsed_ms: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub generated: String,
    pub requested_digits: u64,
    pub guard_digits: u64,
    pub working_digits: u64,
    pub working_bits: usize,
    pub formulas: Vec<FormulaRun>,
    pub agreement: u64,
    pub equivalent_portion: String,
}

impl RunReport {
    pub fn new(
        working: WorkingPrecision,
        formulas: Vec<FormulaRun>,
        agreement: u64,
        equivalent_portion: String,
    ) -> Self {
        Self {
            generated: chrono::Local::now().to_rfc3339(),
            requested_digits: working.requested_digits(),
            guard_digits: working.guard_digits(),
            working_digits: working.digits(),
            working_bits: working.bits(),
            formulas,
            agreement,
            equivalent_portion,
        }
    }

    /// Human-readable closing block of a run
    pub fn summary(&self) -> String {
        format!(
            "\nEquivalent portion of the estimates: {}\n\nRESULT:\n{} decimal places estimated\n{} decimal places in agreement\n",
            self.equivalent_portion, self.requested_digits, self.agreement
        )
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
