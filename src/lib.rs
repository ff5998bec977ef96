//! pi_record - estimate pi twice and count the digits that agree
//!
//! Pi is computed with the K. Takano and F. C. M. Størmer arctangent
//! formulas at the requested precision plus a guard margin. Each estimate is
//! written to its own file, and the number of leading decimal digits the two
//! share is reported as the trustworthy precision.
//!
//! Modules:
//! - machin: formulas, evaluator, comparator, formatter
//! - record: estimate files
//! - report / run: console and JSON reporting, the full pipeline
//! - config / logging / prompt: program plumbing

pub mod config;
pub mod logging;
pub mod machin;
pub mod prompt;
pub mod record;
pub mod report;
pub mod run;
