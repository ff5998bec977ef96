//! A full run: evaluate every formula, record the estimates, compare them

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use std::time::Instant;

use crate::machin::compare::compare;
use crate::machin::format::{build_format, render_trimmed};
use crate::machin::formulas::registry;
use crate::machin::precision::{fraction_len, WorkingPrecision};
use crate::machin::series::evaluate;
use crate::record;
use crate::report::{FormulaRun, RunReport};

/// Run both formulas at `working` precision, writing files into `output_dir`
/// and the console report into `out`
///
/// Both files are written before the comparison; any failure aborts the run
/// before the summary is printed.
pub fn run<W: Write>(working: WorkingPrecision, output_dir: &Path, out: &mut W) -> Result<RunReport> {
    let shown = fraction_len(working.requested_digits())?;

    let mut evaluated = Vec::with_capacity(registry().len());
    for formula in registry() {
        tracing::info!(formula = formula.name(), "Evaluating");
        let started = Instant::now();
        let estimate = evaluate(formula, working)
            .with_context(|| format!("evaluating the {} formula", formula.name()))?;
        let elapsed = started.elapsed();

        let spec = build_format(&format!("PI ({}): ", formula.name()), shown);
        writeln!(out, "{}", render_trimmed(&estimate, &spec)?)?;
        evaluated.push((formula, estimate, elapsed));
    }

    let mut runs = Vec::with_capacity(evaluated.len());
    for (formula, estimate, elapsed) in &evaluated {
        let file = record::write_estimate(output_dir, formula, estimate)?;
        runs.push(FormulaRun {
            name: formula.name(),
            file,
            elapsed_ms: elapsed.as_millis() as u64,
        });
    }

    let [(_, first, _), (_, second, _)] = evaluated.as_slice() else {
        anyhow::bail!("expected two formulas to compare, found {}", evaluated.len());
    };
    let agreement = compare(first, second, working)?;
    let portion = render_trimmed(first, &build_format("", fraction_len(agreement)?))?;
    tracing::info!(requested = working.requested_digits(), agreement, "Run complete");

    let report = RunReport::new(working, runs, agreement, portion);
    write!(out, "{}", report.summary())?;
    out.flush()?;
    Ok(report)
}
