//! pi_record CLI
//!
//! `pi_record [DIGITS]` - digits are asked for on stdin when omitted.

use anyhow::Context;
use clap::Parser;
use std::io;
use std::path::PathBuf;

use pi_record::machin::precision::WorkingPrecision;
use pi_record::{config, logging, prompt, run};

#[derive(Parser)]
#[command(name = "pi_record", version)]
#[command(about = "Estimate pi with two Machin-like formulas and cross-check the digits")]
struct Cli {
    /// Decimal places to compute (asked interactively when omitted)
    digits: Option<u64>,

    /// Path to pi_record.yaml config
    #[arg(short, long, default_value = "pi_record.yaml")]
    config: PathBuf,

    /// Also print the run summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = config::Overrides::load();
    let config = config::Config::load_or_default(&cli.config)?.with_overrides(&overrides);

    // Logging needs the configured directory, so it starts after config
    logging::init_logging(config.log_dir.as_deref())?;
    tracing::debug!(?config, "Configuration resolved");

    let requested = match cli.digits {
        Some(digits) => digits,
        None => {
            let stdin = io::stdin();
            prompt::read_requested_digits(&mut stdin.lock(), &mut io::stdout())
                .context("reading the requested precision")?
        }
    };

    let working = WorkingPrecision::with_guard(requested, config.guard_digits);
    tracing::info!(
        requested,
        working_digits = working.digits(),
        bits = working.bits(),
        "Working precision derived"
    );

    std::fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("creating output directory {}", config.output_dir.display()))?;

    let report = run::run(working, &config.output_dir, &mut io::stdout().lock())?;
    if cli.json {
        println!("{}", report.to_json()?);
    }

    Ok(())
}
