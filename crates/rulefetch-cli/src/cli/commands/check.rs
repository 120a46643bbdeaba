//! `rulefetch check <code> <tests>` – run the external test engine once.

use anyhow::{bail, Result};
use rulefetch_core::config::RulefetchConfig;
use rulefetch_core::harness::{Harness, HarnessOptions, ProcessRunner, RunRequest};
use std::path::PathBuf;
use std::time::Duration;

pub fn run_check(
    cfg: &RulefetchConfig,
    code: PathBuf,
    tests: PathBuf,
    engine: Option<PathBuf>,
) -> Result<()> {
    let engine = match (engine, cfg.harness.as_ref()) {
        (Some(path), _) => path,
        (None, Some(harness)) => harness.engine.clone(),
        (None, None) => {
            bail!("no test engine configured; pass --engine or add a [harness] table to config.toml")
        }
    };

    let mut options = HarnessOptions::default();
    if let Some(harness) = cfg.harness.as_ref() {
        options.max_block = Duration::from_secs(harness.max_block_secs);
    }
    let log = options.log.clone();

    let request = RunRequest { code, tests };
    match Harness::new().run(ProcessRunner::new(engine), options, request) {
        Ok(report) => {
            if log.errors {
                for failure in &report.failures {
                    tracing::warn!(
                        "failed: {}{}",
                        failure.name,
                        failure
                            .message
                            .as_deref()
                            .map(|m| format!(" ({m})"))
                            .unwrap_or_default()
                    );
                }
            }
            if log.summary {
                println!(
                    "{} total, {} passed, {} failed",
                    report.total, report.passed, report.failed
                );
            }
        }
        // A failed engine run is reported, not propagated: the bootstrap
        // leaves the exit code alone.
        Err(err) => tracing::error!("{err}"),
    }
    Ok(())
}
