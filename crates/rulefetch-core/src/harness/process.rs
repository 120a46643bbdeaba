//! Engine invocation as a child process.

use std::path::PathBuf;
use std::process::Command;

use anyhow::{bail, Context, Result};

use super::{HarnessOptions, RunRequest, TestReport, TestRunner};

/// Runs the engine executable with the serialized log toggles and the
/// code/tests pair, reading a JSON report from its stdout.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    pub engine: PathBuf,
}

impl ProcessRunner {
    pub fn new(engine: impl Into<PathBuf>) -> Self {
        Self {
            engine: engine.into(),
        }
    }
}

impl TestRunner for ProcessRunner {
    fn run(&self, options: &HarnessOptions, request: &RunRequest) -> Result<TestReport> {
        let log = serde_json::to_string(&options.log).context("serialize log options")?;
        let output = Command::new(&self.engine)
            .arg("--log")
            .arg(log)
            .arg(&request.code)
            .arg(&request.tests)
            .output()
            .with_context(|| format!("spawn test engine {}", self.engine.display()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("engine exited with {}: {}", output.status, stderr.trim());
        }

        serde_json::from_slice(&output.stdout).context("parse engine report")
    }
}
