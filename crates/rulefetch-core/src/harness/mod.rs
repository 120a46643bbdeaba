//! One-shot bootstrap around an external test engine.
//!
//! Wires logging toggles and a blocked-too-long guard into a [`TestRunner`],
//! runs it once on a worker thread, and reports the outcome through a
//! conventional Result channel instead of a completion callback.

mod process;

pub use process::ProcessRunner;

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Per-concern logging toggles handed to the engine. Field names serialize
/// in the camelCase form the engine expects.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RunnerLog {
    /// Log an assertions overview.
    pub assertions: bool,
    /// Log expected and actual values for failed tests.
    pub errors: bool,
    /// Log a tests overview.
    pub tests: bool,
    /// Log a per-file summary.
    pub summary: bool,
    /// Log a summary across all files.
    pub global_summary: bool,
    /// Log coverage.
    pub coverage: bool,
    /// Log coverage across all files.
    pub global_coverage: bool,
    /// Log the file currently under test.
    pub testing: bool,
}

impl Default for RunnerLog {
    fn default() -> Self {
        Self {
            assertions: false,
            errors: true,
            tests: false,
            summary: true,
            global_summary: true,
            coverage: true,
            global_coverage: true,
            testing: false,
        }
    }
}

/// Engine configuration: logging toggles plus the blocked-too-long guard.
#[derive(Debug, Clone)]
pub struct HarnessOptions {
    pub log: RunnerLog,
    /// How long the engine may run without producing a result before the
    /// harness assumes an infinite loop in the code under test.
    pub max_block: Duration,
}

impl Default for HarnessOptions {
    fn default() -> Self {
        Self {
            log: RunnerLog::default(),
            max_block: Duration::from_secs(50),
        }
    }
}

/// The pair of paths handed to the engine.
#[derive(Debug, Clone)]
pub struct RunRequest {
    /// Code under test.
    pub code: PathBuf,
    /// Test file exercising it.
    pub tests: PathBuf,
}

/// A single failed test as reported by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestFailure {
    pub name: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Engine run report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestReport {
    pub total: u32,
    pub passed: u32,
    pub failed: u32,
    #[serde(default)]
    pub failures: Vec<TestFailure>,
}

/// External test-execution collaborator. The engine's own assertion and
/// reporting logic lives behind this seam.
pub trait TestRunner {
    fn run(&self, options: &HarnessOptions, request: &RunRequest) -> anyhow::Result<TestReport>;
}

#[derive(Debug, Error)]
pub enum HarnessError {
    /// Guard tripped: the engine produced nothing within the limit. The
    /// worker thread is left detached; its I/O is not stopped.
    #[error("test engine produced no result within {limit:?}; assuming an infinite loop")]
    Blocked { limit: Duration },
    /// The engine itself failed (spawn error, bad exit, unreadable report).
    #[error("test engine failed: {0:#}")]
    Engine(anyhow::Error),
    /// The harness ran already; it is one-shot and not reentrant.
    #[error("harness already ran")]
    Reentered,
}

/// One-shot harness. [`Harness::run`] may be called once per instance.
#[derive(Debug, Default)]
pub struct Harness {
    ran: AtomicBool,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            ran: AtomicBool::new(false),
        }
    }

    /// Runs the engine on a worker thread, waiting at most
    /// `options.max_block` for its result.
    pub fn run<R>(
        &self,
        runner: R,
        options: HarnessOptions,
        request: RunRequest,
    ) -> Result<TestReport, HarnessError>
    where
        R: TestRunner + Send + 'static,
    {
        if self.ran.swap(true, Ordering::SeqCst) {
            return Err(HarnessError::Reentered);
        }

        let limit = options.max_block;
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let _ = tx.send(runner.run(&options, &request));
        });

        match rx.recv_timeout(limit) {
            Ok(Ok(report)) => Ok(report),
            Ok(Err(e)) => Err(HarnessError::Engine(e)),
            Err(mpsc::RecvTimeoutError::Timeout) => Err(HarnessError::Blocked { limit }),
            Err(mpsc::RecvTimeoutError::Disconnected) => Err(HarnessError::Engine(
                anyhow::anyhow!("test engine worker exited without a result"),
            )),
        }
    }
}
