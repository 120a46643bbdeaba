//! Logging init: file under the XDG state dir, or stderr when that fails.

use anyhow::Result;
use std::fs::{self, File};
use std::io::{self, Write};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,rulefetch=debug";

/// Where a log line ends up: the shared file handle, or stderr when cloning
/// the handle fails mid-run.
enum LogSink {
    File(File),
    Stderr,
}

impl Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            LogSink::File(f) => f.write(buf),
            LogSink::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            LogSink::File(f) => f.flush(),
            LogSink::Stderr => io::stderr().lock().flush(),
        }
    }
}

struct FileWriter(File);

impl<'a> MakeWriter<'a> for FileWriter {
    type Writer = LogSink;

    fn make_writer(&'a self) -> LogSink {
        self.0
            .try_clone()
            .map(LogSink::File)
            .unwrap_or(LogSink::Stderr)
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize structured logging to `~/.local/state/rulefetch/rulefetch.log`.
/// Returns Err when the state dir is unusable so the caller can fall back to
/// [`init_logging_stderr`].
pub fn init_logging() -> Result<()> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("rulefetch")?;
    let log_dir = xdg_dirs.get_state_home();
    fs::create_dir_all(&log_dir)?;
    let path = log_dir.join("rulefetch.log");

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(FileWriter(file))
        .with_ansi(false)
        .init();

    tracing::info!("rulefetch logging initialized at {}", path.display());

    Ok(())
}

/// Stderr-only logging for when the log file cannot be opened.
pub fn init_logging_stderr() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}
