//! CLI for the rulefetch rule-list retriever.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rulefetch_core::config;
use std::path::PathBuf;

use commands::{run_check, run_fetch, run_local};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "rulefetch")]
#[command(
    about = "rulefetch: fetch filter rule lists from a URL or the local filesystem",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch a rule list from a remote URL and print one rule per line.
    Fetch {
        /// Absolute HTTP/HTTPS URL of the rule list.
        url: String,
    },

    /// Read a rule list from a local file and print one rule per line.
    Local {
        /// File path, absolute or relative to --base-dir.
        path: String,

        /// Directory the path is resolved against (default: current directory).
        #[arg(long)]
        base_dir: Option<PathBuf>,
    },

    /// Run the external test engine once over a code/tests pair.
    Check {
        /// Path to the code under test.
        code: PathBuf,

        /// Path to the test file.
        tests: PathBuf,

        /// Engine executable (default: the [harness] entry in config.toml).
        #[arg(long)]
        engine: Option<PathBuf>,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Fetch { url } => run_fetch(&cfg, &url).await?,
            CliCommand::Local { path, base_dir } => run_local(&path, base_dir.as_deref()).await?,
            CliCommand::Check {
                code,
                tests,
                engine,
            } => run_check(&cfg, code, tests, engine)?,
        }

        Ok(())
    }
}
