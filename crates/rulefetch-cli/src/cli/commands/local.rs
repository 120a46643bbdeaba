//! `rulefetch local <path>` – read a rule list from the filesystem.

use anyhow::Result;
use rulefetch_core::fetch;
use std::path::Path;

pub async fn run_local(path: &str, base_dir: Option<&Path>) -> Result<()> {
    let rules = fetch::fetch_local(path, base_dir).await?;
    tracing::info!("read {} rule(s) from {}", rules.len(), path);
    for rule in &rules {
        println!("{rule}");
    }
    Ok(())
}
