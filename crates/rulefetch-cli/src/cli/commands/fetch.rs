//! `rulefetch fetch <url>` – fetch a remote rule list.

use anyhow::Result;
use rulefetch_core::config::RulefetchConfig;
use rulefetch_core::fetch;

pub async fn run_fetch(cfg: &RulefetchConfig, url: &str) -> Result<()> {
    let rules = fetch::fetch_remote(url, cfg.fetch_options()).await?;
    tracing::info!("fetched {} rule(s) from {}", rules.len(), url);
    for rule in &rules {
        println!("{rule}");
    }
    Ok(())
}
