//! Local rule-list read: blocking filesystem access behind the async boundary.

use std::fs;
use std::path::{Path, PathBuf};

use crate::rules::{self, RuleSet};

use super::FetchError;

/// Reads a rule list from `path`, resolved against `base` when one is given.
/// An absolute `path` ignores `base` (platform join semantics); with no base
/// the path is taken relative to the process current directory.
///
/// Any read failure surfaces as [`FetchError::Read`]; there is no
/// partial-read recovery.
pub fn fetch_local_blocking(path: &str, base: Option<&Path>) -> Result<RuleSet, FetchError> {
    let resolved: PathBuf = match base {
        Some(base) => base.join(path),
        None => PathBuf::from(path),
    };
    let text = fs::read_to_string(&resolved).map_err(FetchError::Read)?;
    Ok(rules::split_rules(&text))
}

/// Async wrapper over [`fetch_local_blocking`]. The read itself stays
/// blocking; only the interface is deferred.
pub async fn fetch_local(path: &str, base: Option<&Path>) -> Result<RuleSet, FetchError> {
    let path = path.to_string();
    let base = base.map(Path::to_path_buf);
    tokio::task::spawn_blocking(move || fetch_local_blocking(&path, base.as_deref()))
        .await
        .unwrap_or_else(|e| panic!("read task panicked: {e}"))
}
