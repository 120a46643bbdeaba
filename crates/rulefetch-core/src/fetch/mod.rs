//! Dual-environment rule-list retrieval.
//!
//! Two explicit entry points, chosen by the caller: `fetch_remote` issues an
//! HTTP GET via the curl crate, `fetch_local` reads from the filesystem.
//! There is no scheme sniffing; the deployment target decides which one is
//! used. Both run blocking I/O on the current thread and come with async
//! wrappers that move the work to `spawn_blocking`.

mod error;
mod local;
mod parse;
mod remote;

pub use error::FetchError;
pub use local::{fetch_local, fetch_local_blocking};
pub use remote::{fetch_remote, fetch_remote_blocking};

use std::time::Duration;

/// Transport knobs for remote fetches. Defaults match the values in
/// `config.toml`'s own defaults.
#[derive(Debug, Clone, Copy)]
pub struct FetchOptions {
    /// TCP connect timeout.
    pub connect_timeout: Duration,
    /// Whole-request timeout.
    pub timeout: Duration,
    /// Redirect hops to follow before giving up.
    pub max_redirects: u32,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(15),
            timeout: Duration::from_secs(30),
            max_redirects: 10,
        }
    }
}
