//! Remote package lookup module.
//!
//! One checker per lookup service: the official archlinux.org package
//! search and the AUR RPC interface. Both return `Ok(None)` for a clean
//! miss and `Err` for any transport or parse failure; the caller decides
//! how to collapse the two.

pub mod aur;
pub mod official;

pub use aur::AurChecker;
pub use official::OfficialChecker;

use crate::types::Result;
use reqwest::Client;
use std::time::Duration;

/// Build the shared HTTP client shape for both checkers.
///
/// Pooling is disabled: each lookup opens and closes its own connection.
pub(crate) fn build_client(timeout_secs: u64) -> Result<Client> {
    Ok(Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent("pkgxref/0.1")
        .pool_max_idle_per_host(0)
        .build()?)
}
