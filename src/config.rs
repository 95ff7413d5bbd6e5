//! Configuration handling for the auditor.

use crate::types::Result;
use clap::Parser;
use std::path::PathBuf;
use url::Url;

/// Default install script holding the package arrays.
pub const DEFAULT_SCRIPT: &str = "scripts/install.sh";

/// Array of packages expected in the official repositories.
pub const PAC_BLOCK: &str = "PAC_PKGS";

/// Array of packages expected in the AUR.
pub const AUR_BLOCK: &str = "AUR_PKGS";

/// archlinux.org search-by-name endpoint.
pub const OFFICIAL_URL: &str = "https://archlinux.org/packages/search/json/";

/// AUR RPC endpoint (v5 info queries).
pub const AUR_URL: &str = "https://aur.archlinux.org/rpc/";

/// Audits install-script package lists against the Arch repositories and the AUR.
#[derive(Parser, Debug, Clone)]
#[command(name = "pkgxref")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Install script containing the PAC_PKGS and AUR_PKGS arrays
    #[arg(default_value = DEFAULT_SCRIPT)]
    pub script: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Official package search endpoint
    #[arg(long, env = "PKGXREF_OFFICIAL_URL", default_value = OFFICIAL_URL)]
    pub official_url: String,

    /// AUR RPC endpoint
    #[arg(long, env = "PKGXREF_AUR_URL", default_value = AUR_URL)]
    pub aur_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value = "20")]
    pub timeout: u64,
}

impl Config {
    /// Reject base URLs reqwest could not build requests from.
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.official_url)?;
        Url::parse(&self.aur_url)?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            script: PathBuf::from(DEFAULT_SCRIPT),
            verbose: false,
            official_url: OFFICIAL_URL.to_string(),
            aur_url: AUR_URL.to_string(),
            timeout: 20,
        }
    }
}
