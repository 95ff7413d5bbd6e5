//! pkgxref - Install-script package list auditor.
//!
//! This library cross-references the package arrays of an install script
//! against two lookup services by:
//! - Extracting the `PAC_PKGS` and `AUR_PKGS` arrays from the script
//! - Resolving each name through the official package search and the AUR RPC
//! - Classifying names that resolve somewhere other than their list implies
//!
//! # Example
//!
//! ```no_run
//! use pkgxref::config::Config;
//! use pkgxref::reconcile::{classify, Reconciler};
//! use pkgxref::types::{PackageEntry, PackageGroup};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Config::default();
//!     let reconciler = Reconciler::new(&config).unwrap();
//!     let entries = vec![PackageEntry::new("git", PackageGroup::Official)];
//!     let rows = reconciler.reconcile(&entries).await;
//!     let diagnostics = classify(&rows);
//!     println!("{} unresolved", diagnostics.unresolved.len());
//! }
//! ```

pub mod config;
pub mod extract;
pub mod reconcile;
pub mod registry;
pub mod report;
pub mod types;

pub use config::Config;
pub use reconcile::{classify, Reconciler};
pub use types::{
    Diagnostics, PackageEntry, PackageGroup, PkgxrefError, ReportRow, Result,
};
