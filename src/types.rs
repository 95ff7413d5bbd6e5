//! Core types and errors for the package cross-referencer.

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while auditing package lists.
#[derive(Error, Debug)]
pub enum PkgxrefError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("URL parse error: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PkgxrefError>;

/// Which install-script array a package name came from.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum PackageGroup {
    /// Listed in the official-repository array (`PAC_PKGS`).
    Official,
    /// Listed in the AUR array (`AUR_PKGS`).
    Aur,
}

/// A package name tagged with the array it was extracted from.
///
/// Names appearing in both arrays produce two independent entries;
/// the extractor never deduplicates.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PackageEntry {
    pub name: String,
    pub group: PackageGroup,
}

impl PackageEntry {
    pub fn new(name: impl Into<String>, group: PackageGroup) -> Self {
        Self {
            name: name.into(),
            group,
        }
    }
}

/// One resolved line of the report.
///
/// `official` and `aur` hold the location tag where the name was found
/// ("core/x86_64", "AUR") or the empty string. A failed lookup collapses
/// to the empty string as well; the report does not distinguish the two.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ReportRow {
    pub name: String,
    pub group: PackageGroup,
    pub official: String,
    pub aur: String,
}

/// Likely misclassifications computed over the full row set.
///
/// The lists preserve row order. A row lands in at most one list:
/// the two misplacement predicates are disjoint by group, and
/// `unresolved` requires both tags empty, which the other two exclude.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Diagnostics {
    /// In the official array but only resolvable via the AUR.
    pub misplaced_to_official: Vec<String>,
    /// In the AUR array but present in an official repository.
    pub misplaced_to_aur: Vec<String>,
    /// Found in neither lookup service.
    pub unresolved: Vec<String>,
}
