//! Reconciliation of extracted package lists against both lookup services.

use crate::config::Config;
use crate::registry::{AurChecker, OfficialChecker};
use crate::types::{Diagnostics, PackageEntry, PackageGroup, ReportRow, Result};
use tracing::debug;

/// Drives both checkers over the combined package list.
pub struct Reconciler {
    official: OfficialChecker,
    aur: AurChecker,
}

impl Reconciler {
    /// Create a reconciler from the runtime configuration.
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_endpoints(&config.official_url, &config.aur_url, config.timeout)
    }

    /// Create a reconciler against explicit endpoints.
    pub fn with_endpoints(official_url: &str, aur_url: &str, timeout_secs: u64) -> Result<Self> {
        Ok(Self {
            official: OfficialChecker::new(official_url, timeout_secs)?,
            aur: AurChecker::new(aur_url, timeout_secs)?,
        })
    }

    /// Resolve every entry, in order, into one report row.
    ///
    /// Lookups run strictly serially. A failed lookup collapses to the
    /// empty tag and never aborts the run; from the report's point of
    /// view an unreachable service and a missing package read the same.
    pub async fn reconcile(&self, entries: &[PackageEntry]) -> Vec<ReportRow> {
        let mut rows = Vec::with_capacity(entries.len());

        for entry in entries {
            let official = collapse(self.official.lookup(&entry.name).await, &entry.name);
            let aur = collapse(self.aur.lookup(&entry.name).await, &entry.name);

            rows.push(ReportRow {
                name: entry.name.clone(),
                group: entry.group,
                official,
                aur,
            });
        }

        rows
    }
}

/// Collapse a lookup outcome to its tag, swallowing failures.
fn collapse(outcome: Result<Option<String>>, name: &str) -> String {
    match outcome {
        Ok(Some(tag)) => tag,
        Ok(None) => String::new(),
        Err(e) => {
            debug!("Lookup failed for {}: {}", name, e);
            String::new()
        }
    }
}

/// Scan the full row set for likely misclassifications.
pub fn classify(rows: &[ReportRow]) -> Diagnostics {
    let mut diagnostics = Diagnostics::default();

    for row in rows {
        match row.group {
            PackageGroup::Official if row.official.is_empty() && !row.aur.is_empty() => {
                diagnostics.misplaced_to_official.push(row.name.clone());
            }
            PackageGroup::Aur if !row.official.is_empty() => {
                diagnostics.misplaced_to_aur.push(row.name.clone());
            }
            _ => {}
        }

        if row.official.is_empty() && row.aur.is_empty() {
            diagnostics.unresolved.push(row.name.clone());
        }
    }

    diagnostics
}
