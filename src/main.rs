//! pkgxref - Install-script package list auditor.
//!
//! CLI entry point.

use clap::Parser;
use pkgxref::config::{AUR_BLOCK, PAC_BLOCK};
use pkgxref::{classify, extract, report, Config, PackageEntry, PackageGroup, Reconciler, Result};
use std::io;
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::parse();

    // Set up logging
    let filter = if config.verbose {
        EnvFilter::new("pkgxref=debug,info")
    } else {
        EnvFilter::new("pkgxref=info,warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    match run(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &Config) -> Result<()> {
    config.validate()?;

    let document = extract::load_document(&config.script)?;
    let pac = extract::parse_array(&document, PAC_BLOCK);
    let aur = extract::parse_array(&document, AUR_BLOCK);
    debug!(
        "Extracted {} official and {} AUR names from {}",
        pac.len(),
        aur.len(),
        config.script.display()
    );

    let entries: Vec<PackageEntry> = pac
        .into_iter()
        .map(|name| PackageEntry::new(name, PackageGroup::Official))
        .chain(
            aur.into_iter()
                .map(|name| PackageEntry::new(name, PackageGroup::Aur)),
        )
        .collect();

    let reconciler = Reconciler::new(config)?;
    let rows = reconciler.reconcile(&entries).await;
    let diagnostics = classify(&rows);

    let stdout = io::stdout();
    report::write_report(&mut stdout.lock(), &rows, &diagnostics)?;

    Ok(())
}
