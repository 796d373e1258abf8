//! Split command implementation
//!
//! Processes each manifest independently: a failure in one dataset is
//! reported and does not abort the others.

use std::path::Path;

use crate::artifact::{ArtifactStore, SplitSummary};
use crate::cli::args::SplitArgs;
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::dataset::Table;
use crate::manifest::load_manifest;
use crate::split::{split_dataset, SplitOutcome};
use crate::Error;

pub fn run_split(args: SplitArgs, level: LogLevel) -> Result<(), String> {
    let store = ArtifactStore::new(&args.out_dir);
    let total = args.configs.len();
    let mut failed = 0;

    for config in &args.configs {
        if let Err(e) = process_dataset(config, &args, &store, level) {
            eprintln!("Error: {}: {e}", config.display());
            failed += 1;
        }
    }

    if failed > 0 {
        Err(format!("{failed} of {total} datasets failed"))
    } else {
        Ok(())
    }
}

fn process_dataset(
    config: &Path,
    args: &SplitArgs,
    store: &ArtifactStore,
    level: LogLevel,
) -> Result<(), Error> {
    let manifest = load_manifest(config)?;
    let overwrite = args.overwrite || manifest.overwrite;
    let seed = args.seed.unwrap_or_else(|| manifest.effective_seed());

    log(
        level,
        LogLevel::Normal,
        &format!("Dataset '{}' ({})", manifest.name, manifest.input.display()),
    );

    if !overwrite && store.is_cached(&manifest.name) {
        let summary = store.load_summary(&manifest.name)?;
        log(
            level,
            LogLevel::Normal,
            &format!(
                "  reusing cached artifacts in {}",
                store.dataset_dir(&manifest.name).display()
            ),
        );
        report_summary(&summary, level);
        return Ok(());
    }

    let table = Table::read(&manifest.input)?;
    log(
        level,
        LogLevel::Verbose,
        &format!("  read {} rows (seed {seed})", table.len()),
    );

    let outcome = split_dataset(&manifest, &table, seed)?;

    if args.dry_run {
        log(level, LogLevel::Normal, "  dry run: no artifacts written");
        report_outcome(&outcome, level);
        return Ok(());
    }

    let summary = store.write(&manifest, &table, &outcome, seed)?;
    report_summary(&summary, level);
    Ok(())
}

fn report_outcome(outcome: &SplitOutcome, level: LogLevel) {
    for split in &outcome.splits {
        log(level, LogLevel::Normal, &format!("  {}: {} rows", split.name, split.len()));
    }
    for tracking in &outcome.tracking {
        log(
            level,
            LogLevel::Normal,
            &format!("  tracking {}: {} rows", tracking.name, tracking.len()),
        );
    }
    log(
        level,
        LogLevel::Verbose,
        &format!(
            "  withheld: {}, unassigned: {}",
            outcome.withheld.len(),
            outcome.unassigned.len()
        ),
    );
}

fn report_summary(summary: &SplitSummary, level: LogLevel) {
    for entry in &summary.splits {
        log(level, LogLevel::Normal, &format!("  {}: {} rows", entry.name, entry.rows));
    }
    for entry in &summary.tracking {
        log(
            level,
            LogLevel::Normal,
            &format!("  tracking {}: {} rows", entry.name, entry.rows),
        );
    }
    log(
        level,
        LogLevel::Verbose,
        &format!(
            "  withheld: {}, unassigned: {}",
            summary.withheld_rows, summary.unassigned_rows
        ),
    );
}
