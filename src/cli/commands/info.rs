//! Info command implementation

use crate::artifact::{fingerprint, ArtifactStore};
use crate::cli::args::InfoArgs;
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::manifest::load_manifest;

use super::validate::print_detailed_summary;

pub fn run_info(args: InfoArgs, level: LogLevel) -> Result<(), String> {
    let manifest = load_manifest(&args.config).map_err(|e| e.to_string())?;

    log(level, LogLevel::Normal, &format!("Dataset '{}'", manifest.name));
    print_detailed_summary(&manifest, level);

    let store = ArtifactStore::new(&args.out_dir);
    if !store.is_cached(&manifest.name) {
        log(
            level,
            LogLevel::Normal,
            &format!("  Artifacts: none in {}", store.dataset_dir(&manifest.name).display()),
        );
        return Ok(());
    }

    let summary = store.load_summary(&manifest.name).map_err(|e| e.to_string())?;
    log(
        level,
        LogLevel::Normal,
        &format!("  Artifacts: {} (created {})", store.dataset_dir(&manifest.name).display(), summary.created_at),
    );
    log(
        level,
        LogLevel::Normal,
        &format!("    Seed: {}, total rows: {}", summary.seed, summary.total_rows),
    );
    for entry in summary.splits.iter().chain(&summary.tracking) {
        log(
            level,
            LogLevel::Normal,
            &format!("    {}: {} rows ({})", entry.name, entry.rows, entry.file),
        );
    }
    log(
        level,
        LogLevel::Verbose,
        &format!(
            "    withheld: {}, unassigned: {}",
            summary.withheld_rows, summary.unassigned_rows
        ),
    );

    match fingerprint(&manifest.input) {
        Ok(current) if current == summary.input_sha256 => {
            log(level, LogLevel::Normal, "    Input: unchanged since split");
        }
        Ok(_) => {
            log(
                level,
                LogLevel::Normal,
                "    Input: CHANGED since split (rerun with --overwrite)",
            );
        }
        Err(_) => {
            log(level, LogLevel::Normal, "    Input: no longer readable");
        }
    }

    Ok(())
}
