//! Validate command implementation

use crate::cli::args::ValidateArgs;
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::manifest::{load_manifest, DatasetManifest};

/// Format the split table as a string
pub fn format_split_info(manifest: &DatasetManifest) -> String {
    let shares: Vec<String> = manifest
        .splits
        .iter()
        .map(|s| format!("{} {}%", s.name, s.percent))
        .collect();
    format!("  Splits: {} (total {}%)", shares.join(", "), manifest.percent_total())
}

/// Format the pattern configuration as a string
pub fn format_pattern_info(manifest: &DatasetManifest) -> String {
    let mut lines = vec![format!("  Transform field: {:?}", manifest.transform_field)];
    if manifest.withholding.is_empty() {
        lines.push("  Withholding: none".to_string());
    } else {
        lines.push(format!("  Withholding: {} patterns", manifest.withholding.len()));
        for pattern in &manifest.withholding {
            lines.push(format!("    - '{pattern}'"));
        }
    }
    if !manifest.tracking.is_empty() {
        lines.push(format!("  Tracking: {} sets", manifest.tracking.len()));
        for spec in &manifest.tracking {
            lines.push(format!("    {} <- '{}'", spec.name, spec.pattern));
        }
    }
    lines.join("\n")
}

/// Print the full manifest summary
pub fn print_detailed_summary(manifest: &DatasetManifest, level: LogLevel) {
    log(level, LogLevel::Normal, &format!("  Input: {}", manifest.input.display()));
    log(level, LogLevel::Normal, &format!("  Seed: {}", manifest.effective_seed()));
    log(level, LogLevel::Normal, &format_split_info(manifest));
    log(level, LogLevel::Normal, &format_pattern_info(manifest));
}

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<(), String> {
    let total = args.configs.len();
    let mut failed = 0;

    for config in &args.configs {
        match load_manifest(config) {
            Ok(manifest) => {
                log(
                    level,
                    LogLevel::Normal,
                    &format!("{}: OK ('{}')", config.display(), manifest.name),
                );
                if args.detailed {
                    print_detailed_summary(&manifest, level);
                }
            }
            Err(e) => {
                eprintln!("{}: {e}", config.display());
                failed += 1;
            }
        }
    }

    if failed > 0 {
        Err(format!("{failed} of {total} manifests invalid"))
    } else {
        Ok(())
    }
}
