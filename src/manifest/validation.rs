//! Manifest Validation
//!
//! Schema validation catches errors at load time, not at split time. Every
//! rejected manifest names the offending field so the failure is actionable
//! from the CLI output alone.

use std::collections::HashSet;
use std::path::PathBuf;

use thiserror::Error;

use crate::split::{compile_tracking, compile_withholding, PatternError};

use super::DatasetManifest;

/// Manifest validation and loading errors
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read manifest {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse manifest {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("empty required field: {0}")]
    EmptyRequiredField(String),

    #[error("no splits declared")]
    NoSplits,

    #[error("split '{0}' declares a zero percentage")]
    ZeroPercent(String),

    #[error("split '{0}' declared more than once")]
    DuplicateSplit(String),

    #[error("tracking set '{0}' declared more than once")]
    DuplicateTracking(String),

    #[error("split percentages sum to {sum} (expected at most 100)")]
    PercentSumTooLarge { sum: u32 },

    #[error("'{0}' names both a split and a tracking set")]
    NameCollision(String),

    #[error(transparent)]
    Pattern(#[from] PatternError),
}

/// Validate a dataset manifest
///
/// Checks, in order:
/// 1. `name` is non-empty
/// 2. at least one split, no zero shares, no duplicate names
/// 3. split percentages sum to at most 100
/// 4. tracking names are unique and do not collide with split names
///    (both families persist to `<name>.tsv` under the same directory)
/// 5. every withholding and tracking pattern compiles
pub fn validate_manifest(manifest: &DatasetManifest) -> Result<(), ManifestError> {
    if manifest.name.trim().is_empty() {
        return Err(ManifestError::EmptyRequiredField("name".to_string()));
    }
    if manifest.input.as_os_str().is_empty() {
        return Err(ManifestError::EmptyRequiredField("input".to_string()));
    }

    if manifest.splits.is_empty() {
        return Err(ManifestError::NoSplits);
    }

    let mut split_names = HashSet::new();
    for share in &manifest.splits {
        if share.percent == 0 {
            return Err(ManifestError::ZeroPercent(share.name.clone()));
        }
        if !split_names.insert(share.name.as_str()) {
            return Err(ManifestError::DuplicateSplit(share.name.clone()));
        }
    }

    let sum = manifest.percent_total();
    if sum > 100 {
        return Err(ManifestError::PercentSumTooLarge { sum });
    }

    let mut tracking_names = HashSet::new();
    for spec in &manifest.tracking {
        if !tracking_names.insert(spec.name.as_str()) {
            return Err(ManifestError::DuplicateTracking(spec.name.clone()));
        }
        if split_names.contains(spec.name.as_str()) {
            return Err(ManifestError::NameCollision(spec.name.clone()));
        }
    }

    compile_withholding(&manifest.withholding)?;
    compile_tracking(&manifest.tracking)?;

    Ok(())
}
