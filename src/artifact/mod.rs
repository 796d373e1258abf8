//! Artifact Persistence
//!
//! Writes one TSV artifact per split and per tracking set under
//! `<root>/<dataset-name>/`, plus a `summary.json` sidecar recording counts,
//! the seed, and a SHA-256 fingerprint of the input table. The sidecar is
//! also the cache marker for the overwrite policy: when a manifest has
//! `overwrite: false` and a summary exists, prior artifacts are reused
//! unchanged and nothing is recomputed.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::dataset::Table;
use crate::manifest::DatasetManifest;
use crate::split::{Split, SplitOutcome};

/// File name of the per-dataset summary sidecar.
pub const SUMMARY_FILE: &str = "summary.json";

/// Artifact persistence errors
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no cached summary for dataset '{0}'")]
    MissingSummary(String),
}

/// Result alias for artifact operations
pub type Result<T> = std::result::Result<T, ArtifactError>;

/// One persisted split or tracking artifact, as recorded in the summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactEntry {
    /// Split or tracking-set name
    pub name: String,
    /// Number of rows in the artifact
    pub rows: usize,
    /// Artifact file name, relative to the dataset directory
    pub file: String,
}

/// Persisted record of one splitting run.
///
/// Serves as the cache key object for the overwrite policy and as the data
/// behind `partir info`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitSummary {
    /// Dataset name (keys the artifact directory)
    pub name: String,
    /// Seed the shuffle ran with
    pub seed: u64,
    /// Opaque offset carried over from the manifest
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// Input table path as declared in the manifest
    pub input: PathBuf,
    /// SHA-256 of the input table bytes at split time
    pub input_sha256: String,
    /// Total rows read from the input
    pub total_rows: usize,
    /// Rows excluded by the withholding pass
    pub withheld_rows: usize,
    /// Eligible rows left unassigned (percentages summed below 100)
    pub unassigned_rows: usize,
    /// Standard split artifacts, in declaration order
    pub splits: Vec<ArtifactEntry>,
    /// Tracking artifacts, in declaration order
    pub tracking: Vec<ArtifactEntry>,
    /// When the artifacts were produced
    pub created_at: DateTime<Utc>,
}

/// SHA-256 fingerprint of a file's bytes, hex-encoded.
pub fn fingerprint(path: impl AsRef<Path>) -> Result<String> {
    let bytes = fs::read(path)?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(format!("{:x}", hasher.finalize()))
}

/// On-disk store for split artifacts, rooted at an output directory.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    /// Create a store rooted at `root`. The directory is created lazily on
    /// first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory holding one dataset's artifacts.
    pub fn dataset_dir(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Path of a dataset's summary sidecar.
    pub fn summary_path(&self, name: &str) -> PathBuf {
        self.dataset_dir(name).join(SUMMARY_FILE)
    }

    /// Whether cached artifacts exist for this dataset name.
    pub fn is_cached(&self, name: &str) -> bool {
        self.summary_path(name).is_file()
    }

    /// Load the cached summary for this dataset name.
    pub fn load_summary(&self, name: &str) -> Result<SplitSummary> {
        let path = self.summary_path(name);
        if !path.is_file() {
            return Err(ArtifactError::MissingSummary(name.to_string()));
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Write all artifacts for one splitting run, replacing any stale ones,
    /// and return the persisted summary.
    pub fn write(
        &self,
        manifest: &DatasetManifest,
        table: &Table,
        outcome: &SplitOutcome,
        seed: u64,
    ) -> Result<SplitSummary> {
        let dir = self.dataset_dir(&manifest.name);
        if dir.exists() {
            fs::remove_dir_all(&dir)?;
        }
        fs::create_dir_all(&dir)?;

        let splits = self.write_family(&dir, table, &outcome.splits)?;
        let tracking = self.write_family(&dir, table, &outcome.tracking)?;

        let summary = SplitSummary {
            name: manifest.name.clone(),
            seed,
            offset: manifest.offset,
            input: manifest.input.clone(),
            input_sha256: fingerprint(&manifest.input)?,
            total_rows: table.len(),
            withheld_rows: outcome.withheld.len(),
            unassigned_rows: outcome.unassigned.len(),
            splits,
            tracking,
            created_at: Utc::now(),
        };

        let json = serde_json::to_string_pretty(&summary)?;
        let mut file = File::create(dir.join(SUMMARY_FILE))?;
        file.write_all(json.as_bytes())?;

        Ok(summary)
    }

    fn write_family(
        &self,
        dir: &Path,
        table: &Table,
        family: &[Split],
    ) -> Result<Vec<ArtifactEntry>> {
        family
            .iter()
            .map(|split| {
                let file_name = format!("{}.tsv", split.name);
                let mut data = table.header_line();
                data.push('\n');
                for &i in &split.indices {
                    data.push_str(&table.row_line(i));
                    data.push('\n');
                }
                let mut file = File::create(dir.join(&file_name))?;
                file.write_all(data.as_bytes())?;
                Ok(ArtifactEntry {
                    name: split.name.clone(),
                    rows: split.len(),
                    file: file_name,
                })
            })
            .collect()
    }
}
