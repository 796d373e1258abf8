//! Dataset Manifest Schema
//!
//! Defines the declarative YAML manifest that describes one dataset: where
//! its table lives, how it is split, and which rows are withheld or tracked.
//! Manifests are validated at load time, not at use time.

mod ordered;
pub mod templates;
pub mod validation;


use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use validation::{validate_manifest, ManifestError};

/// Default random seed when a manifest omits `seed`.
pub const DEFAULT_SEED: u64 = 42;

/// Shape of the source or target column text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SequenceFormat {
    /// Flat token sequence
    #[default]
    Sequence,
    /// Bracketed tree serialization
    Tree,
}

/// Column against which withholding and tracking patterns are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformField {
    /// Match against the `source` column
    #[default]
    Source,
    /// Match against the `target` column
    Target,
}

/// One named share of the eligible rows.
///
/// Declaration order is semantic: shares are allocated in order, and the
/// flooring remainder goes to the first-declared share.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitShare {
    /// Split name (`train`, `test`, `val`, ...)
    pub name: String,
    /// Integer percentage of eligible rows
    pub percent: u8,
}

/// One named tracking selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingSpec {
    /// Tracking-set name
    pub name: String,
    /// Regex applied to the transform-field text
    pub pattern: String,
}

/// Complete dataset manifest (root structure)
///
/// # Required Fields
/// - `name`: Dataset identifier, keys all artifacts
/// - `input`: Path to the source TSV table
/// - `splits`: Ordered mapping of split name to integer percentage
///
/// Unknown fields are ignored; optional fields default as documented.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetManifest {
    /// Dataset identifier (required)
    pub name: String,

    /// Path to the source table (required)
    pub input: PathBuf,

    /// Source column shape
    #[serde(default)]
    pub source_format: SequenceFormat,

    /// Target column shape
    #[serde(default)]
    pub target_format: SequenceFormat,

    /// Recompute splits even when cached artifacts exist
    #[serde(default)]
    pub overwrite: bool,

    /// Column that withholding/tracking patterns match against
    #[serde(default)]
    pub transform_field: TransformField,

    /// Opaque annotation offset, persisted for downstream consumers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,

    /// Random seed for the split shuffle (defaults to [`DEFAULT_SEED`])
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Ordered split shares; percentages sum to at most 100
    #[serde(with = "ordered::split_table")]
    pub splits: Vec<SplitShare>,

    /// Patterns whose matches are excluded from every split (union semantics)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub withholding: Vec<String>,

    /// Ordered tracking selections, evaluated over the full row set
    #[serde(
        default,
        with = "ordered::tracking_table",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub tracking: Vec<TrackingSpec>,
}

impl DatasetManifest {
    /// Effective seed for the split shuffle.
    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or(DEFAULT_SEED)
    }

    /// Sum of the declared split percentages.
    pub fn percent_total(&self) -> u32 {
        self.splits.iter().map(|s| u32::from(s.percent)).sum()
    }
}

/// Load and validate a dataset manifest from a YAML file.
///
/// Fails if the file is unreadable, does not deserialize, or violates any
/// manifest invariant (see [`validate_manifest`]).
pub fn load_manifest(path: impl AsRef<Path>) -> Result<DatasetManifest, ManifestError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ManifestError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let manifest: DatasetManifest =
        serde_yaml::from_str(&content).map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    validate_manifest(&manifest)?;
    Ok(manifest)
}
