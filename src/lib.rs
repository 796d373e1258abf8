//! Partir - Deterministic Dataset Splitting
//!
//! Partir turns a declarative YAML manifest into reproducible dataset splits.
//! Each manifest names an input TSV table, an ordered set of percentage
//! shares, and optional regex-driven withholding and tracking selections.
//! Rows are shuffled with a seeded RNG, so the same manifest and seed always
//! produce the same artifacts.
//!
//! # Pipeline
//!
//! 1. [`manifest`] loads and validates the YAML manifest
//! 2. [`dataset`] reads the input table into memory
//! 3. [`split`] withholds, shuffles, and assigns rows
//! 4. [`artifact`] persists one TSV per split plus a JSON summary
//!
//! The [`cli`] module wires these stages into the `partir` binary.
//!
//! # Example
//!
//! ```
//! use partir::dataset::Table;
//! use partir::manifest::{DatasetManifest, SplitShare};
//! use partir::split::split_dataset;
//!
//! let table = Table::parse("source\ttarget\na 0\tA 0\na 1\tA 1\na 2\tA 2\na 3\tA 3\na 4\tA 4")
//!     .unwrap();
//! let manifest = DatasetManifest {
//!     name: "demo".to_string(),
//!     splits: vec![
//!         SplitShare { name: "train".to_string(), percent: 80 },
//!         SplitShare { name: "test".to_string(), percent: 20 },
//!     ],
//!     ..Default::default()
//! };
//!
//! let outcome = split_dataset(&manifest, &table, 42).unwrap();
//! assert_eq!(outcome.splits[0].len(), 4);
//! assert_eq!(outcome.splits[1].len(), 1);
//! ```

pub mod artifact;
pub mod cli;
pub mod dataset;
pub mod manifest;
pub mod split;

use thiserror::Error;

/// Top-level error type covering every pipeline stage.
#[derive(Debug, Error)]
pub enum Error {
    /// Manifest loading or validation failed
    #[error(transparent)]
    Manifest(#[from] manifest::ManifestError),

    /// A withholding or tracking regex did not compile
    #[error(transparent)]
    Pattern(#[from] split::PatternError),

    /// The input table could not be read or parsed
    #[error(transparent)]
    Data(#[from] dataset::DataError),

    /// Artifact persistence failed
    #[error(transparent)]
    Artifact(#[from] artifact::ArtifactError),
}

/// Result alias for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;
