//! Dataset Splitting Engine
//!
//! Partitions a table's rows into named splits under three independent
//! passes: a withholding pass that excludes matching rows from every split,
//! a seeded shuffle-and-allocate pass over the remaining rows, and a
//! tracking pass that selects named overlapping views of the full row set.
//!
//! Exclusion (withholding) and inspection (tracking) are deliberately two
//! separate pure functions over the row set; neither sees the other's
//! output.
//!
//! # Example
//!
//! ```
//! use partir::dataset::Table;
//! use partir::manifest::{DatasetManifest, SplitShare};
//! use partir::split::split_dataset;
//!
//! let table = Table::parse("source\ttarget\na x\tA X\nb x\tB X\nc y\tC Y\nd y\tD Y\n")?;
//! let manifest = DatasetManifest {
//!     name: "demo".to_string(),
//!     input: "demo.tsv".into(),
//!     splits: vec![
//!         SplitShare { name: "train".to_string(), percent: 50 },
//!         SplitShare { name: "test".to_string(), percent: 50 },
//!     ],
//!     withholding: vec!["^b ".to_string()],
//!     ..Default::default()
//! };
//!
//! let outcome = split_dataset(&manifest, &table, 42)?;
//! assert_eq!(outcome.withheld.len(), 1);
//! assert_eq!(outcome.splits.len(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```


use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use regex::Regex;
use thiserror::Error;

use crate::dataset::Table;
use crate::manifest::{DatasetManifest, SplitShare, TrackingSpec, TransformField};

/// Regex compilation failure, reported with the offending field.
#[derive(Debug, Error)]
#[error("invalid pattern in {field}: '{pattern}': {source}")]
pub struct PatternError {
    /// Manifest field the pattern came from (`withholding[2]`, `tracking.foo`)
    pub field: String,
    /// The pattern text as written
    pub pattern: String,
    #[source]
    source: regex::Error,
}

/// Compile the withholding pattern list.
pub fn compile_withholding(patterns: &[String]) -> Result<Vec<Regex>, PatternError> {
    patterns
        .iter()
        .enumerate()
        .map(|(i, pattern)| {
            Regex::new(pattern).map_err(|source| PatternError {
                field: format!("withholding[{i}]"),
                pattern: pattern.clone(),
                source,
            })
        })
        .collect()
}

/// Compile the tracking pattern table, keeping declaration order.
pub fn compile_tracking(specs: &[TrackingSpec]) -> Result<Vec<(String, Regex)>, PatternError> {
    specs
        .iter()
        .map(|spec| {
            let regex = Regex::new(&spec.pattern).map_err(|source| PatternError {
                field: format!("tracking.{}", spec.name),
                pattern: spec.pattern.clone(),
                source,
            })?;
            Ok((spec.name.clone(), regex))
        })
        .collect()
}

/// A named, ordered selection of row indices into the source [`Table`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    /// Split or tracking-set name
    pub name: String,
    /// Row indices, in allocation (or input) order
    pub indices: Vec<usize>,
}

impl Split {
    /// Number of rows in this split.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether this split is empty.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Result of splitting one dataset.
#[derive(Debug, Clone)]
pub struct SplitOutcome {
    /// Standard splits, in declaration order
    pub splits: Vec<Split>,
    /// Tracking selections, in declaration order
    pub tracking: Vec<Split>,
    /// Rows excluded from every split by the withholding pass
    pub withheld: Vec<usize>,
    /// Eligible rows left unassigned because percentages summed below 100
    pub unassigned: Vec<usize>,
}

/// Partition row indices into `(withheld, eligible)` sets.
///
/// A row is withheld iff at least one pattern matches its transform-field
/// text. Union semantics: pattern order never affects membership.
pub fn partition_withheld(
    table: &Table,
    field: TransformField,
    patterns: &[Regex],
) -> (Vec<usize>, Vec<usize>) {
    let mut withheld = Vec::new();
    let mut eligible = Vec::new();
    for i in 0..table.len() {
        let text = table.field_text(i, field);
        if patterns.iter().any(|p| p.is_match(text)) {
            withheld.push(i);
        } else {
            eligible.push(i);
        }
    }
    (withheld, eligible)
}

/// Shuffle the eligible rows with a seeded RNG and allocate contiguous
/// shares in declaration order.
///
/// Per-split targets are `floor(eligible * percent / 100)`; the flooring
/// remainder (up to the total percentage requested) is assigned to the
/// first-declared split. When percentages sum below 100 the surplus rows
/// are returned as unassigned.
pub fn assign_splits(
    eligible: &[usize],
    shares: &[SplitShare],
    seed: u64,
) -> (Vec<Split>, Vec<usize>) {
    let mut order = eligible.to_vec();
    let mut rng = StdRng::seed_from_u64(seed);
    order.shuffle(&mut rng);

    let total = order.len();
    let percent_total: usize = shares.iter().map(|s| s.percent as usize).sum();
    let grand_target = total * percent_total / 100;

    let mut counts: Vec<usize> = shares.iter().map(|s| total * s.percent as usize / 100).collect();
    let floored: usize = counts.iter().sum();
    if let Some(first) = counts.first_mut() {
        *first += grand_target - floored;
    }

    let mut splits = Vec::with_capacity(shares.len());
    let mut cursor = 0;
    for (share, count) in shares.iter().zip(&counts) {
        splits.push(Split {
            name: share.name.clone(),
            indices: order[cursor..cursor + count].to_vec(),
        });
        cursor += count;
    }

    (splits, order[cursor..].to_vec())
}

/// Select the named tracking sets over the FULL row set.
///
/// Tracking is independent of withholding and split assignment: a withheld
/// row, or a row already placed in `test`, still lands in every tracking
/// set whose pattern matches it. Indices come back in input order.
pub fn select_tracking(
    table: &Table,
    field: TransformField,
    patterns: &[(String, Regex)],
) -> Vec<Split> {
    patterns
        .iter()
        .map(|(name, regex)| Split {
            name: name.clone(),
            indices: (0..table.len())
                .filter(|&i| regex.is_match(table.field_text(i, field)))
                .collect(),
        })
        .collect()
}

/// Split one dataset: withholding pass, seeded assignment, tracking pass.
pub fn split_dataset(
    manifest: &DatasetManifest,
    table: &Table,
    seed: u64,
) -> Result<SplitOutcome, PatternError> {
    let withholding = compile_withholding(&manifest.withholding)?;
    let tracking_patterns = compile_tracking(&manifest.tracking)?;

    let (withheld, eligible) = partition_withheld(table, manifest.transform_field, &withholding);
    let (splits, unassigned) = assign_splits(&eligible, &manifest.splits, seed);
    let tracking = select_tracking(table, manifest.transform_field, &tracking_patterns);

    Ok(SplitOutcome {
        splits,
        tracking,
        withheld,
        unassigned,
    })
}
