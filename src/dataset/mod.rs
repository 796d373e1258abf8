//! Tabular Dataset Model
//!
//! Reads a whole tab-separated table into memory: a header line naming the
//! columns, then one example per line. `source` and `target` columns are
//! required, a `transform` column is recognized when present, and any other
//! columns are preserved verbatim so written artifacts reproduce their rows
//! byte-for-byte.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::manifest::TransformField;

/// Column name for the example source text.
pub const SOURCE_COLUMN: &str = "source";
/// Column name for the example target text.
pub const TARGET_COLUMN: &str = "target";
/// Optional column carrying the transformation annotation.
pub const TRANSFORM_COLUMN: &str = "transform";

/// Input table errors
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read input table {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("input table is missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("input table has a header but no data rows")]
    Empty,

    #[error("line {line}: expected {expected} fields, found {found}")]
    Malformed {
        line: usize,
        expected: usize,
        found: usize,
    },
}

/// One example read from the input table. Immutable once read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    cells: Vec<String>,
}

impl Row {
    /// Raw cells in input column order.
    pub fn cells(&self) -> &[String] {
        &self.cells
    }
}

/// An in-memory tab-separated table with header-addressed columns.
#[derive(Debug, Clone)]
pub struct Table {
    header: Vec<String>,
    source_idx: usize,
    target_idx: usize,
    transform_idx: Option<usize>,
    rows: Vec<Row>,
}

impl Table {
    /// Read a table from a TSV file.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| DataError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parse a table from TSV text. The first line is the header.
    pub fn parse(content: &str) -> Result<Self, DataError> {
        let mut lines = content.lines();
        let header: Vec<String> = lines
            .next()
            .unwrap_or_default()
            .split('\t')
            .map(str::to_string)
            .collect();

        let position = |name: &'static str| {
            header
                .iter()
                .position(|h| h == name)
                .ok_or(DataError::MissingColumn(name))
        };
        let source_idx = position(SOURCE_COLUMN)?;
        let target_idx = position(TARGET_COLUMN)?;
        let transform_idx = header.iter().position(|h| h == TRANSFORM_COLUMN);

        let mut rows = Vec::new();
        for (line_no, line) in lines.enumerate() {
            if line.is_empty() {
                continue;
            }
            let cells: Vec<String> = line.split('\t').map(str::to_string).collect();
            if cells.len() != header.len() {
                return Err(DataError::Malformed {
                    // 1-based, counting the header line
                    line: line_no + 2,
                    expected: header.len(),
                    found: cells.len(),
                });
            }
            rows.push(Row { cells });
        }

        if rows.is_empty() {
            return Err(DataError::Empty);
        }

        Ok(Self {
            header,
            source_idx,
            target_idx,
            transform_idx,
            rows,
        })
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows. Never true for a parsed table.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows, in input order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Column names, in input order.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// The header as a tab-joined line.
    pub fn header_line(&self) -> String {
        self.header.join("\t")
    }

    /// Row `i` as a tab-joined line, byte-identical to its input line.
    pub fn row_line(&self, i: usize) -> String {
        self.rows[i].cells.join("\t")
    }

    /// Source text of row `i`.
    pub fn source(&self, i: usize) -> &str {
        &self.rows[i].cells[self.source_idx]
    }

    /// Target text of row `i`.
    pub fn target(&self, i: usize) -> &str {
        &self.rows[i].cells[self.target_idx]
    }

    /// Transform annotation of row `i`, when the table carries one.
    pub fn transform(&self, i: usize) -> Option<&str> {
        self.transform_idx.map(|idx| self.rows[i].cells[idx].as_str())
    }

    /// Text of row `i` in the designated transform field.
    pub fn field_text(&self, i: usize, field: TransformField) -> &str {
        match field {
            TransformField::Source => self.source(i),
            TransformField::Target => self.target(i),
        }
    }
}
