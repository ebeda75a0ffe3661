//! Symbol legend adapters: read and parse the reference parameter table.
//!
//! This crate is allowed to do filesystem IO. The legend is a
//! semicolon-delimited UTF-8 file (optionally starting with a byte-order
//! mark) with four positional columns per row: category label, symbol,
//! value, unit. Columns are matched by index, never by header name, because
//! the header text is encoded inconsistently in the source data; the first
//! row is always treated as a header and skipped.
//!
//! Callers that can operate degraded (the decode path) should map a
//! `LoadError` to `ReferenceTable::empty()` rather than aborting.

#![forbid(unsafe_code)]

mod parse;

use camino::Utf8Path;

pub use artidec_domain::model::{ReferenceEntry, ReferenceTable};
pub use parse::parse_legend;

/// Failure to produce a reference table from the legend source.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("read legend {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("parse legend: {0}")]
    Csv(#[from] csv::Error),

    #[error("legend row {row}: {got} columns, expected at least 3")]
    ShortRow { row: usize, got: usize },
}

/// Read and parse the legend file at `path`.
pub fn load_legend(path: &Utf8Path) -> Result<ReferenceTable, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_string(),
        source,
    })?;
    parse_legend(&text)
}
