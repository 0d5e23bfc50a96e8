//! # Alembic - DrugBank XML distiller
//!
//! Streams a (possibly multi-gigabyte) DrugBank XML dump one `<drug>`
//! element at a time and decomposes every record into a fixed set of
//! normalized relations — entity tables plus `-join` edge tables — each
//! serialized as newline-delimited JSON, ready for bulk loading into a
//! graph or relational store.
//!
//! ## Modules
//!
//! - **model**: the typed shape of one drug record and its sub-structures
//! - **stream**: per-record streaming decode plus the counting pre-pass
//! - **flatten**: fan one record out into per-relation rows
//! - **sink**: accumulate rows and write one file per relation
//! - **upload**: bulk-load boundary stub (nodes before edges)
//!
//! ## Quick Start
//!
//! ```no_run
//! use alembic::{extract_to_dir, ExtractOptions};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), alembic::PipelineError> {
//! let summary = extract_to_dir(
//!     Path::new("drugbank.xml"),
//!     Path::new("out"),
//!     &ExtractOptions::default(),
//! )?;
//! println!("{} drugs -> {} rows", summary.drugs, summary.rows);
//! # Ok(())
//! # }
//! ```

use std::path::Path;

pub mod error;
pub mod flatten;
pub mod model;
pub mod sink;
pub mod stream;
pub mod upload;

// Re-export commonly used types for convenience
pub use error::{DecodeError, PipelineError};
pub use flatten::{flatten_drug, TableBatch, RELATIONS};
pub use model::Drug;
pub use sink::TableSink;
pub use stream::{count_drug_records, DrugStream};

/// Knobs for one extraction run.
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Stop after the first N records; `None` processes the whole
    /// document. Applied as a sequence-level `take`, so nothing past the
    /// Nth record's closing boundary is read.
    pub limit: Option<usize>,
}

/// What one extraction run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractSummary {
    /// Records decoded.
    pub drugs: usize,
    /// Rows emitted across every relation.
    pub rows: usize,
}

/// Main entry point: decode, flatten and write the whole document.
///
/// Single ordered pass; the first decode failure aborts the run before
/// any relation file is written.
pub fn extract_to_dir(
    input: &Path,
    output_dir: &Path,
    options: &ExtractOptions,
) -> Result<ExtractSummary, PipelineError> {
    let stream = DrugStream::open(input)?;
    let mut sink = TableSink::new();

    let limit = options.limit.unwrap_or(usize::MAX);
    for result in stream.take(limit) {
        let drug = result?;
        sink.absorb(flatten_drug(&drug));
    }
    sink.write_to_dir(output_dir)?;

    Ok(ExtractSummary {
        drugs: sink.records(),
        rows: sink.row_count(),
    })
}
