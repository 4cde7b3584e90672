// src/lib.rs
pub mod annotations;
pub mod discover;
pub mod error;
pub mod join;
pub mod orf_key;
pub mod pathways;
pub mod report;
pub mod rpkm;
pub mod types;

use std::path::{Path, PathBuf};

use crate::discover::{discover_triples, FileSuffixes};
use crate::error::AnnotateError;
use crate::join::{run_batch, BatchReport};
use crate::report::write_report;

/// Default output filename when the caller does not supply one.
pub const DEFAULT_OUTPUT_FILENAME: &str = "pwy_anno.tsv";

/// Configuration for one batch run.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub output_path: PathBuf,
    pub separator: char,
    pub suffixes: FileSuffixes,
}

impl Default for BatchOptions {
    fn default() -> Self {
        BatchOptions {
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILENAME),
            separator: '\t',
            suffixes: FileSuffixes::default(),
        }
    }
}

/// Runs the whole batch: discover file triples in `dir`, join each sample's
/// pathway, RPKM, and annotation data, write the report, and return the rows
/// and counters. Any I/O failure aborts the run with an `Err`; missing
/// companion files and missing per-ORF data are counted and logged instead.
pub fn batch_correlate_annotate(
    dir: &Path,
    options: &BatchOptions,
) -> Result<BatchReport, AnnotateError> {
    let triples = discover_triples(dir, &options.suffixes)?;
    let batch = run_batch(&triples, options.separator)?;

    log::info!(
        "Processed {} pathway ORF entries, {} RPKM data points, {} total annotations.",
        batch.totals.pathway_orfs,
        batch.totals.datapoints,
        batch.totals.annotations
    );

    write_report(&options.output_path, &batch.rows, options.separator)?;
    Ok(batch)
}
