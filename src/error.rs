//src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Fatal conditions that abort the whole batch run.
///
/// Missing companion files and missing per-ORF data are NOT errors; those are
/// handled locally with diagnostics and counters. Everything here propagates
/// up to the caller and halts processing.
#[derive(Debug, Error)]
pub enum AnnotateError {
    #[error("error scanning batch directory {path}: {source}")]
    ScanDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error reading pathway file {path}: {source}")]
    PathwayRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("pathway file {path} contains no pathway records")]
    EmptyPathwayFile { path: PathBuf },

    #[error("error reading RPKM data file {path}: {source}")]
    RpkmRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error reading annotation file {path}: {source}")]
    AnnotationRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed annotation row in {path} (fewer than 10 fields): {row:?}")]
    MalformedAnnotationRow { path: PathBuf, row: String },

    #[error("error writing output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
