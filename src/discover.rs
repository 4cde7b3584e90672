//src/discover.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AnnotateError;
use crate::types::FileTriple;

/// Filename fragments used to classify directory entries into the three
/// input buckets. Matching is substring CONTAINMENT over the full path, not
/// a strict suffix check, so a fragment appearing anywhere in the path
/// classifies the file.
#[derive(Debug, Clone)]
pub struct FileSuffixes {
    pub pathway: String,
    pub data: String,
    pub annotation: String,
}

impl Default for FileSuffixes {
    fn default() -> Self {
        FileSuffixes {
            pathway: ".pwy.txt".to_string(),
            data: ".orf_rpkm.txt".to_string(),
            annotation: ".metacyc-2016-10-31.lastout.parsed.txt".to_string(),
        }
    }
}

/// Scans `dir` (non-recursively) and pairs every pathway file with its
/// companion data and annotation files, derived by replacing the pathway
/// suffix in the pathway file's path.
///
/// Entries are sorted before classification so pairing order is reproducible
/// across platforms. Files matching none of the three fragments are dropped
/// with a diagnostic. A pathway file missing its data companion is skipped
/// before the annotation companion is even checked; missing the annotation
/// companion likewise skips the triple. Neither is fatal.
pub fn discover_triples(
    dir: &Path,
    suffixes: &FileSuffixes,
) -> Result<Vec<FileTriple>, AnnotateError> {
    let read_dir = fs::read_dir(dir).map_err(|source| AnnotateError::ScanDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut entries: Vec<String> = read_dir
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path().to_string_lossy().into_owned())
        .collect();
    entries.sort();

    let mut pwy_files: Vec<String> = Vec::new();
    let mut data_files: Vec<String> = Vec::new();
    let mut anno_files: Vec<String> = Vec::new();

    for path in entries {
        if path.contains(&suffixes.pathway) {
            pwy_files.push(path);
        } else if path.contains(&suffixes.data) {
            data_files.push(path);
        } else if path.contains(&suffixes.annotation) {
            anno_files.push(path);
        } else {
            log::warn!("Unknown file in batch directory: {path}");
        }
    }

    let mut triples: Vec<FileTriple> = Vec::new();

    for pwy_file in &pwy_files {
        let data_file = pwy_file.replace(&suffixes.pathway, &suffixes.data);
        let anno_file = pwy_file.replace(&suffixes.pathway, &suffixes.annotation);

        if !data_files.contains(&data_file) {
            log::warn!("Missing data file: {data_file}");
            continue;
        }
        if !anno_files.contains(&anno_file) {
            log::warn!("Missing annotation file: {anno_file}");
            continue;
        }

        triples.push(FileTriple {
            pathway: PathBuf::from(pwy_file),
            data: PathBuf::from(&data_file),
            annotation: PathBuf::from(&anno_file),
        });
    }

    Ok(triples)
}
