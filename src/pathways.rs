//src/pathways.rs

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::AnnotateError;
use crate::types::PathwayRecord;

/// Parses a pathway file in the format:
/// ```text
/// <sample>\t<pathway_id>\t<common_name>\t<orf_id>...\t<orf_id>
/// ```
/// Returns the sample name (taken from the first usable row, authoritative
/// for the whole triple) and the pathway records in file order. ORF order
/// within each pathway is preserved exactly; it drives output row order.
///
/// Rows with fewer than 3 fields are skipped. A file yielding no records at
/// all is fatal, since there is no sample name to continue with.
pub fn load_pathways(
    path: &Path,
    separator: char,
) -> Result<(String, Vec<PathwayRecord>), AnnotateError> {
    let file = File::open(path).map_err(|source| AnnotateError::PathwayRead {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let mut sample_name: Option<String> = None;
    let mut pathways: Vec<PathwayRecord> = Vec::new();

    for line_result in reader.lines() {
        let line = line_result.map_err(|source| AnnotateError::PathwayRead {
            path: path.to_path_buf(),
            source,
        })?;
        let fields: Vec<&str> = line.split(separator).collect();

        // Skip malformed lines
        if fields.len() < 3 {
            continue;
        }

        if sample_name.is_none() {
            sample_name = Some(fields[0].to_string());
        }

        let orf_ids = fields[3..]
            .iter()
            .filter(|f| !f.is_empty())
            .map(|f| f.to_string())
            .collect();

        pathways.push(PathwayRecord {
            pathway_id: fields[1].to_string(),
            common_name: fields[2].to_string(),
            orf_ids,
        });
    }

    match sample_name {
        Some(sample) => Ok((sample, pathways)),
        None => Err(AnnotateError::EmptyPathwayFile {
            path: path.to_path_buf(),
        }),
    }
}
