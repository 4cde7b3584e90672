//src/annotations.rs

use ahash::AHashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::AnnotateError;
use crate::orf_key::canonical_orf_id;
use crate::types::{AnnotationIndex, AnnotationRecord};

/// Parses a similarity-search results file into an index keyed by canonical
/// ORF id. Expected columns (separator-delimited, at least 10 per row):
/// ```text
/// 0 = raw query id   2 = q_length   3 = bitscore   4 = bsr
/// 5 = expect         7 = identity   8 = ec         9 = hit (name + '[organism]')
/// ```
/// Only the first row seen for each ORF id is kept; later duplicates are
/// discarded. Any open/read failure or short row aborts the whole batch.
pub fn load_annotations(
    path: &Path,
    sample_name: &str,
    separator: char,
) -> Result<AnnotationIndex, AnnotateError> {
    let file = File::open(path).map_err(|source| AnnotateError::AnnotationRead {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let mut index: AnnotationIndex = AHashMap::new();

    for line_result in reader.lines() {
        let line = line_result.map_err(|source| AnnotateError::AnnotationRead {
            path: path.to_path_buf(),
            source,
        })?;
        let fields: Vec<&str> = line.split(separator).collect();

        if fields.len() < 10 {
            return Err(AnnotateError::MalformedAnnotationRow {
                path: path.to_path_buf(),
                row: line,
            });
        }

        let orf_id = canonical_orf_id(fields[0], sample_name);

        // Only take the first annotation result for each ORF
        if index.contains_key(&orf_id) {
            continue;
        }

        // Grab only the gene name as the hit, dropping the '[organism]' tail
        let hit_name = fields[9].split('[').next().unwrap_or("").to_string();

        index.insert(
            orf_id,
            AnnotationRecord {
                hit_name,
                q_length: fields[2].to_string(),
                bitscore: fields[3].to_string(),
                bsr: fields[4].to_string(),
                expect: fields[5].to_string(),
                identity: fields[7].to_string(),
                ec: fields[8].to_string(),
            },
        );
    }

    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut f = File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn parses_record_fields_and_hit_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "anno.txt",
            "s1_1\tx\t100\t50\t0.9\t1e-10\tx\t95\t1.1.1.1\tGeneX[Escherichia coli]\n",
        );

        let index = load_annotations(&path, "s1", '\t').unwrap();
        let rec = index.get("O_1").expect("O_1 indexed");
        assert_eq!(rec.hit_name, "GeneX");
        assert_eq!(rec.q_length, "100");
        assert_eq!(rec.bitscore, "50");
        assert_eq!(rec.bsr, "0.9");
        assert_eq!(rec.expect, "1e-10");
        assert_eq!(rec.identity, "95");
        assert_eq!(rec.ec, "1.1.1.1");
    }

    #[test]
    fn first_seen_wins_on_duplicate_orf() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "anno.txt",
            "s1_1\tx\t100\t50\t0.9\t1e-10\tx\t95\t1.1.1.1\tFirstHit[org]\n\
             s1_1\tx\t200\t60\t0.8\t1e-20\tx\t90\t2.2.2.2\tSecondHit[org]\n",
        );

        let index = load_annotations(&path, "s1", '\t').unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index["O_1"].hit_name, "FirstHit");
        assert_eq!(index["O_1"].bitscore, "50");
    }

    #[test]
    fn hit_without_bracket_is_kept_whole() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "anno.txt",
            "s1_2\tx\t80\t40\t0.7\t1e-5\tx\t88\t-\thypothetical protein\n",
        );

        let index = load_annotations(&path, "s1", '\t').unwrap();
        assert_eq!(index["O_2"].hit_name, "hypothetical protein");
    }

    #[test]
    fn short_row_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "anno.txt", "s1_1\tonly\tfour\tfields\n");

        let err = load_annotations(&path, "s1", '\t').unwrap_err();
        assert!(matches!(err, AnnotateError::MalformedAnnotationRow { .. }));
    }

    #[test]
    fn missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_annotations(&dir.path().join("nope.txt"), "s1", '\t').unwrap_err();
        assert!(matches!(err, AnnotateError::AnnotationRead { .. }));
    }
}
