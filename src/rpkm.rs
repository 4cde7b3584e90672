//src/rpkm.rs

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::AnnotateError;
use crate::orf_key::canonical_orf_id;

/// Parses a per-ORF RPKM file in the format:
/// ```text
/// <raw_orf_id>\t<rpkm_value>
/// ```
/// Raw ids carry the sample-name encoding, so each runs through the same key
/// normalization as the annotation loader, driven by `sample_name`. Values
/// are passed through as text, never parsed. Rows with fewer than 2 fields
/// are skipped.
///
/// Returns the (echoed) sample name and the pairs in file order. Building a
/// map from these pairs gives plain override semantics for duplicate ids,
/// which is deliberate and differs from the annotation index.
pub fn load_rpkm(
    path: &Path,
    sample_name: &str,
    separator: char,
) -> Result<(String, Vec<(String, String)>), AnnotateError> {
    let file = File::open(path).map_err(|source| AnnotateError::RpkmRead {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let mut entries: Vec<(String, String)> = Vec::new();

    for line_result in reader.lines() {
        let line = line_result.map_err(|source| AnnotateError::RpkmRead {
            path: path.to_path_buf(),
            source,
        })?;
        let fields: Vec<&str> = line.split(separator).collect();

        if fields.len() < 2 {
            continue;
        }

        let orf_id = canonical_orf_id(fields[0], sample_name);
        entries.push((orf_id, fields[1].to_string()));
    }

    Ok((sample_name.to_string(), entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RpkmIndex;
    use std::io::Write;

    #[test]
    fn normalizes_ids_and_keeps_values_as_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("s1.orf_rpkm.txt");
        let mut f = File::create(&path).unwrap();
        f.write_all(b"s1_1\t5.0\ns1_2\t7.2\n").unwrap();

        let (sample, entries) = load_rpkm(&path, "s1", '\t').unwrap();
        assert_eq!(sample, "s1");
        assert_eq!(
            entries,
            vec![
                ("O_1".to_string(), "5.0".to_string()),
                ("O_2".to_string(), "7.2".to_string()),
            ]
        );
    }

    #[test]
    fn duplicate_orf_overrides_when_indexed() {
        // Contrast case to the annotation index: last value wins here.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("s1.orf_rpkm.txt");
        let mut f = File::create(&path).unwrap();
        f.write_all(b"s1_1\t5.0\ns1_1\t9.9\n").unwrap();

        let (_, entries) = load_rpkm(&path, "s1", '\t').unwrap();
        let index: RpkmIndex = entries.into_iter().collect();
        assert_eq!(index.len(), 1);
        assert_eq!(index["O_1"], "9.9");
    }

    #[test]
    fn missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_rpkm(&dir.path().join("nope.txt"), "s1", '\t').unwrap_err();
        assert!(matches!(err, AnnotateError::RpkmRead { .. }));
    }
}
