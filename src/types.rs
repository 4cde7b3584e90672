//src/types.rs

use ahash::AHashMap;
use std::path::PathBuf;

/// Maps canonical ORF id -> RPKM value (kept as unparsed text).
/// Built with plain inserts, so a duplicate id keeps the LAST value seen.
pub type RpkmIndex = AHashMap<String, String>;

/// Maps canonical ORF id -> annotation record.
/// Built first-seen-wins: a duplicate id keeps the FIRST record seen.
pub type AnnotationIndex = AHashMap<String, AnnotationRecord>;

/// One similarity-search result for an ORF. All fields pass through as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationRecord {
    /// Gene name, i.e. the hit column truncated before its first '['
    pub hit_name: String,
    pub q_length: String,
    pub bitscore: String,
    pub bsr: String,
    pub expect: String,
    pub identity: String,
    pub ec: String,
}

/// One pathway and the ORFs believed to participate in it,
/// in the order the source file listed them.
#[derive(Debug, Clone)]
pub struct PathwayRecord {
    pub pathway_id: String,
    pub common_name: String,
    pub orf_ids: Vec<String>,
}

/// The three files that together describe one sample's inputs.
/// Derived purely by filename-suffix substitution, never by file contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTriple {
    pub pathway: PathBuf,
    pub data: PathBuf,
    pub annotation: PathBuf,
}

/// One joined line of the output report (11 columns).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRow {
    pub sample: String,
    pub pathway_id: String,
    pub orf_id: String,
    pub hit_name: String,
    pub rpkm: String,
    pub q_length: String,
    pub bitscore: String,
    pub bsr: String,
    pub expect: String,
    pub identity: String,
    pub ec: String,
}

impl OutputRow {
    /// Column values in report order.
    pub fn fields(&self) -> [&str; 11] {
        [
            &self.sample,
            &self.pathway_id,
            &self.orf_id,
            &self.hit_name,
            &self.rpkm,
            &self.q_length,
            &self.bitscore,
            &self.bsr,
            &self.expect,
            &self.identity,
            &self.ec,
        ]
    }
}
