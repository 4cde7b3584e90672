//src/join.rs

use crate::annotations::load_annotations;
use crate::error::AnnotateError;
use crate::pathways::load_pathways;
use crate::rpkm::load_rpkm;
use crate::types::{FileTriple, OutputRow, RpkmIndex};

/// Join counters. Used both per-sample and, folded together, as the global
/// batch totals; no process-wide mutable state is involved.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct JoinCounts {
    /// ORF-within-pathway iterations, i.e. the sum over pathways of their
    /// ORF-list lengths (NOT the number of distinct pathways).
    pub pathway_orfs: u64,
    /// ORFs found in the RPKM index (whether or not annotated)
    pub datapoints: u64,
    /// ORFs found in both indexes; equals the number of rows emitted
    pub annotations: u64,
    /// ORFs absent from the RPKM index (annotation never checked)
    pub missing_rpkm: u64,
    /// ORFs with RPKM data but no annotation
    pub missing_annotations: u64,
}

impl JoinCounts {
    fn absorb(&mut self, other: &JoinCounts) {
        self.pathway_orfs += other.pathway_orfs;
        self.datapoints += other.datapoints;
        self.annotations += other.annotations;
        self.missing_rpkm += other.missing_rpkm;
        self.missing_annotations += other.missing_annotations;
    }
}

/// Rows and counters produced from one sample's file triple.
#[derive(Debug)]
pub struct SampleOutcome {
    pub sample: String,
    pub rows: Vec<OutputRow>,
    pub counts: JoinCounts,
}

/// Accumulated result of a whole batch run.
#[derive(Debug)]
pub struct BatchReport {
    /// Joined rows across all samples, in pairing order then pathway/ORF
    /// file order
    pub rows: Vec<OutputRow>,
    pub totals: JoinCounts,
    /// Per-sample (sample name, counters), in pairing order
    pub samples: Vec<(String, JoinCounts)>,
}

/// Loads one triple and performs the three-way inner join.
///
/// The sample name returned by the pathway loader is authoritative; the RPKM
/// and annotation loaders both receive it to drive their key normalization.
/// A row is emitted only when the ORF is present in BOTH indexes; each miss
/// is counted instead.
pub fn correlate_triple(
    triple: &FileTriple,
    separator: char,
) -> Result<SampleOutcome, AnnotateError> {
    let (sample, pathways) = load_pathways(&triple.pathway, separator)?;
    let (_, rpkm_entries) = load_rpkm(&triple.data, &sample, separator)?;
    let annotations = load_annotations(&triple.annotation, &sample, separator)?;

    // Plain collect: duplicate RPKM ids override, unlike the annotation index
    let rpkm_index: RpkmIndex = rpkm_entries.into_iter().collect();

    let mut rows: Vec<OutputRow> = Vec::new();
    let mut counts = JoinCounts::default();

    for pathway in &pathways {
        for orf_id in &pathway.orf_ids {
            counts.pathway_orfs += 1;

            let Some(rpkm) = rpkm_index.get(orf_id) else {
                counts.missing_rpkm += 1;
                continue;
            };
            counts.datapoints += 1;

            let Some(anno) = annotations.get(orf_id) else {
                counts.missing_annotations += 1;
                continue;
            };
            counts.annotations += 1;

            rows.push(OutputRow {
                sample: sample.clone(),
                pathway_id: pathway.pathway_id.clone(),
                orf_id: orf_id.clone(),
                hit_name: anno.hit_name.clone(),
                rpkm: rpkm.clone(),
                q_length: anno.q_length.clone(),
                bitscore: anno.bitscore.clone(),
                bsr: anno.bsr.clone(),
                expect: anno.expect.clone(),
                identity: anno.identity.clone(),
                ec: anno.ec.clone(),
            });
        }
    }

    Ok(SampleOutcome {
        sample,
        rows,
        counts,
    })
}

/// Runs the join for every triple in pairing order, folding per-sample
/// counters into global totals. Indexes are rebuilt from scratch per triple;
/// only rows and counters carry across.
pub fn run_batch(triples: &[FileTriple], separator: char) -> Result<BatchReport, AnnotateError> {
    let mut rows: Vec<OutputRow> = Vec::new();
    let mut totals = JoinCounts::default();
    let mut samples: Vec<(String, JoinCounts)> = Vec::new();

    for triple in triples {
        let outcome = correlate_triple(triple, separator)?;
        log::info!(
            "Loaded sample: {} - ORFs with no annotations: {} - missing RPKM data points: {}",
            outcome.sample,
            outcome.counts.missing_annotations,
            outcome.counts.missing_rpkm
        );

        totals.absorb(&outcome.counts);
        rows.extend(outcome.rows);
        samples.push((outcome.sample, outcome.counts));
    }

    Ok(BatchReport {
        rows,
        totals,
        samples,
    })
}
