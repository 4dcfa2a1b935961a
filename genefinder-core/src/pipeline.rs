//! End-to-end gene finding: threshold, scan, filter, translate.

use crate::config::GeneFinderConfig;
use crate::error::GeneResult;
use crate::io::fasta::{self, load_sequence};
use crate::orf::{OrfScanner, RandShuffler, Shuffler, Translator};
use crate::seq::{CodonTable, DnaSeq, ProteinSeq};
use log::{debug, info};
use rand::rngs::StdRng;
use std::path::Path;

/// Outcome of one pipeline run over a single strand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneReport {
    /// ORFs must be strictly longer than this to be kept.
    pub threshold: usize,
    /// ORFs scanned on both strands before filtering.
    pub candidates: usize,
    /// Translations of the surviving ORFs, in scan order.
    pub genes: Vec<ProteinSeq>,
}

pub struct GeneFinder<S = RandShuffler<StdRng>> {
    scanner: OrfScanner,
    translator: Translator,
    config: GeneFinderConfig,
    shuffler: S,
}

impl GeneFinder {
    pub fn new(config: GeneFinderConfig) -> Self {
        let shuffler = RandShuffler::from_seed(config.seed);
        Self::with_parts(CodonTable::standard(), config, shuffler)
    }
}

impl Default for GeneFinder {
    fn default() -> Self {
        Self::new(GeneFinderConfig::default())
    }
}

impl<S: Shuffler> GeneFinder<S> {
    pub fn with_parts(table: CodonTable, config: GeneFinderConfig, shuffler: S) -> Self {
        Self {
            scanner: OrfScanner::new(table),
            translator: Translator::new(table),
            config,
            shuffler,
        }
    }

    /// Swap the shuffle source, e.g. for a deterministic one in tests.
    pub fn with_shuffler<T: Shuffler>(self, shuffler: T) -> GeneFinder<T> {
        GeneFinder {
            scanner: self.scanner,
            translator: self.translator,
            config: self.config,
            shuffler,
        }
    }

    pub fn config(&self) -> &GeneFinderConfig {
        &self.config
    }

    pub fn report(&mut self, seq: &DnaSeq) -> GeneResult<GeneReport> {
        let threshold =
            self.scanner
                .noncoding_orf_threshold(seq, self.config.trials, &mut self.shuffler)?;
        let candidates = self.scanner.find_all_orfs_both_strands(seq);
        debug!(
            "{} candidate orfs, keeping those over {threshold} nt",
            candidates.len()
        );

        let genes = candidates
            .iter()
            .filter(|orf| orf.len() > threshold)
            .map(|orf| self.translator.encode_amino_acids(orf))
            .collect::<Vec<_>>();
        info!(
            "{} of {} orfs exceed {threshold} nt",
            genes.len(),
            candidates.len()
        );

        Ok(GeneReport {
            threshold,
            candidates: candidates.len(),
            genes,
        })
    }

    pub fn find_genes_in(&mut self, seq: &DnaSeq) -> GeneResult<Vec<ProteinSeq>> {
        Ok(self.report(seq)?.genes)
    }

    /// Amino-acid strings of the ORFs in the first record of the FASTA file
    /// at `path` that beat the null-model threshold.
    pub fn find_genes(&mut self, path: impl AsRef<Path>) -> GeneResult<Vec<ProteinSeq>> {
        let seq = load_sequence(path)?;
        self.find_genes_in(&seq)
    }

    /// Runs the pipeline on every record of a FASTA file, each against its
    /// own threshold.
    pub fn find_genes_in_records(
        &mut self,
        path: impl AsRef<Path>,
    ) -> GeneResult<Vec<(Box<str>, Vec<ProteinSeq>)>> {
        let records = fasta::read_records_from_path(path)?;
        let mut out = Vec::with_capacity(records.len());
        for record in records {
            debug!("record {}: {} nt", record.id(), record.seq().len());
            let report = self.report(record.seq())?;
            out.push((record.id, report.genes));
        }
        Ok(out)
    }
}
