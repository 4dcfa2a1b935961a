//! Open reading frame enumeration.
//!
//! An ORF starts at an in-frame `ATG` and runs up to, but not including, the
//! first in-frame stop codon. When the strand ends first, the ORF keeps
//! everything to the end, including a trailing partial codon.

pub mod threshold;
pub mod translate;

pub use threshold::{RandShuffler, Shuffler};
pub use translate::Translator;

use crate::error::{GeneError, GeneResult};
use crate::seq::{CodonTable, DnaSeq};

const CODON: usize = 3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OrfScanner {
    table: CodonTable,
}

impl OrfScanner {
    pub fn new(table: CodonTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &CodonTable {
        &self.table
    }

    /// Length of the ORF opening at `bytes[0]`; the caller guarantees a start codon there.
    fn orf_len(&self, bytes: &[u8]) -> usize {
        bytes
            .chunks(CODON)
            .position(|codon| self.table.is_stop(codon))
            .map_or(bytes.len(), |i| i * CODON)
    }

    /// The coding region of `seq` up to its first in-frame stop codon.
    ///
    /// `seq` is assumed to open with a start codon; this is not checked.
    pub fn rest_of_orf(&self, seq: &DnaSeq) -> DnaSeq {
        let bytes = seq.as_bytes();
        DnaSeq::from_bytes_unchecked(bytes[..self.orf_len(bytes)].to_vec())
    }

    fn one_frame_into(&self, bytes: &[u8], out: &mut Vec<DnaSeq>) {
        let mut i = 0;
        while i < bytes.len() {
            let end = (i + CODON).min(bytes.len());
            if self.table.is_start(&bytes[i..end]) {
                let len = self.orf_len(&bytes[i..]);
                out.push(DnaSeq::from_bytes_unchecked(bytes[i..i + len].to_vec()));
                // lands on the terminating stop codon, skipped below
                i += len;
            }
            i += CODON;
        }
    }

    /// Top-level ORFs of `seq` read in frame from index 0, left to right.
    ///
    /// Start codons nested inside an ORF already reported are skipped.
    pub fn find_all_orfs_one_frame(&self, seq: &DnaSeq) -> Vec<DnaSeq> {
        let mut out = Vec::new();
        self.one_frame_into(seq.as_bytes(), &mut out);
        out
    }

    fn three_frames_into(&self, bytes: &[u8], out: &mut Vec<DnaSeq>) {
        for offset in 0..CODON {
            if offset < bytes.len() {
                self.one_frame_into(&bytes[offset..], out);
            }
        }
    }

    /// ORFs of frames 0, 1 and 2 concatenated in that order. Overlaps across
    /// frames are kept.
    pub fn find_all_orfs(&self, seq: &DnaSeq) -> Vec<DnaSeq> {
        let mut out = Vec::new();
        self.three_frames_into(seq.as_bytes(), &mut out);
        out
    }

    /// [`find_all_orfs`](Self::find_all_orfs) of `seq` followed by that of its
    /// reverse complement.
    pub fn find_all_orfs_both_strands(&self, seq: &DnaSeq) -> Vec<DnaSeq> {
        let mut out = Vec::new();
        self.three_frames_into(seq.as_bytes(), &mut out);
        self.three_frames_into(seq.reverse_complement().as_bytes(), &mut out);
        out
    }

    /// Longest ORF on either strand. Ties go to the first ORF in
    /// [`find_all_orfs_both_strands`](Self::find_all_orfs_both_strands) order.
    pub fn find_longest_orf(&self, seq: &DnaSeq) -> GeneResult<DnaSeq> {
        let mut longest: Option<DnaSeq> = None;
        for orf in self.find_all_orfs_both_strands(seq) {
            if longest.as_ref().map_or(true, |best| orf.len() > best.len()) {
                longest = Some(orf);
            }
        }
        longest.ok_or(GeneError::NoOrfFound { len: seq.len() })
    }
}
