use crate::seq::{CodonTable, DnaSeq, ProteinSeq};

const UNKNOWN: u8 = b'X';

/// Maps ORFs to amino-acid strings through an owned [`CodonTable`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Translator {
    table: CodonTable,
}

impl Translator {
    pub fn new(table: CodonTable) -> Self {
        Self { table }
    }

    /// One residue per full codon; a trailing partial codon is dropped.
    /// Codons outside the table translate to `X`.
    pub fn encode_amino_acids(&self, orf: &DnaSeq) -> ProteinSeq {
        let residues = orf
            .as_bytes()
            .chunks_exact(3)
            .map(|codon| self.table.residue(codon).unwrap_or(UNKNOWN))
            .collect();
        ProteinSeq::from_bytes_unchecked(residues)
    }
}
