use crate::seq::dna::DnaSeq;

/// A named strand read from a FASTA file. Header text after the id is dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeqRecord {
    pub id: Box<str>,
    pub seq: DnaSeq,
}

impl SeqRecord {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn seq(&self) -> &DnaSeq {
        &self.seq
    }

    pub fn into_seq(self) -> DnaSeq {
        self.seq
    }
}
