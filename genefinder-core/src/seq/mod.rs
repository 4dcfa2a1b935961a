pub mod codon;
pub mod dna;
pub mod protein;
pub mod record;

pub use codon::CodonTable;
pub use dna::DnaSeq;
pub use protein::ProteinSeq;
pub use record::SeqRecord;
