use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneError {
    #[error("invalid nucleotide '{ch}' at position {pos} (expected one of A, C, G, T)")]
    InvalidNucleotide { ch: char, pos: usize },

    #[error("invalid codon {codon:?}: expected exactly three of A, C, G, T")]
    InvalidCodon { codon: String },

    #[error("no open reading frame in any frame of either strand (sequence length {len})")]
    NoOrfFound { len: usize },

    #[error("fasta file {path} contains no records")]
    EmptyFasta { path: String },

    #[error("fasta format error at line {line}: {msg}")]
    FastaFormat { msg: &'static str, line: usize },

    #[error("fasta io error: {0}")]
    FastaIo(#[from] io::Error),
}

pub type GeneResult<T> = Result<T, GeneError>;
