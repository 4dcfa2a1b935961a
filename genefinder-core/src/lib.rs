//! Open reading frame discovery on both strands of a DNA sequence, filtered
//! by a shuffle-based null-model length threshold and translated to protein.

pub mod alphabets;
pub mod config;
pub mod error;
pub mod io;
pub mod orf;
pub mod pipeline;
pub mod seq;

pub use config::GeneFinderConfig;
pub use error::{GeneError, GeneResult};
pub use orf::{OrfScanner, RandShuffler, Shuffler, Translator};
pub use pipeline::{GeneFinder, GeneReport};
pub use seq::{CodonTable, DnaSeq, ProteinSeq};
