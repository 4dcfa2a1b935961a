use crate::alphabets::dna;
use crate::error::{GeneError, GeneResult};
use std::fmt;
use std::str::FromStr;

/// An immutable strand over the strict `ACGT` alphabet.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DnaSeq {
    bytes: Vec<u8>,
}

impl DnaSeq {
    pub fn new(bytes: Vec<u8>) -> GeneResult<Self> {
        if let Some((pos, b)) = dna::alphabet().first_foreign(&bytes) {
            return Err(GeneError::InvalidNucleotide { ch: b as char, pos });
        }
        Ok(Self { bytes })
    }

    #[inline]
    pub(crate) fn from_bytes_unchecked(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn as_str(&self) -> &str {
        // ACGT is ASCII, so this never fails after validation
        std::str::from_utf8(&self.bytes).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn complement(&self) -> Self {
        let out = self
            .bytes
            .iter()
            .map(|&b| dna::complement_unchecked(b))
            .collect();
        Self { bytes: out }
    }

    pub fn reverse_complement(&self) -> Self {
        let out = self
            .bytes
            .iter()
            .rev()
            .map(|&b| dna::complement_unchecked(b))
            .collect();
        Self { bytes: out }
    }

    /// The strand starting `offset` bases in; empty once `offset` passes the end.
    pub fn suffix(&self, offset: usize) -> Self {
        let start = offset.min(self.bytes.len());
        Self {
            bytes: self.bytes[start..].to_vec(),
        }
    }
}

impl FromStr for DnaSeq {
    type Err = GeneError;

    fn from_str(s: &str) -> GeneResult<Self> {
        DnaSeq::new(s.as_bytes().to_vec())
    }
}

impl AsRef<[u8]> for DnaSeq {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Display for DnaSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
