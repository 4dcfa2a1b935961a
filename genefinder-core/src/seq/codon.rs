use crate::error::{GeneError, GeneResult};
use std::sync::LazyLock;

/// Symbol the table reports for a stop codon.
pub const STOP: u8 = b'*';
/// Symbol the table reports for the start codon `ATG`.
pub const START: u8 = b'M';

// Codon index is (b1 << 4) | (b2 << 2) | b3 with A=0, C=1, G=2, T=3.
const STANDARD_CODE: [u8; 64] =
    *b"KNKNTTTTRSRSIIMIQHQHPPPPRRRRLLLLEDEDAAAAGGGGVVVV*Y*YSSSS*CWCLFLF";

static BASE_INDEX: LazyLock<[u8; 256]> = LazyLock::new(|| {
    let mut map = [255u8; 256];
    map[b'A' as usize] = 0;
    map[b'C' as usize] = 1;
    map[b'G' as usize] = 2;
    map[b'T' as usize] = 3;
    map
});

/// Codon to amino-acid mapping.
///
/// The table is a plain value: scanners and translators each own a copy
/// instead of reaching for a shared global.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CodonTable {
    residues: [u8; 64],
}

impl CodonTable {
    /// NCBI translation table 1.
    pub fn standard() -> Self {
        Self {
            residues: STANDARD_CODE,
        }
    }

    /// Residue for `codon`, or `None` when it is not three `ACGT` bytes.
    #[inline]
    pub fn residue(&self, codon: &[u8]) -> Option<u8> {
        let [b1, b2, b3] = codon else {
            return None;
        };
        let (i1, i2, i3) = (
            BASE_INDEX[*b1 as usize],
            BASE_INDEX[*b2 as usize],
            BASE_INDEX[*b3 as usize],
        );
        if i1 > 3 || i2 > 3 || i3 > 3 {
            return None;
        }
        let idx = ((i1 as usize) << 4) | ((i2 as usize) << 2) | (i3 as usize);
        Some(self.residues[idx])
    }

    pub fn lookup(&self, codon: &[u8]) -> GeneResult<u8> {
        self.residue(codon).ok_or_else(|| GeneError::InvalidCodon {
            codon: String::from_utf8_lossy(codon).into_owned(),
        })
    }

    #[inline]
    pub fn is_start(&self, codon: &[u8]) -> bool {
        self.residue(codon) == Some(START)
    }

    /// Partial windows are never stops.
    #[inline]
    pub fn is_stop(&self, codon: &[u8]) -> bool {
        self.residue(codon) == Some(STOP)
    }
}

impl Default for CodonTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_and_stops() {
        let table = CodonTable::standard();
        assert_eq!(table.lookup(b"ATG").unwrap(), START);
        for stop in [b"TAA", b"TAG", b"TGA"] {
            assert!(table.is_stop(stop));
        }
        assert!(table.is_start(b"ATG"));
        assert!(!table.is_start(b"ATA"));
    }

    #[test]
    fn sample_residues() {
        let table = CodonTable::standard();
        assert_eq!(table.lookup(b"CCC").unwrap(), b'P');
        assert_eq!(table.lookup(b"GCT").unwrap(), b'A');
        assert_eq!(table.lookup(b"TGG").unwrap(), b'W');
        assert_eq!(table.lookup(b"TTT").unwrap(), b'F');
        assert_eq!(table.lookup(b"AAA").unwrap(), b'K');
        assert_eq!(table.lookup(b"GGG").unwrap(), b'G');
    }

    #[test]
    fn exactly_three_stops() {
        let table = CodonTable::standard();
        let stops = table.residues.iter().filter(|&&r| r == STOP).count();
        assert_eq!(stops, 3);
    }

    #[test]
    fn partial_or_foreign_windows() {
        let table = CodonTable::standard();
        assert_eq!(table.residue(b"TG"), None);
        assert_eq!(table.residue(b"TGAA"), None);
        assert!(!table.is_stop(b"TA"));
        match table.lookup(b"ANG") {
            Err(GeneError::InvalidCodon { codon }) => assert_eq!(codon, "ANG"),
            other => panic!("expected invalid codon, got {other:?}"),
        }
    }
}
