use crate::alphabets::Alphabet;
use crate::error::{GeneError, GeneResult};
use std::sync::LazyLock;

/// The four unambiguous bases. Lowercase and IUPAC codes are rejected.
pub fn alphabet() -> Alphabet {
    Alphabet::new(b"ACGT")
}

// 0 marks a byte with no Watson-Crick partner.
static COMPLEMENT: LazyLock<[u8; 256]> = LazyLock::new(|| {
    let mut comp = [0u8; 256];
    b"ACGT".iter().zip(b"TGCA".iter()).for_each(|(&a, &b)| {
        comp[a as usize] = b;
    });
    comp
});

/// Pairing base of `a`: A<->T, C<->G.
#[inline]
pub fn complement(a: u8) -> GeneResult<u8> {
    match COMPLEMENT[a as usize] {
        0 => Err(GeneError::InvalidNucleotide {
            ch: a as char,
            pos: 0,
        }),
        c => Ok(c),
    }
}

/// Complement of a base already known to be in [`alphabet`].
#[inline]
pub(crate) fn complement_unchecked(a: u8) -> u8 {
    debug_assert!(COMPLEMENT[a as usize] != 0);
    COMPLEMENT[a as usize]
}

/// Reverse `text`, then complement every base. Errors carry the position of
/// the offending byte in `text`, not in the reversed output.
pub fn reverse_complement(text: &[u8]) -> GeneResult<Vec<u8>> {
    let mut out = Vec::with_capacity(text.len());
    for (pos, &a) in text.iter().enumerate().rev() {
        match COMPLEMENT[a as usize] {
            0 => return Err(GeneError::InvalidNucleotide { ch: a as char, pos }),
            c => out.push(c),
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn alphabet_is_strict_uppercase_acgt() {
        assert_eq!(alphabet().first_foreign(b"GATTACA"), None);
        assert_eq!(alphabet().first_foreign(b"gattaca"), Some((0, b'g')));
        assert_eq!(alphabet().first_foreign(b"GAUUACA"), Some((2, b'U')));
    }

    #[test]
    fn complement_pairs() {
        assert_eq!(complement(b'A').unwrap(), b'T');
        assert_eq!(complement(b'C').unwrap(), b'G');
        assert_eq!(complement(b'G').unwrap(), b'C');
        assert_eq!(complement(b'T').unwrap(), b'A');
    }

    #[test]
    fn complement_rejects_foreign() {
        match complement(b'N') {
            Err(GeneError::InvalidNucleotide { ch: 'N', .. }) => {}
            other => panic!("expected invalid nucleotide, got {other:?}"),
        }
        assert!(complement(b'a').is_err());
    }

    #[test]
    fn reverse_complement_basic() {
        assert_eq!(reverse_complement(b"A").unwrap(), b"T");
        assert_eq!(reverse_complement(b"ATG").unwrap(), b"CAT");
        assert_eq!(reverse_complement(b"").unwrap(), b"");
    }

    #[test]
    fn reverse_complement_error_position() {
        match reverse_complement(b"ACXGT") {
            Err(GeneError::InvalidNucleotide { ch: 'X', pos: 2 }) => {}
            other => panic!("expected invalid nucleotide at 2, got {other:?}"),
        }
    }

    proptest! {
        #[test]
        fn double_complement_is_identity(a in prop_oneof![Just(b'A'), Just(b'C'), Just(b'G'), Just(b'T')]) {
            prop_assert_eq!(complement(complement(a).unwrap()).unwrap(), a);
        }

        #[test]
        fn reverse_complement_is_involution(
            s in prop::collection::vec(prop_oneof![Just(b'A'), Just(b'C'), Just(b'G'), Just(b'T')], 0..64),
        ) {
            let twice = reverse_complement(&reverse_complement(&s).unwrap()).unwrap();
            prop_assert_eq!(twice, s);
        }
    }
}
