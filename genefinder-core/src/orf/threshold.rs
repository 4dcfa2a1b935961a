//! Shuffle-based null model for the ORF length cutoff.

use crate::error::GeneResult;
use crate::orf::OrfScanner;
use crate::seq::DnaSeq;
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Produces composition-preserving permutations of a strand.
pub trait Shuffler {
    fn shuffle(&mut self, seq: &DnaSeq) -> DnaSeq;
}

/// Uniform Fisher-Yates permutation driven by any [`Rng`].
#[derive(Clone, Debug)]
pub struct RandShuffler<R> {
    rng: R,
}

impl<R: Rng> RandShuffler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandShuffler<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Seeded when `seed` is given, OS entropy otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }
}

impl<R: Rng> Shuffler for RandShuffler<R> {
    fn shuffle(&mut self, seq: &DnaSeq) -> DnaSeq {
        let mut bytes = seq.as_bytes().to_vec();
        bytes.shuffle(&mut self.rng);
        DnaSeq::from_bytes_unchecked(bytes)
    }
}

impl OrfScanner {
    /// Shortest of the longest ORFs found across `trials` shuffles of `seq`.
    ///
    /// An ORF in `seq` must be longer than this to beat the weakest random
    /// maximum. With zero trials the result is `seq.len()`. Fails with
    /// `NoOrfFound` as soon as a shuffle contains no ORF at all.
    pub fn noncoding_orf_threshold<S>(
        &self,
        seq: &DnaSeq,
        trials: usize,
        shuffler: &mut S,
    ) -> GeneResult<usize>
    where
        S: Shuffler + ?Sized,
    {
        let mut shortest = seq.len();
        for trial in 0..trials {
            let shuffled = shuffler.shuffle(seq);
            let longest = self.find_longest_orf(&shuffled)?.len();
            trace!("trial {trial}: longest shuffled orf {longest} nt");
            shortest = shortest.min(longest);
        }
        debug!(
            "null-model threshold {shortest} nt from {trials} shuffles of {} nt",
            seq.len()
        );
        Ok(shortest)
    }
}
