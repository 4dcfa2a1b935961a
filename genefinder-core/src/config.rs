/// Shuffles used for the null-model threshold unless configured otherwise.
pub const DEFAULT_TRIALS: usize = 1500;

/// Settings for a [`GeneFinder`](crate::pipeline::GeneFinder) run.
///
/// ```rust
/// use genefinder_core::config::GeneFinderConfig;
///
/// let config = GeneFinderConfig::default().with_trials(200).with_seed(7);
/// assert_eq!(config.trials, 200);
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneFinderConfig {
    /// Number of shuffles behind the null-model length threshold.
    pub trials: usize,
    /// Seed for the shuffle generator; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl GeneFinderConfig {
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for GeneFinderConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            seed: None,
        }
    }
}
