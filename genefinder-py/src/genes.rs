#![allow(clippy::useless_conversion)]

use pyo3::prelude::*;
use pyo3::types::PyModule;

use crate::utils::{parse_strand, to_py_err, to_strings};
use genefinder_core::config::{GeneFinderConfig, DEFAULT_TRIALS};
use genefinder_core::orf::{OrfScanner, RandShuffler};
use genefinder_core::pipeline::GeneFinder;

#[pyfunction]
#[pyo3(signature = (strand, num_trials, seed=None))]
fn noncoding_orf_threshold(strand: &str, num_trials: usize, seed: Option<u64>) -> PyResult<usize> {
    let seq = parse_strand(strand)?;
    OrfScanner::default()
        .noncoding_orf_threshold(&seq, num_trials, &mut RandShuffler::from_seed(seed))
        .map_err(to_py_err)
}

#[pyfunction]
#[pyo3(signature = (path, num_trials=DEFAULT_TRIALS, seed=None))]
fn find_genes(path: &str, num_trials: usize, seed: Option<u64>) -> PyResult<Vec<String>> {
    let config = GeneFinderConfig {
        trials: num_trials,
        seed,
    };
    let genes = GeneFinder::new(config).find_genes(path).map_err(to_py_err)?;
    Ok(to_strings(&genes))
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(noncoding_orf_threshold, m)?)?;
    m.add_function(wrap_pyfunction!(find_genes, m)?)?;
    Ok(())
}
