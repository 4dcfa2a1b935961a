#![allow(clippy::useless_conversion)]

use pyo3::prelude::*;
use pyo3::types::PyModule;

use crate::utils::to_py_err;
use genefinder_core::io::fasta;

/// Sequence of the first record, upper-cased.
#[pyfunction]
fn load_fasta_file(path: &str) -> PyResult<String> {
    let seq = fasta::load_sequence(path).map_err(to_py_err)?;
    Ok(seq.to_string())
}

/// All records as `(id, sequence)` pairs.
#[pyfunction]
fn read_fasta(path: &str) -> PyResult<Vec<(String, String)>> {
    let records = fasta::read_records_from_path(path).map_err(to_py_err)?;
    Ok(records
        .into_iter()
        .map(|r| (r.id().to_string(), r.seq().to_string()))
        .collect())
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(load_fasta_file, m)?)?;
    m.add_function(wrap_pyfunction!(read_fasta, m)?)?;
    Ok(())
}
