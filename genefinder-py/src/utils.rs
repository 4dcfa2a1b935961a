use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;

use genefinder_core::error::GeneError;
use genefinder_core::seq::DnaSeq;

pub fn to_py_err(err: GeneError) -> PyErr {
    match err {
        GeneError::FastaIo(io) => PyIOError::new_err(io.to_string()),
        other => PyValueError::new_err(other.to_string()),
    }
}

pub fn parse_strand(strand: &str) -> PyResult<DnaSeq> {
    strand.parse::<DnaSeq>().map_err(to_py_err)
}

pub fn to_strings<T: ToString>(items: &[T]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}
