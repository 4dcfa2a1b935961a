#![allow(clippy::useless_conversion)]

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyModule;

use crate::utils::{parse_strand, to_py_err, to_strings};
use genefinder_core::alphabets::dna;
use genefinder_core::orf::{OrfScanner, Translator};

#[pyfunction]
fn get_complement(nucleotide: &str) -> PyResult<String> {
    match nucleotide.as_bytes() {
        [b] => {
            let c = dna::complement(*b).map_err(to_py_err)?;
            Ok(char::from(c).to_string())
        }
        _ => Err(PyValueError::new_err(
            "get_complement() expects exactly one nucleotide",
        )),
    }
}

#[pyfunction]
fn get_reverse_complement(strand: &str) -> PyResult<String> {
    Ok(parse_strand(strand)?.reverse_complement().to_string())
}

#[pyfunction]
fn rest_of_orf(strand: &str) -> PyResult<String> {
    let seq = parse_strand(strand)?;
    Ok(OrfScanner::default().rest_of_orf(&seq).to_string())
}

#[pyfunction]
fn find_all_orfs_one_frame(strand: &str) -> PyResult<Vec<String>> {
    let seq = parse_strand(strand)?;
    Ok(to_strings(&OrfScanner::default().find_all_orfs_one_frame(&seq)))
}

#[pyfunction]
fn find_all_orfs(strand: &str) -> PyResult<Vec<String>> {
    let seq = parse_strand(strand)?;
    Ok(to_strings(&OrfScanner::default().find_all_orfs(&seq)))
}

#[pyfunction]
fn find_all_orfs_both_strands(strand: &str) -> PyResult<Vec<String>> {
    let seq = parse_strand(strand)?;
    Ok(to_strings(
        &OrfScanner::default().find_all_orfs_both_strands(&seq),
    ))
}

#[pyfunction]
fn find_longest_orf(strand: &str) -> PyResult<String> {
    let seq = parse_strand(strand)?;
    let orf = OrfScanner::default()
        .find_longest_orf(&seq)
        .map_err(to_py_err)?;
    Ok(orf.to_string())
}

#[pyfunction]
fn encode_amino_acids(orf: &str) -> PyResult<String> {
    let seq = parse_strand(orf)?;
    Ok(Translator::default().encode_amino_acids(&seq).to_string())
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(get_complement, m)?)?;
    m.add_function(wrap_pyfunction!(get_reverse_complement, m)?)?;
    m.add_function(wrap_pyfunction!(rest_of_orf, m)?)?;
    m.add_function(wrap_pyfunction!(find_all_orfs_one_frame, m)?)?;
    m.add_function(wrap_pyfunction!(find_all_orfs, m)?)?;
    m.add_function(wrap_pyfunction!(find_all_orfs_both_strands, m)?)?;
    m.add_function(wrap_pyfunction!(find_longest_orf, m)?)?;
    m.add_function(wrap_pyfunction!(encode_amino_acids, m)?)?;
    Ok(())
}
