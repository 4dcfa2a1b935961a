use pyo3::prelude::*;

mod fasta;
mod genes;
mod orf;
mod utils;

#[pymodule]
fn _native(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    orf::register(m)?;
    genes::register(m)?;
    fasta::register(m)?;
    Ok(())
}
