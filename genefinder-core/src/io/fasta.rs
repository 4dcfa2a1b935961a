//! FASTA input for DNA strands.
//!
//! Sequence lines are upper-cased and stripped of whitespace as they are
//! read, so soft-masked files load; anything left outside `ACGT` is reported
//! with its offset inside the record's sequence.

use crate::error::{GeneError, GeneResult};
use crate::seq::dna::DnaSeq;
use crate::seq::record::SeqRecord;
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

/// Iterator over the records of a FASTA stream.
pub struct DnaRecords<R> {
    lines: Lines<R>,
    line_no: usize,
    // header already consumed while reading the previous record
    next_id: Option<Box<str>>,
}

impl<R: BufRead> DnaRecords<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
            next_id: None,
        }
    }

    fn next_line(&mut self) -> Option<GeneResult<String>> {
        let line = self.lines.next()?;
        self.line_no += 1;
        Some(line.map_err(GeneError::from))
    }

    fn first_header(&mut self) -> Option<GeneResult<Box<str>>> {
        loop {
            let line = match self.next_line()? {
                Ok(line) => line,
                Err(err) => return Some(Err(err)),
            };
            if line.trim().is_empty() {
                continue;
            }
            return Some(match line.strip_prefix('>') {
                Some(header) => header_id(header, self.line_no),
                None => Err(GeneError::FastaFormat {
                    msg: "expected header line starting with '>'",
                    line: self.line_no,
                }),
            });
        }
    }

    fn read_record(&mut self, id: Box<str>) -> GeneResult<SeqRecord> {
        let mut bytes = Vec::new();
        while let Some(line) = self.next_line() {
            let line = line?;
            if let Some(header) = line.strip_prefix('>') {
                self.next_id = Some(header_id(header, self.line_no)?);
                break;
            }
            bytes.extend(
                line.bytes()
                    .filter(|b| !b.is_ascii_whitespace())
                    .map(|b| b.to_ascii_uppercase()),
            );
        }
        let seq = DnaSeq::new(bytes)?;
        Ok(SeqRecord { id, seq })
    }
}

impl<R: BufRead> Iterator for DnaRecords<R> {
    type Item = GeneResult<SeqRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = match self.next_id.take() {
            Some(id) => Ok(id),
            None => self.first_header()?,
        };
        Some(id.and_then(|id| self.read_record(id)))
    }
}

/// The first whitespace-delimited token of a header line, without the `>`.
fn header_id(header: &str, line: usize) -> GeneResult<Box<str>> {
    header
        .split_whitespace()
        .next()
        .map(Box::from)
        .ok_or(GeneError::FastaFormat {
            msg: "empty header",
            line,
        })
}

pub fn read_records<R: BufRead>(reader: R) -> GeneResult<Vec<SeqRecord>> {
    DnaRecords::new(reader).collect()
}

pub fn read_records_from_path(path: impl AsRef<Path>) -> GeneResult<Vec<SeqRecord>> {
    read_records(BufReader::new(File::open(path)?))
}

/// Sequence of the first record in the FASTA file at `path`; later records
/// are not read.
pub fn load_sequence(path: impl AsRef<Path>) -> GeneResult<DnaSeq> {
    let path = path.as_ref();
    let record = DnaRecords::new(BufReader::new(File::open(path)?))
        .next()
        .ok_or_else(|| GeneError::EmptyFasta {
            path: path.display().to_string(),
        })??;
    debug!(
        "loaded record {} ({} nt) from {}",
        record.id(),
        record.seq().len(),
        path.display()
    );
    Ok(record.into_seq())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn records(data: &[u8]) -> GeneResult<Vec<SeqRecord>> {
        read_records(data)
    }

    #[test]
    fn single_record() {
        let recs = records(b">seq1\nACGT\n").unwrap();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].id(), "seq1");
        assert_eq!(recs[0].seq().as_str(), "ACGT");
    }

    #[test]
    fn id_stops_at_whitespace_and_lines_join() {
        let recs = records(b">seq1 some desc here\nAC\nGT\n").unwrap();
        assert_eq!(recs[0].id(), "seq1");
        assert_eq!(recs[0].seq().as_str(), "ACGT");
    }

    #[test]
    fn soft_masked_bases_are_upper_cased() {
        let recs = records(b">chr\nacgt\r\nAC\n").unwrap();
        assert_eq!(recs[0].seq().as_str(), "ACGTAC");
    }

    #[test]
    fn foreign_base_reported_within_record() {
        match records(b">a\nAC\n>b\nAC\ngtNN\n") {
            Err(GeneError::InvalidNucleotide { ch: 'N', pos: 4 }) => {}
            other => panic!("expected invalid nucleotide, got {other:?}"),
        }
    }

    #[test]
    fn multiple_records_and_empty_sequence() {
        let recs = records(b"\n>seq1\n>seq2\nGT\n").unwrap();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].id(), "seq1");
        assert!(recs[0].seq().is_empty());
        assert_eq!(recs[1].id(), "seq2");
        assert_eq!(recs[1].seq().as_str(), "GT");
    }

    #[test]
    fn text_before_first_header() {
        match records(b"ACGT\n>seq1\nAC\n") {
            Err(GeneError::FastaFormat { line: 1, .. }) => {}
            other => panic!("expected fasta format error, got {other:?}"),
        }
    }

    #[test]
    fn blank_header() {
        match records(b">seq1\nAC\n>  \nGT\n") {
            Err(GeneError::FastaFormat { line: 3, msg }) => assert_eq!(msg, "empty header"),
            other => panic!("expected empty header error, got {other:?}"),
        }
    }

    #[test]
    fn load_sequence_takes_first_record() {
        let path = std::env::temp_dir().join(format!("genefinder-load-{}.fa", std::process::id()));
        let mut file = File::create(&path).unwrap();
        writeln!(file, ">first\nATGC\nAT\n>second\nGGGG").unwrap();
        drop(file);

        let seq = load_sequence(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(seq.as_str(), "ATGCAT");
    }

    #[test]
    fn load_sequence_empty_file() {
        let path = std::env::temp_dir().join(format!("genefinder-empty-{}.fa", std::process::id()));
        File::create(&path).unwrap();

        let err = load_sequence(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(err, GeneError::EmptyFasta { .. }));
    }

    #[test]
    fn load_sequence_missing_file() {
        let err = load_sequence("/nonexistent/genefinder/input.fa").unwrap_err();
        assert!(matches!(err, GeneError::FastaIo(_)));
    }
}
