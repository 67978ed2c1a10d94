//! Problem readers.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::StringRecord;
use waymark_core::error::LoadError;
use waymark_core::input;

use crate::problem::Problem;

const CSV: &str = "CSV";

/// Reads problems from some source.
pub trait ProblemReader {
    /// Reads the next problem, or `None` at the end of the source.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the source is unreadable or malformed.
    fn read(&mut self) -> Result<Option<Problem>, LoadError>;

    /// Reads every remaining problem. Fails as a whole on the first bad
    /// record.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if any record is unreadable or malformed.
    fn read_all(&mut self) -> Result<Vec<Problem>, LoadError> {
        let mut problems = Vec::new();
        while let Some(problem) = self.read()? {
            problems.push(problem);
        }
        Ok(problems)
    }
}

/// Reads problems from headerless CSV where every row is exactly
/// `question,answer`.
#[derive(Debug)]
pub struct CsvProblemReader<R> {
    csv: csv::Reader<R>,
    record: StringRecord,
}

impl<R: Read> CsvProblemReader<R> {
    /// Wraps `reader`.
    pub fn new(reader: R) -> Self {
        let csv = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);
        Self {
            csv,
            record: StringRecord::new(),
        }
    }
}

impl CsvProblemReader<BufReader<File>> {
    /// Opens the CSV file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Open` if the file cannot be opened.
    pub fn open(path: &Path) -> Result<Self, LoadError> {
        input::open(path).map(Self::new)
    }
}

impl<R: Read> ProblemReader for CsvProblemReader<R> {
    fn read(&mut self) -> Result<Option<Problem>, LoadError> {
        if !self
            .csv
            .read_record(&mut self.record)
            .map_err(|e| LoadError::parse(CSV, e))?
        {
            return Ok(None);
        }

        match (self.record.get(0), self.record.get(1), self.record.len()) {
            (Some(question), Some(answer), 2) => Ok(Some(Problem::new(question, answer))),
            (.., fields) => {
                let line = self.record.position().map_or(0, csv::Position::line);
                Err(LoadError::Parse {
                    format: CSV,
                    message: format!("record on line {line} has {fields} fields, expected 2"),
                })
            }
        }
    }
}
