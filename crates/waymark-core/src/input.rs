//! Opening input files.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::LoadError;

/// Opens `path` for buffered reading.
///
/// # Errors
///
/// Returns `LoadError::Open` carrying the path if the file cannot be opened.
pub fn open(path: &Path) -> Result<BufReader<File>, LoadError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })
}

/// Reads all of `path` into memory.
///
/// # Errors
///
/// Returns `LoadError::Open` carrying the path if the file cannot be read.
pub fn read_to_string(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};

    use super::*;

    #[test]
    fn test_open_missing_file_returns_open_error() {
        let result = open(Path::new("definitely/not/here.json"));

        match result {
            Err(LoadError::Open { path, .. }) => {
                assert_eq!(path, Path::new("definitely/not/here.json"));
            }
            other => panic!("expected Open error, got {other:?}"),
        }
    }

    #[test]
    fn test_read_to_string_returns_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "hello").unwrap();

        let contents = read_to_string(file.path()).unwrap();

        assert_eq!(contents, "hello");
    }

    #[test]
    fn test_open_reads_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "line").unwrap();

        let mut buf = String::new();
        open(file.path()).unwrap().read_to_string(&mut buf).unwrap();

        assert_eq!(buf, "line");
    }
}
