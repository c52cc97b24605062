//! Reader for single-record reference files.
//!
//! The first line (a FASTA-style `>` header or any other metadata) is discarded.
//! Every following line is trimmed of surrounding whitespace and appended to the
//! reference, so a multi-record file is read as one concatenated sequence.

use std::io::BufRead;
use std::path::Path;

use tracing::{debug, warn};

use crate::core::sequence::Sequence;
use crate::parsing::{open_input, ParseError};

/// Read the reference sequence from `path` (`-` for stdin, `.gz`/`.bgz` decompressed).
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read.
pub fn read_reference(path: &Path) -> Result<Sequence, ParseError> {
    let reference = parse_reference(open_input(path)?)?;

    if reference.is_empty() {
        warn!("Reference {} contains no sequence", path.display());
    } else {
        debug!(
            "Loaded reference {} ({} symbols)",
            path.display(),
            reference.len()
        );
    }

    Ok(reference)
}

/// Parse a reference from any buffered reader.
///
/// # Errors
///
/// Returns `ParseError::Io` on read failure.
pub fn parse_reference<R: BufRead>(reader: R) -> Result<Sequence, ParseError> {
    let mut bases = Vec::new();

    for line in reader.split(b'\n').skip(1) {
        bases.extend_from_slice(line?.trim_ascii());
    }

    Ok(Sequence::new(bases))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_reference() {
        let text = ">chr1 description\nACGTACGT\nACGT\n";
        let reference = parse_reference(Cursor::new(text)).unwrap();
        assert_eq!(reference, Sequence::from("ACGTACGTACGT"));
    }

    #[test]
    fn test_parse_reference_trims_whitespace() {
        let text = ">ref\r\n  ACGT  \r\n\r\nGG\t\n";
        let reference = parse_reference(Cursor::new(text)).unwrap();
        assert_eq!(reference, Sequence::from("ACGTGG"));
    }

    #[test]
    fn test_parse_reference_without_trailing_newline() {
        let reference = parse_reference(Cursor::new(">ref\nAC\nGT")).unwrap();
        assert_eq!(reference, Sequence::from("ACGT"));
    }

    #[test]
    fn test_parse_reference_header_only() {
        assert!(parse_reference(Cursor::new(">ref\n")).unwrap().is_empty());
        assert!(parse_reference(Cursor::new("")).unwrap().is_empty());
    }

    #[test]
    fn test_second_header_is_concatenated() {
        // Only the first line is treated as metadata
        let reference = parse_reference(Cursor::new(">a\nAC\n>b\nGT\n")).unwrap();
        assert_eq!(reference, Sequence::from("AC>bGT"));
    }

    #[test]
    fn test_read_reference_file() {
        let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
        temp.write_all(b">chr1\nACGT\nACGT\n").unwrap();
        temp.flush().unwrap();

        let reference = read_reference(temp.path()).unwrap();
        assert_eq!(reference.len(), 8);
    }
}
