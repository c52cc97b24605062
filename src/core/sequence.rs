use std::fmt;

use serde::{Serialize, Serializer};

/// An immutable, fully in-memory sequence of symbols.
///
/// Symbols are compared as raw bytes; no case folding or alphabet
/// normalization is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Sequence(Vec<u8>);

impl Sequence {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The window `[start, start + length)`, clamped to the sequence bounds
    #[must_use]
    pub fn window(&self, start: usize, length: usize) -> &[u8] {
        let start = start.min(self.0.len());
        let end = start.saturating_add(length).min(self.0.len());
        &self.0[start..end]
    }
}

impl From<&str> for Sequence {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

impl From<String> for Sequence {
    fn from(s: String) -> Self {
        Self(s.into_bytes())
    }
}

impl From<Vec<u8>> for Sequence {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Sequence {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

impl Serialize for Sequence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&String::from_utf8_lossy(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_from_str() {
        let seq = Sequence::from("ACGT");
        assert_eq!(seq.len(), 4);
        assert!(!seq.is_empty());
        assert_eq!(seq.as_bytes(), b"ACGT");
        assert_eq!(seq.to_string(), "ACGT");
    }

    #[test]
    fn test_sequence_window_clamps() {
        let seq = Sequence::from("ACGTACGT");
        assert_eq!(seq.window(4, 4), b"ACGT");
        assert_eq!(seq.window(6, 10), b"GT");
        assert_eq!(seq.window(20, 1), b"");
    }

    #[test]
    fn test_empty_sequence() {
        let seq = Sequence::default();
        assert!(seq.is_empty());
        assert_eq!(seq.to_string(), "");
    }
}
