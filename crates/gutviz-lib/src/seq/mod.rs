//! Residue string wrapper shared by the JSON views.

use std::any::Any;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::json::Convertible;

/// An owned biological sequence (amino-acid or nucleotide residues).
///
/// Serializes as its plain string representation everywhere: via `serde`,
/// via `Display`, and through the JSON adapter's conversion hook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence(String);

impl Sequence {
    pub fn new(residues: impl Into<String>) -> Self {
        Self(residues.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of residues.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Sequence {
    fn from(residues: &str) -> Self {
        Self::new(residues)
    }
}

impl From<String> for Sequence {
    fn from(residues: String) -> Self {
        Self(residues)
    }
}

impl Serialize for Sequence {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl Convertible for Sequence {
    fn type_name(&self) -> &'static str {
        "Sequence"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_residues(&self) -> Option<&str> {
        Some(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_raw_residues() {
        let seq = Sequence::new("MKTAYIAK");
        assert_eq!(seq.to_string(), "MKTAYIAK");
        assert_eq!(seq.as_str(), "MKTAYIAK");
        assert_eq!(seq.len(), 8);
    }

    #[test]
    fn empty_sequence() {
        let seq = Sequence::from("");
        assert!(seq.is_empty());
        assert_eq!(seq.len(), 0);
    }

    #[test]
    fn serde_serializes_as_plain_string() {
        let seq = Sequence::from("ATGAAAACG");
        assert_eq!(serde_json::to_string(&seq).unwrap(), "\"ATGAAAACG\"");
    }

    #[test]
    fn exposes_residues_to_the_conversion_hook() {
        let seq = Sequence::new("MKT");
        assert_eq!(seq.as_residues(), Some("MKT"));
    }
}
