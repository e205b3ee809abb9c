use crate::sequence_type::SequenceType;

/// A named sequence as it travels over the wire.
///
/// The JSON form is `{"name": ..., "type": "DNA" | "Protein", "seq": ...}`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sequence {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: SequenceType,
    pub seq: String,
}

impl Sequence {
    pub fn new(
        name: impl Into<String>,
        kind: SequenceType,
        seq: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            seq: seq.into(),
        }
    }

    pub fn dna(name: impl Into<String>, seq: impl Into<String>) -> Self {
        Self::new(name, SequenceType::Dna, seq)
    }

    pub fn protein(name: impl Into<String>, seq: impl Into<String>) -> Self {
        Self::new(name, SequenceType::Protein, seq)
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    pub fn len(&self) -> usize {
        self.seq.len()
    }
}
