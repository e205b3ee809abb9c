use std::fmt::{Display, Formatter};

/// Alphabet a submitted sequence is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SequenceType {
    /// Nucleotide sequence over A/C/G/T
    #[cfg_attr(feature = "serde", serde(rename = "DNA"))]
    Dna,
    /// Amino acid sequence, one letter per residue, `*` for stop
    #[cfg_attr(feature = "serde", serde(rename = "Protein"))]
    Protein,
}

impl SequenceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SequenceType::Dna => "DNA",
            SequenceType::Protein => "Protein",
        }
    }
}

impl Display for SequenceType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
