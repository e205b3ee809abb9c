use crate::sequence::Sequence;

/// Batch of sequences submitted for codon optimization.
///
/// Order is significant: the response lists results in the same order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CodonOptimizeRequest {
    pub sequences: Vec<Sequence>,
}

/// One input sequence paired with its optimized DNA counterpart.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CodonOptimizedSequence {
    pub original: Sequence,
    pub codon_optimized: Sequence,
}

impl CodonOptimizedSequence {
    /// Pair `original` with an optimized DNA string. The optimized entry
    /// keeps the original name and is always typed as DNA.
    pub fn new(original: Sequence, optimized_dna: impl Into<String>) -> Self {
        let codon_optimized =
            Sequence::dna(original.name.clone(), optimized_dna);
        Self {
            original,
            codon_optimized,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CodonOptimizeResponse {
    pub sequences: Vec<CodonOptimizedSequence>,
}

impl CodonOptimizeResponse {
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SequenceType;

    #[test]
    fn optimized_entry_is_dna_and_keeps_name() {
        let original = Sequence::protein("gfp", "MKR*");
        let paired = CodonOptimizedSequence::new(original.clone(), "ATGAAACGTTAA");

        assert_eq!(paired.original, original);
        assert_eq!(paired.codon_optimized.name, "gfp");
        assert_eq!(paired.codon_optimized.kind, SequenceType::Dna);
        assert_eq!(paired.codon_optimized.seq, "ATGAAACGTTAA");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn request_uses_type_field_on_the_wire() {
        let raw = r#"{"sequences":[{"name":"s1","type":"DNA","seq":"ATG"}]}"#;
        let request: CodonOptimizeRequest = serde_json::from_str(raw).unwrap();
        assert_eq!(request.sequences[0], Sequence::dna("s1", "ATG"));

        let back = serde_json::to_value(&request).unwrap();
        assert_eq!(back["sequences"][0]["type"], "DNA");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn missing_sequences_field_is_rejected() {
        let result = serde_json::from_str::<CodonOptimizeRequest>("{}");
        assert!(result.is_err());
    }
}
