use std::ops::Range;

use crate::constraints::{Constraint, Evaluation};
use crate::genetic_code::GeneticCode;
use crate::problem::MutationSpace;

/// The sequence must keep encoding `protein`, stops included.
///
/// Also confines every codon slot to the synonyms of its residue, so the
/// solver never proposes a non-synonymous change.
#[derive(Debug, Clone)]
pub struct EnforceTranslation {
    protein: Vec<u8>,
    code: GeneticCode,
}

impl EnforceTranslation {
    pub fn new(protein: impl Into<Vec<u8>>, code: GeneticCode) -> Self {
        let mut protein = protein.into();
        protein.make_ascii_uppercase();
        Self { protein, code }
    }

    pub fn protein(&self) -> &[u8] {
        &self.protein
    }
}

impl Constraint for EnforceTranslation {
    fn evaluate(&self, seq: &[u8]) -> Evaluation {
        let mut breaches = Vec::new();
        for (slot, codon) in seq.chunks(3).enumerate() {
            let expected = self.protein.get(slot).copied();
            if expected.is_none() || self.code.translate_codon(codon) != expected {
                breaches.push(slot * 3..slot * 3 + codon.len());
            }
        }
        let mismatches = breaches.len();
        let missing = self.protein.len().saturating_sub(seq.len().div_ceil(3));
        if missing > 0 {
            breaches.push(seq.len()..seq.len());
        }

        if breaches.is_empty() {
            Evaluation::pass()
        } else {
            Evaluation::fail((mismatches + missing) as f64, breaches)
        }
    }

    /// Mismatching codons among the slots touching `region`.
    fn local_penalty(&self, seq: &[u8], region: Range<usize>) -> f64 {
        let first = region.start / 3;
        let last = region.end.min(seq.len()).div_ceil(3);
        (first..last)
            .filter(|&slot| {
                let codon = &seq[slot * 3..(slot * 3 + 3).min(seq.len())];
                let expected = self.protein.get(slot).copied();
                expected.is_none() || self.code.translate_codon(codon) != expected
            })
            .count() as f64
    }

    fn label(&self) -> String {
        "EnforceTranslation".to_string()
    }

    fn restrict_mutations(&self, space: &mut MutationSpace) {
        for (slot, &aa) in self.protein.iter().enumerate() {
            space.restrict(slot, self.code.synonymous_codons(aa));
        }
    }
}
