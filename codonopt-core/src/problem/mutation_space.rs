use std::ops::Range;

use crate::genetic_code::{Codon, index_to_codon};

/// The codons each slot of a coding sequence may take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationSpace {
    choices: Vec<Vec<Codon>>,
}

impl MutationSpace {
    /// Every slot may take any of the 64 codons.
    pub fn unrestricted(slots: usize) -> Self {
        let all: Vec<Codon> = (0..64).map(index_to_codon).collect();
        Self {
            choices: vec![all; slots],
        }
    }

    /// Replace the options of `slot`. Out-of-range slots are ignored.
    pub fn restrict(&mut self, slot: usize, options: &[Codon]) {
        if let Some(choices) = self.choices.get_mut(slot) {
            choices.retain(|codon| options.contains(codon));
        }
    }

    pub fn slots(&self) -> usize {
        self.choices.len()
    }

    pub fn choices(&self, slot: usize) -> &[Codon] {
        self.choices.get(slot).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `slot` has more than one option.
    pub fn is_mutable(&self, slot: usize) -> bool {
        self.choices(slot).len() > 1
    }

    /// Codon slots touching the nucleotide range `span`, widened by
    /// `margin` slots on each side.
    pub fn slots_around(&self, span: &Range<usize>, margin: usize) -> Range<usize> {
        let first = (span.start / 3).saturating_sub(margin);
        let last = span.end.max(span.start + 1).div_ceil(3) + margin;
        first.min(self.slots())..last.min(self.slots())
    }

    /// Number of joint assignments over `slots`, saturating.
    pub fn combinations(&self, slots: &Range<usize>) -> u64 {
        slots.clone().fold(1u64, |acc, slot| {
            acc.saturating_mul(self.choices(slot).len().max(1) as u64)
        })
    }
}
