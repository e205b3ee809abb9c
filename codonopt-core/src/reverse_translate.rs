//! Protein to DNA back-translation.

use codonopt_contracts::{EngineError, EngineResult};
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::genetic_code::GeneticCode;

/// Back-translate `protein`, picking one synonymous codon per residue
/// uniformly at random.
///
/// Residues are case-insensitive; `*` maps to a stop codon. The result is
/// only a starting point for constraint resolution, so codon usage is
/// ignored here.
pub fn reverse_translate<R: Rng + ?Sized>(
    protein: &str,
    code: &GeneticCode,
    rng: &mut R,
) -> EngineResult<String> {
    let mut dna = String::with_capacity(protein.len() * 3);
    for (position, residue) in protein.trim().chars().enumerate() {
        let codon = u8::try_from(residue)
            .ok()
            .filter(u8::is_ascii)
            .and_then(|aa| code.synonymous_codons(aa).choose(&mut *rng))
            .ok_or(EngineError::InvalidResidue { position, residue })?;
        dna.extend(codon.iter().map(|&b| b as char));
    }
    Ok(dna)
}
