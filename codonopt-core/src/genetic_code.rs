//! Genetic code lookup, translation, and synonymous codon sets.
//!
//! Codons are indexed with the base encoding A=0, C=1, G=2, T/U=3, giving
//! indices in `[0, 64)`. Stops translate to `*`.

use codonopt_contracts::{EngineError, EngineResult};

/// A DNA codon as three uppercase bases.
pub type Codon = [u8; 3];

const BASES: [u8; 4] = [b'A', b'C', b'G', b'T'];

/// One slot per letter `A..=Z` plus one for `*`.
const AA_SLOTS: usize = 27;

fn base_index(b: u8) -> Option<usize> {
    match b.to_ascii_uppercase() {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'T' | b'U' => Some(3),
        _ => None,
    }
}

/// Convert a 3-base codon to an index in [0, 64).
pub fn codon_index(codon: &[u8]) -> Option<usize> {
    if codon.len() != 3 {
        return None;
    }
    let b1 = base_index(codon[0])?;
    let b2 = base_index(codon[1])?;
    let b3 = base_index(codon[2])?;
    Some(b1 * 16 + b2 * 4 + b3)
}

/// Convert an index in [0, 64) back to a DNA codon.
pub fn index_to_codon(idx: usize) -> Codon {
    [BASES[idx >> 4], BASES[(idx >> 2) & 3], BASES[idx & 3]]
}

fn aa_slot(aa: u8) -> Option<usize> {
    match aa.to_ascii_uppercase() {
        b'*' => Some(AA_SLOTS - 1),
        upper @ b'A'..=b'Z' => Some((upper - b'A') as usize),
        _ => None,
    }
}

// Codon order: AAA, AAC, AAG, AAT, ACA, ACC, ACG, ACT, AGA, AGC, AGG, AGT,
//              ATA, ATC, ATG, ATT, CAA, CAC, CAG, CAT, CCA, CCC, CCG, CCT,
//              CGA, CGC, CGG, CGT, CTA, CTC, CTG, CTT, GAA, GAC, GAG, GAT,
//              GCA, GCC, GCG, GCT, GGA, GGC, GGG, GGT, GTA, GTC, GTG, GTT,
//              TAA, TAC, TAG, TAT, TCA, TCC, TCG, TCT, TGA, TGC, TGG, TGT,
//              TTA, TTC, TTG, TTT

/// Standard genetic code (NCBI Table 1).
const STANDARD_AA: [u8; 64] = [
    b'K', b'N', b'K', b'N', b'T', b'T', b'T', b'T', b'R', b'S', b'R', b'S',
    b'I', b'I', b'M', b'I', b'Q', b'H', b'Q', b'H', b'P', b'P', b'P', b'P',
    b'R', b'R', b'R', b'R', b'L', b'L', b'L', b'L', b'E', b'D', b'E', b'D',
    b'A', b'A', b'A', b'A', b'G', b'G', b'G', b'G', b'V', b'V', b'V', b'V',
    b'*', b'Y', b'*', b'Y', b'S', b'S', b'S', b'S', b'*', b'C', b'W', b'C',
    b'L', b'F', b'L', b'F',
];

/// A genetic code translation table with precomputed synonymous codon
/// groups.
#[derive(Debug, Clone)]
pub struct GeneticCode {
    name: &'static str,
    table: [u8; 64],
    synonyms: Vec<Vec<Codon>>,
}

impl GeneticCode {
    fn from_table(name: &'static str, table: [u8; 64]) -> Self {
        let mut synonyms = vec![Vec::new(); AA_SLOTS];
        for (idx, &aa) in table.iter().enumerate() {
            if let Some(slot) = aa_slot(aa) {
                synonyms[slot].push(index_to_codon(idx));
            }
        }
        Self {
            name,
            table,
            synonyms,
        }
    }

    /// The standard genetic code (NCBI Table 1).
    pub fn standard() -> Self {
        Self::from_table("Standard", STANDARD_AA)
    }

    /// Look up a genetic code by name or NCBI table number.
    ///
    /// Table 11 (bacterial, archaeal and plant plastid) differs from the
    /// standard code only in its start codons, so it shares the amino acid
    /// table.
    pub fn by_name(name: &str) -> EngineResult<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "standard" | "1" | "sgc0" => Ok(Self::standard()),
            "bacterial" | "11" => {
                Ok(Self::from_table("Bacterial", STANDARD_AA))
            }
            _ => Err(EngineError::UnknownGeneticCode(name.to_string())),
        }
    }

    pub fn name(&self) -> &str {
        self.name
    }

    /// Amino acid for a codon, `*` for stops, `None` for non-ACGT input.
    pub fn translate_codon(&self, codon: &[u8]) -> Option<u8> {
        codon_index(codon).map(|idx| self.table[idx])
    }

    /// Translate a whole coding sequence, stops included as `*`.
    pub fn translate(&self, dna: &[u8]) -> EngineResult<Vec<u8>> {
        if dna.len() % 3 != 0 {
            return Err(EngineError::FrameLength { length: dna.len() });
        }
        let mut protein = Vec::with_capacity(dna.len() / 3);
        for (i, codon) in dna.chunks_exact(3).enumerate() {
            match self.translate_codon(codon) {
                Some(aa) => protein.push(aa),
                None => {
                    let offset = codon
                        .iter()
                        .position(|&b| base_index(b).is_none())
                        .unwrap_or(0);
                    let position = i * 3 + offset;
                    return Err(EngineError::InvalidBase {
                        position,
                        base: dna[position] as char,
                    });
                }
            }
        }
        Ok(protein)
    }

    /// Translate into a `String`, for callers working with text.
    pub fn translate_str(&self, dna: &str) -> EngineResult<String> {
        self.translate(dna.as_bytes())
            .map(|protein| String::from_utf8_lossy(&protein).into_owned())
    }

    /// All codons encoding `aa` in table order. Empty for unknown letters.
    pub fn synonymous_codons(&self, aa: u8) -> &[Codon] {
        aa_slot(aa)
            .map(|slot| self.synonyms[slot].as_slice())
            .unwrap_or(&[])
    }

    /// Whether `aa` is encoded by at least one codon (stops count).
    pub fn is_amino_acid(&self, aa: u8) -> bool {
        !self.synonymous_codons(aa).is_empty()
    }

    pub fn is_stop(&self, codon: &[u8]) -> bool {
        self.translate_codon(codon) == Some(b'*')
    }
}

impl Default for GeneticCode {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_spot_checks() {
        let code = GeneticCode::standard();
        assert_eq!(code.translate_codon(b"ATG"), Some(b'M'));
        assert_eq!(code.translate_codon(b"TGG"), Some(b'W'));
        assert_eq!(code.translate_codon(b"TAA"), Some(b'*'));
        assert_eq!(code.translate_codon(b"TGA"), Some(b'*'));
        assert_eq!(code.translate_codon(b"aaa"), Some(b'K'));
        assert_eq!(code.translate_codon(b"ANA"), None);
    }

    #[test]
    fn translate_includes_stops() {
        let code = GeneticCode::standard();
        let protein = code.translate(b"ATGAAACGTTAA").unwrap();
        assert_eq!(protein, b"MKR*");
    }

    #[test]
    fn translate_rejects_partial_codons() {
        let code = GeneticCode::standard();
        assert_eq!(
            code.translate(b"ATGAA"),
            Err(EngineError::FrameLength { length: 5 })
        );
    }

    #[test]
    fn translate_reports_invalid_base_position() {
        let code = GeneticCode::standard();
        assert_eq!(
            code.translate(b"ATGANA"),
            Err(EngineError::InvalidBase {
                position: 4,
                base: 'N'
            })
        );
    }

    #[test]
    fn synonym_groups_cover_all_64_codons() {
        let code = GeneticCode::standard();
        let total: usize = b"ACDEFGHIKLMNPQRSTVWY*"
            .iter()
            .map(|&aa| code.synonymous_codons(aa).len())
            .sum();
        assert_eq!(total, 64);
        assert_eq!(code.synonymous_codons(b'L').len(), 6);
        assert_eq!(code.synonymous_codons(b'M'), &[*b"ATG"]);
        assert_eq!(code.synonymous_codons(b'*').len(), 3);
        assert!(code.synonymous_codons(b'B').is_empty());
    }

    #[test]
    fn every_synonym_translates_back() {
        let code = GeneticCode::standard();
        for &aa in b"ACDEFGHIKLMNPQRSTVWY*" {
            for codon in code.synonymous_codons(aa) {
                assert_eq!(code.translate_codon(codon), Some(aa));
            }
        }
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(GeneticCode::by_name("Standard").unwrap().name(), "Standard");
        assert!(GeneticCode::by_name("11").is_ok());
        assert!(matches!(
            GeneticCode::by_name("Klingon"),
            Err(EngineError::UnknownGeneticCode(_))
        ));
    }
}
