//! Per-species codon usage tables.
//!
//! Frequencies are relative to the synonymous codon group of each amino
//! acid (each group sums to ~1.0), following the Kazusa codon usage
//! database conventions.

use codonopt_contracts::{EngineError, EngineResult};

use crate::genetic_code::{Codon, GeneticCode, codon_index};

/// Escherichia coli K-12 (taxid 316407).
const E_COLI: &[(&[u8; 3], f64)] = &[
    (b"TAA", 0.64), (b"TAG", 0.07), (b"TGA", 0.29),
    (b"GCA", 0.21), (b"GCC", 0.27), (b"GCG", 0.36), (b"GCT", 0.16),
    (b"TGC", 0.56), (b"TGT", 0.44),
    (b"GAC", 0.37), (b"GAT", 0.63),
    (b"GAA", 0.69), (b"GAG", 0.31),
    (b"TTC", 0.43), (b"TTT", 0.57),
    (b"GGA", 0.11), (b"GGC", 0.40), (b"GGG", 0.15), (b"GGT", 0.34),
    (b"CAC", 0.43), (b"CAT", 0.57),
    (b"ATA", 0.07), (b"ATC", 0.42), (b"ATT", 0.51),
    (b"AAA", 0.76), (b"AAG", 0.24),
    (b"CTA", 0.04), (b"CTC", 0.10), (b"CTG", 0.50), (b"CTT", 0.10),
    (b"TTA", 0.13), (b"TTG", 0.13),
    (b"ATG", 1.00),
    (b"AAC", 0.55), (b"AAT", 0.45),
    (b"CCA", 0.19), (b"CCC", 0.12), (b"CCG", 0.53), (b"CCT", 0.16),
    (b"CAA", 0.35), (b"CAG", 0.65),
    (b"AGA", 0.04), (b"AGG", 0.02), (b"CGA", 0.06), (b"CGC", 0.40),
    (b"CGG", 0.10), (b"CGT", 0.38),
    (b"AGC", 0.28), (b"AGT", 0.15), (b"TCA", 0.12), (b"TCC", 0.15),
    (b"TCG", 0.15), (b"TCT", 0.15),
    (b"ACA", 0.13), (b"ACC", 0.44), (b"ACG", 0.27), (b"ACT", 0.16),
    (b"GTA", 0.15), (b"GTC", 0.22), (b"GTG", 0.37), (b"GTT", 0.26),
    (b"TGG", 1.00),
    (b"TAC", 0.43), (b"TAT", 0.57),
];

/// Saccharomyces cerevisiae (taxid 4932).
const S_CEREVISIAE: &[(&[u8; 3], f64)] = &[
    (b"TAA", 0.47), (b"TAG", 0.23), (b"TGA", 0.30),
    (b"GCA", 0.29), (b"GCC", 0.22), (b"GCG", 0.11), (b"GCT", 0.38),
    (b"TGC", 0.37), (b"TGT", 0.63),
    (b"GAC", 0.35), (b"GAT", 0.65),
    (b"GAA", 0.70), (b"GAG", 0.30),
    (b"TTC", 0.41), (b"TTT", 0.59),
    (b"GGA", 0.22), (b"GGC", 0.19), (b"GGG", 0.12), (b"GGT", 0.47),
    (b"CAC", 0.36), (b"CAT", 0.64),
    (b"ATA", 0.27), (b"ATC", 0.26), (b"ATT", 0.46),
    (b"AAA", 0.58), (b"AAG", 0.42),
    (b"CTA", 0.14), (b"CTC", 0.06), (b"CTG", 0.11), (b"CTT", 0.13),
    (b"TTA", 0.28), (b"TTG", 0.29),
    (b"ATG", 1.00),
    (b"AAC", 0.41), (b"AAT", 0.59),
    (b"CCA", 0.42), (b"CCC", 0.15), (b"CCG", 0.12), (b"CCT", 0.31),
    (b"CAA", 0.69), (b"CAG", 0.31),
    (b"AGA", 0.48), (b"AGG", 0.21), (b"CGA", 0.07), (b"CGC", 0.06),
    (b"CGG", 0.04), (b"CGT", 0.14),
    (b"AGC", 0.11), (b"AGT", 0.16), (b"TCA", 0.21), (b"TCC", 0.16),
    (b"TCG", 0.10), (b"TCT", 0.26),
    (b"ACA", 0.30), (b"ACC", 0.22), (b"ACG", 0.14), (b"ACT", 0.35),
    (b"GTA", 0.21), (b"GTC", 0.21), (b"GTG", 0.19), (b"GTT", 0.39),
    (b"TGG", 1.00),
    (b"TAC", 0.44), (b"TAT", 0.56),
];

/// Homo sapiens (taxid 9606).
const H_SAPIENS: &[(&[u8; 3], f64)] = &[
    (b"TAA", 0.30), (b"TAG", 0.24), (b"TGA", 0.47),
    (b"GCA", 0.23), (b"GCC", 0.40), (b"GCG", 0.11), (b"GCT", 0.26),
    (b"TGC", 0.54), (b"TGT", 0.46),
    (b"GAC", 0.54), (b"GAT", 0.46),
    (b"GAA", 0.42), (b"GAG", 0.58),
    (b"TTC", 0.54), (b"TTT", 0.46),
    (b"GGA", 0.25), (b"GGC", 0.34), (b"GGG", 0.25), (b"GGT", 0.16),
    (b"CAC", 0.58), (b"CAT", 0.42),
    (b"ATA", 0.17), (b"ATC", 0.47), (b"ATT", 0.36),
    (b"AAA", 0.43), (b"AAG", 0.57),
    (b"CTA", 0.07), (b"CTC", 0.20), (b"CTG", 0.40), (b"CTT", 0.13),
    (b"TTA", 0.08), (b"TTG", 0.13),
    (b"ATG", 1.00),
    (b"AAC", 0.53), (b"AAT", 0.47),
    (b"CCA", 0.28), (b"CCC", 0.32), (b"CCG", 0.11), (b"CCT", 0.29),
    (b"CAA", 0.27), (b"CAG", 0.73),
    (b"AGA", 0.21), (b"AGG", 0.21), (b"CGA", 0.11), (b"CGC", 0.18),
    (b"CGG", 0.20), (b"CGT", 0.08),
    (b"AGC", 0.24), (b"AGT", 0.15), (b"TCA", 0.15), (b"TCC", 0.22),
    (b"TCG", 0.05), (b"TCT", 0.19),
    (b"ACA", 0.28), (b"ACC", 0.36), (b"ACG", 0.11), (b"ACT", 0.25),
    (b"GTA", 0.12), (b"GTC", 0.24), (b"GTG", 0.46), (b"GTT", 0.18),
    (b"TGG", 1.00),
    (b"TAC", 0.56), (b"TAT", 0.44),
];

/// Built-in tables: canonical name, accepted aliases, data.
const BUILTIN: &[(&str, &[&str], &[(&[u8; 3], f64)])] = &[
    ("e_coli", &["e_coli_316407", "escherichia_coli"], E_COLI),
    (
        "s_cerevisiae",
        &["s_cerevisiae_4932", "saccharomyces_cerevisiae"],
        S_CEREVISIAE,
    ),
    ("h_sapiens", &["h_sapiens_9606", "homo_sapiens"], H_SAPIENS),
];

/// Names of the built-in codon usage tables.
pub fn available_species() -> Vec<&'static str> {
    BUILTIN.iter().map(|(name, _, _)| *name).collect()
}

/// Relative codon frequencies for one organism plus the derived relative
/// adaptiveness (`w`) of every codon.
#[derive(Debug, Clone)]
pub struct CodonUsageTable {
    species: &'static str,
    frequencies: [f64; 64],
    adaptiveness: [f64; 64],
    best: [Option<Codon>; 64],
}

impl CodonUsageTable {
    /// Load a built-in table. Lookup is case-insensitive and accepts the
    /// taxid-suffixed aliases.
    pub fn for_species(name: &str, code: &GeneticCode) -> EngineResult<Self> {
        let wanted = name.trim().to_ascii_lowercase();
        let (species, _, rows) = BUILTIN
            .iter()
            .find(|(canonical, aliases, _)| {
                *canonical == wanted || aliases.contains(&wanted.as_str())
            })
            .ok_or_else(|| EngineError::UnknownSpecies(name.to_string()))?;

        let mut frequencies = [0.0f64; 64];
        for (codon, freq) in rows.iter() {
            let idx = codon_index(&codon[..]).ok_or_else(|| {
                EngineError::Internal(format!(
                    "malformed codon in {species} table"
                ))
            })?;
            frequencies[idx] = *freq;
        }

        Ok(Self::from_frequencies(*species, frequencies, code))
    }

    fn from_frequencies(
        species: &'static str,
        frequencies: [f64; 64],
        code: &GeneticCode,
    ) -> Self {
        let mut adaptiveness = [0.0f64; 64];
        let mut best = [None; 64];

        for &aa in b"ACDEFGHIKLMNPQRSTVWY*" {
            let synonyms = code.synonymous_codons(aa);
            let top = synonyms
                .iter()
                .filter_map(|codon| {
                    codon_index(codon).map(|idx| (*codon, frequencies[idx]))
                })
                .fold(None::<(Codon, f64)>, |acc, (codon, freq)| match acc {
                    Some((_, best_freq)) if best_freq >= freq => acc,
                    _ => Some((codon, freq)),
                });

            let Some((top_codon, top_freq)) = top else {
                continue;
            };

            for codon in synonyms {
                if let Some(idx) = codon_index(codon) {
                    adaptiveness[idx] = if top_freq > 0.0 {
                        frequencies[idx] / top_freq
                    } else {
                        1.0
                    };
                    best[idx] = Some(top_codon);
                }
            }
        }

        Self {
            species,
            frequencies,
            adaptiveness,
            best,
        }
    }

    pub fn species(&self) -> &str {
        self.species
    }

    /// Frequency of `codon` among its synonyms, 0.0 for unknown codons.
    pub fn frequency(&self, codon: &[u8]) -> f64 {
        codon_index(codon).map_or(0.0, |idx| self.frequencies[idx])
    }

    /// `freq / max(freq of synonyms)`, in (0, 1] for known codons.
    pub fn relative_adaptiveness(&self, codon: &[u8]) -> f64 {
        codon_index(codon).map_or(0.0, |idx| self.adaptiveness[idx])
    }

    /// Most frequent codon encoding the same amino acid as `codon`.
    pub fn best_synonym(&self, codon: &[u8]) -> Option<Codon> {
        codon_index(codon).and_then(|idx| self.best[idx])
    }

    /// Most frequent codon for amino acid `aa`.
    pub fn best_codon(&self, aa: u8, code: &GeneticCode) -> Option<Codon> {
        code.synonymous_codons(aa)
            .first()
            .and_then(|codon| self.best_synonym(codon))
    }
}
