//! Codon usage objective.

use crate::codon_usage::CodonUsageTable;

/// Floor for codons absent from a table so `ln` stays finite.
const MIN_ADAPTIVENESS: f64 = 1e-4;

/// "Use best codon" optimization toward one organism.
///
/// The score of a sequence is the sum of `ln(w)` over its codons, where `w`
/// is the relative adaptiveness of the codon. It is never positive and
/// reaches `0.0` only when every codon is the most frequent synonym.
#[derive(Debug, Clone)]
pub struct CodonOptimize {
    table: CodonUsageTable,
}

impl CodonOptimize {
    pub fn new(table: CodonUsageTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &CodonUsageTable {
        &self.table
    }

    /// Contribution of a single codon to [`CodonOptimize::score`].
    pub fn codon_score(&self, codon: &[u8]) -> f64 {
        self.table
            .relative_adaptiveness(codon)
            .max(MIN_ADAPTIVENESS)
            .ln()
    }

    pub fn score(&self, seq: &[u8]) -> f64 {
        seq.chunks_exact(3).map(|codon| self.codon_score(codon)).sum()
    }

    pub fn label(&self) -> String {
        format!("CodonOptimize({})", self.table.species())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genetic_code::GeneticCode;

    fn e_coli() -> CodonOptimize {
        CodonOptimize::new(
            CodonUsageTable::for_species("e_coli", &GeneticCode::standard())
                .unwrap(),
        )
    }

    #[test]
    fn best_codons_score_zero() {
        assert_eq!(e_coli().score(b"ATGAAACGCTAA"), 0.0);
    }

    #[test]
    fn rare_codons_lower_the_score() {
        let objective = e_coli();
        let best = objective.score(b"ATGAAACGCTAA");
        let rare = objective.score(b"ATGAAGAGGTAG");
        assert!(rare < best);
        assert!(objective.codon_score(b"AGG") < objective.codon_score(b"CGT"));
    }

    #[test]
    fn label_names_the_species() {
        assert_eq!(e_coli().label(), "CodonOptimize(e_coli)");
    }
}
