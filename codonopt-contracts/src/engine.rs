use rand::rngs::StdRng;

use crate::error::EngineResult;

/// Random source handed to the engine for every randomized step.
///
/// Callers own the generator so a seeded instance makes a whole batch
/// reproducible.
pub type EngineRng = StdRng;

/// Narrow interface over a constraint-based DNA optimizer.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait SequenceEngine: Send + Sync {
    /// Map a protein (one letter per residue, `*` for stop) to a candidate
    /// DNA sequence, choosing among synonymous codons with `rng`.
    fn reverse_translate(
        &self,
        protein: &str,
        rng: &mut EngineRng,
    ) -> EngineResult<String>;

    /// Resolve all constraints on `dna`, then optimize the result toward the
    /// engine objective. Returns the final DNA string.
    fn resolve_and_optimize(
        &self,
        dna: &str,
        rng: &mut EngineRng,
    ) -> EngineResult<String>;

    /// Short human readable label of the configured constraints and
    /// objective, used in logs.
    fn describe(&self) -> String {
        String::from("sequence engine")
    }
}
