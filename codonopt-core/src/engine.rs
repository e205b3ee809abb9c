//! [`ChiselEngine`]: the constraint solver behind
//! [`SequenceEngine`](codonopt_contracts::SequenceEngine).

use codonopt_contracts::{
    EngineError, EngineResult, EngineRng, OptimizationSpec, SequenceEngine,
};
use rand::Rng;
use tracing::debug;

use crate::codon_usage::CodonUsageTable;
use crate::constraints::{
    AvoidPattern, Constraint, EnforceGcContent, EnforceTranslation,
};
use crate::genetic_code::GeneticCode;
use crate::objective::CodonOptimize;
use crate::problem::{OptimizationProblem, SolverSettings};
use crate::restriction::SitePattern;
use crate::reverse_translate::reverse_translate;

/// Applies one fixed [`OptimizationSpec`] to every sequence.
///
/// Species table, genetic code and restriction pattern are resolved once
/// at construction; each call only builds a fresh problem.
#[derive(Debug, Clone)]
pub struct ChiselEngine {
    spec: OptimizationSpec,
    code: GeneticCode,
    avoid: AvoidPattern,
    gc: EnforceGcContent,
    objective: CodonOptimize,
    settings: SolverSettings,
}

impl ChiselEngine {
    pub fn new(
        spec: &OptimizationSpec,
        settings: SolverSettings,
    ) -> EngineResult<Self> {
        settings.validate()?;
        validate_gc(spec)?;

        let code = GeneticCode::by_name(&spec.genetic_code)?;
        let table = CodonUsageTable::for_species(&spec.species, &code)?;
        let pattern = SitePattern::from_spec(&spec.avoid_pattern)?;

        Ok(Self {
            spec: spec.clone(),
            avoid: AvoidPattern::new(pattern),
            gc: EnforceGcContent::from(spec.gc),
            objective: CodonOptimize::new(table),
            code,
            settings,
        })
    }

    pub fn spec(&self) -> &OptimizationSpec {
        &self.spec
    }

    pub fn settings(&self) -> SolverSettings {
        self.settings
    }

    pub fn genetic_code(&self) -> &GeneticCode {
        &self.code
    }

    /// Set up the problem for `dna`. The translation constraint pins the
    /// protein `dna` encodes right now.
    pub fn problem<'a, R: Rng + ?Sized>(
        &'a self,
        dna: &str,
        rng: &'a mut R,
    ) -> EngineResult<OptimizationProblem<'a, R>> {
        let dna = dna.trim().to_ascii_uppercase();
        let protein = self.code.translate(dna.as_bytes())?;
        let constraints: Vec<Box<dyn Constraint>> = vec![
            Box::new(self.avoid.clone()) as Box<dyn Constraint>,
            Box::new(self.gc),
            Box::new(EnforceTranslation::new(protein, self.code.clone())),
        ];
        OptimizationProblem::new(
            &dna,
            constraints,
            &self.objective,
            self.settings,
            rng,
        )
    }
}

fn validate_gc(spec: &OptimizationSpec) -> EngineResult<()> {
    let gc = spec.gc;
    if !(0.0..=1.0).contains(&gc.min) || !(0.0..=1.0).contains(&gc.max) {
        return Err(EngineError::InvalidSettings(format!(
            "GC bounds must lie within [0, 1], got {}-{}",
            gc.min, gc.max
        )));
    }
    if gc.min > gc.max {
        return Err(EngineError::InvalidSettings(format!(
            "GC minimum {} exceeds maximum {}",
            gc.min, gc.max
        )));
    }
    if gc.window == 0 {
        return Err(EngineError::InvalidSettings(
            "GC window must be at least 1".to_string(),
        ));
    }
    Ok(())
}

impl SequenceEngine for ChiselEngine {
    fn reverse_translate(
        &self,
        protein: &str,
        rng: &mut EngineRng,
    ) -> EngineResult<String> {
        reverse_translate(protein, &self.code, rng)
    }

    fn resolve_and_optimize(
        &self,
        dna: &str,
        rng: &mut EngineRng,
    ) -> EngineResult<String> {
        let mut problem = self.problem(dna, rng)?;
        problem.resolve_constraints()?;
        problem.optimize()?;
        debug!("problem summary:\n{}", problem.summary());
        Ok(problem.sequence())
    }

    fn describe(&self) -> String {
        self.spec.describe()
    }
}
