//! Constraint resolution and objective optimization over a codon mutation
//! space.
//!
//! A problem owns a mutable coding sequence, a list of hard constraints and
//! one objective. [`OptimizationProblem::resolve_constraints`] repairs every
//! breach with local searches, then [`OptimizationProblem::optimize`] climbs
//! the objective without breaking any constraint. All randomness comes from
//! the caller's generator.

mod mutation_space;
mod settings;
mod summary;

use std::fmt;
use std::ops::Range;

use codonopt_contracts::{EngineError, EngineResult};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, trace};

pub use mutation_space::MutationSpace;
pub use settings::SolverSettings;
pub use summary::{ConstraintReport, ProblemSummary};

use crate::alphabet::{Alphabet, CodingDna};
use crate::constraints::{Constraint, SCORE_EPSILON};
use crate::genetic_code::Codon;
use crate::objective::CodonOptimize;

/// Slots added on each side of a breach before searching it.
const BREACH_MARGIN: usize = 1;

/// Longest run of breach slots searched at once. Longer breaches are
/// split, so a local search never spans more than this plus the margins.
const MAX_LOCAL_SLOTS: usize = 8;

/// Upper bound on repair rounds per constraint. A round that does not
/// lower the total penalty ends the repair early.
const MAX_RESOLVE_ROUNDS: usize = 8;

/// One sequence under optimization.
pub struct OptimizationProblem<'a, R: Rng + ?Sized> {
    sequence: Vec<u8>,
    constraints: Vec<Box<dyn Constraint>>,
    objective: &'a CodonOptimize,
    space: MutationSpace,
    settings: SolverSettings,
    rng: &'a mut R,
}

impl<R: Rng + ?Sized> fmt::Debug for OptimizationProblem<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptimizationProblem")
            .field("length", &self.sequence.len())
            .field("constraints", &self.constraints)
            .field("objective", &self.objective.label())
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl<'a, R: Rng + ?Sized> OptimizationProblem<'a, R> {
    /// Set up a problem on `sequence` (upper-cased on entry).
    ///
    /// Fails on non-ACGT bases, on a length that is not a multiple of 3 and
    /// on invalid solver settings.
    pub fn new(
        sequence: &str,
        constraints: Vec<Box<dyn Constraint>>,
        objective: &'a CodonOptimize,
        settings: SolverSettings,
        rng: &'a mut R,
    ) -> EngineResult<Self> {
        settings.validate()?;

        let sequence = sequence.trim().as_bytes().to_ascii_uppercase();
        if let Some((position, base)) = CodingDna::first_invalid(&sequence) {
            return Err(EngineError::InvalidBase { position, base });
        }
        if sequence.len() % 3 != 0 {
            return Err(EngineError::FrameLength {
                length: sequence.len(),
            });
        }

        let mut space = MutationSpace::unrestricted(sequence.len() / 3);
        for constraint in &constraints {
            constraint.restrict_mutations(&mut space);
        }

        Ok(Self {
            sequence,
            constraints,
            objective,
            space,
            settings,
            rng,
        })
    }

    /// The current sequence.
    pub fn sequence(&self) -> String {
        String::from_utf8_lossy(&self.sequence).into_owned()
    }

    pub fn mutation_space(&self) -> &MutationSpace {
        &self.space
    }

    pub fn objective_score(&self) -> f64 {
        self.objective.score(&self.sequence)
    }

    pub fn all_constraints_pass(&self) -> bool {
        self.constraints
            .iter()
            .all(|constraint| constraint.passes(&self.sequence))
    }

    /// Repair every breached constraint, in order.
    ///
    /// Returns [`EngineError::NoSolution`] naming the first constraint that
    /// still fails once every breach has been searched.
    pub fn resolve_constraints(&mut self) -> EngineResult<()> {
        for index in 0..self.constraints.len() {
            let mut previous = self.total_penalty();
            for round in 0..MAX_RESOLVE_ROUNDS {
                let evaluation =
                    self.constraints[index].evaluate(&self.sequence);
                if evaluation.passes() {
                    break;
                }
                debug!(
                    constraint = %self.constraints[index].label(),
                    round,
                    breaches = evaluation.breaches.len(),
                    "resolving constraint"
                );
                for breach in &evaluation.breaches {
                    for slots in self.breach_chunks(breach) {
                        self.resolve_locally(slots);
                    }
                }

                let current = self.total_penalty();
                if current >= previous - SCORE_EPSILON {
                    break;
                }
                previous = current;
            }
        }
        self.check_constraints()
    }

    /// Improve the objective while keeping every constraint satisfied.
    ///
    /// Constraints must already pass.
    pub fn optimize(&mut self) -> EngineResult<()> {
        self.check_constraints()?;
        let before = self.objective_score();
        self.greedy_pass();
        self.random_pass();
        debug!(
            objective = %self.objective.label(),
            before,
            after = self.objective_score(),
            "optimized sequence"
        );
        Ok(())
    }

    pub fn summary(&self) -> ProblemSummary {
        let constraints = self
            .constraints
            .iter()
            .map(|constraint| {
                let evaluation = constraint.evaluate(&self.sequence);
                ConstraintReport {
                    label: constraint.label(),
                    passes: evaluation.passes(),
                    score: evaluation.score,
                    breaches: evaluation.breaches,
                }
            })
            .collect();
        ProblemSummary {
            constraints,
            objective: self.objective.label(),
            objective_score: self.objective_score(),
        }
    }

    fn check_constraints(&self) -> EngineResult<()> {
        for constraint in &self.constraints {
            let evaluation = constraint.evaluate(&self.sequence);
            if !evaluation.passes() {
                let location = evaluation
                    .breaches
                    .first()
                    .cloned()
                    .unwrap_or(0..self.sequence.len());
                return Err(EngineError::NoSolution {
                    constraint: constraint.label(),
                    start: location.start,
                    end: location.end,
                });
            }
        }
        Ok(())
    }

    /// Penalty, over all constraints, of what a change to `slots` can
    /// affect.
    fn region_penalty(&self, slots: &Range<usize>) -> f64 {
        let region = slots.start * 3..slots.end * 3;
        self.constraints
            .iter()
            .map(|constraint| {
                constraint.local_penalty(&self.sequence, region.clone())
            })
            .sum()
    }

    /// Whether constraints that passed before still pass after `changes`.
    fn changes_keep_constraints(&self, changes: &[(usize, Codon)]) -> bool {
        changes
            .iter()
            .all(|&(slot, _)| self.region_penalty(&(slot..slot + 1)) <= SCORE_EPSILON)
    }

    /// Split the slots under `breach` into searchable pieces, each widened
    /// by the breach margin.
    fn breach_chunks(&self, breach: &Range<usize>) -> Vec<Range<usize>> {
        let covered = self.space.slots_around(breach, 0);
        let limit = self.space.slots();
        let mut chunks = Vec::new();
        let mut start = covered.start;
        while start < covered.end {
            let end = (start + MAX_LOCAL_SLOTS).min(covered.end);
            chunks.push(
                start.saturating_sub(BREACH_MARGIN)..(end + BREACH_MARGIN).min(limit),
            );
            start = end;
        }
        chunks
    }

    fn total_penalty(&self) -> f64 {
        self.constraints
            .iter()
            .map(|constraint| constraint.evaluate(&self.sequence).penalty())
            .sum()
    }

    fn codon_at(&self, slot: usize) -> Codon {
        let at = slot * 3;
        [
            self.sequence[at],
            self.sequence[at + 1],
            self.sequence[at + 2],
        ]
    }

    /// Write `codon` into `slot`, returning the codon it replaced.
    fn set_codon(&mut self, slot: usize, codon: Codon) -> Codon {
        let previous = self.codon_at(slot);
        let at = slot * 3;
        self.sequence[at..at + 3].copy_from_slice(&codon);
        previous
    }

    fn revert(&mut self, changes: Vec<(usize, Codon)>) {
        for (slot, previous) in changes.into_iter().rev() {
            self.set_codon(slot, previous);
        }
    }

    fn resolve_locally(&mut self, slots: Range<usize>) {
        let penalty = self.region_penalty(&slots);
        if penalty <= SCORE_EPSILON || slots.is_empty() {
            return;
        }
        let combinations = self.space.combinations(&slots);
        trace!(?slots, combinations, penalty, "local search");
        if combinations <= self.settings.randomization_threshold {
            self.exhaustive_search(slots, penalty);
        } else {
            self.random_search(slots, penalty);
        }
    }

    /// Try every assignment of `slots`, keeping the one with the lowest
    /// penalty. Stops early once nothing around `slots` is breached.
    fn exhaustive_search(&mut self, slots: Range<usize>, mut best_penalty: f64) {
        let radices: Vec<usize> = slots
            .clone()
            .map(|slot| self.space.choices(slot).len().max(1))
            .collect();
        let mut best: Vec<Codon> =
            slots.clone().map(|slot| self.codon_at(slot)).collect();
        let mut odometer = vec![0usize; radices.len()];

        loop {
            for (offset, slot) in slots.clone().enumerate() {
                let codon = self.space.choices(slot).get(odometer[offset]).copied();
                if let Some(codon) = codon {
                    self.set_codon(slot, codon);
                }
            }

            let penalty = self.region_penalty(&slots);
            if penalty < best_penalty - SCORE_EPSILON {
                best_penalty = penalty;
                best = slots.clone().map(|slot| self.codon_at(slot)).collect();
                if best_penalty <= SCORE_EPSILON {
                    break;
                }
            }

            if !advance(&mut odometer, &radices) {
                break;
            }
        }

        for (slot, codon) in slots.zip(best) {
            self.set_codon(slot, codon);
        }
    }

    /// Mutate random slots, keeping changes that do not raise the
    /// penalty around `slots`.
    fn random_search(&mut self, slots: Range<usize>, mut current: f64) {
        let mutable: Vec<usize> = slots
            .clone()
            .filter(|&slot| self.space.is_mutable(slot))
            .collect();
        if mutable.is_empty() {
            return;
        }

        for _ in 0..self.settings.max_random_iters {
            let changes = self.random_mutation(&mutable);
            let penalty = self.region_penalty(&slots);
            if penalty <= current + SCORE_EPSILON {
                current = penalty;
                if current <= SCORE_EPSILON {
                    break;
                }
            } else {
                self.revert(changes);
            }
        }
    }

    fn random_mutation(&mut self, mutable: &[usize]) -> Vec<(usize, Codon)> {
        let count = self.settings.mutations_per_iteration.min(mutable.len());
        let picked: Vec<usize> = mutable
            .choose_multiple(&mut *self.rng, count)
            .copied()
            .collect();

        let mut changes = Vec::with_capacity(picked.len());
        for slot in picked {
            let codon = self.space.choices(slot).choose(&mut *self.rng).copied();
            if let Some(codon) = codon {
                changes.push((slot, self.set_codon(slot, codon)));
            }
        }
        changes
    }

    /// Per-codon pass: try each slot's better-scoring synonyms, best first,
    /// and keep the first one under which all constraints still pass.
    fn greedy_pass(&mut self) {
        for slot in 0..self.space.slots() {
            let current = self.codon_at(slot);
            let current_score = self.objective.codon_score(&current);

            let mut candidates: Vec<(Codon, f64)> = self
                .space
                .choices(slot)
                .iter()
                .map(|codon| (*codon, self.objective.codon_score(codon)))
                .filter(|(_, score)| *score > current_score + SCORE_EPSILON)
                .collect();
            candidates.sort_by(|a, b| b.1.total_cmp(&a.1));

            for (codon, _) in candidates {
                self.set_codon(slot, codon);
                if self.region_penalty(&(slot..slot + 1)) <= SCORE_EPSILON {
                    break;
                }
                self.set_codon(slot, current);
            }
        }
    }

    /// Multi-slot random pass: keep a mutation only when it strictly
    /// improves the objective and all constraints still pass.
    fn random_pass(&mut self) {
        let mutable: Vec<usize> = (0..self.space.slots())
            .filter(|&slot| self.space.is_mutable(slot))
            .collect();
        if mutable.is_empty() {
            return;
        }

        for _ in 0..self.settings.max_random_iters {
            let changes = self.random_mutation(&mutable);
            let delta: f64 = changes
                .iter()
                .map(|(slot, previous)| {
                    self.objective.codon_score(&self.codon_at(*slot))
                        - self.objective.codon_score(previous)
                })
                .sum();
            if delta > SCORE_EPSILON && self.changes_keep_constraints(&changes)
            {
                continue;
            }
            self.revert(changes);
        }
    }
}

/// Step a mixed-radix counter. Returns `false` once it wraps around.
fn advance(odometer: &mut [usize], radices: &[usize]) -> bool {
    for (digit, &radix) in odometer.iter_mut().zip(radices) {
        *digit += 1;
        if *digit < radix {
            return true;
        }
        *digit = 0;
    }
    false
}
