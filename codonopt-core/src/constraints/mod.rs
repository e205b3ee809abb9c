//! Hard constraints a candidate sequence must satisfy.
//!
//! Each constraint scores a whole sequence: `0.0` when it holds, a
//! negative penalty otherwise, together with the locations that breach
//! it. The solver in [`crate::problem`] drives its local searches from
//! those locations.

mod avoid_pattern;
mod gc_content;
mod translation;

use std::fmt;
use std::ops::Range;

pub use avoid_pattern::AvoidPattern;
pub use gc_content::EnforceGcContent;
pub use translation::EnforceTranslation;

use crate::problem::MutationSpace;

/// Penalties below this magnitude count as passing.
pub(crate) const SCORE_EPSILON: f64 = 1e-9;

/// Result of evaluating one constraint on one sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Evaluation {
    /// `0.0` when the constraint passes, negative otherwise.
    pub score: f64,
    /// Half-open nucleotide ranges where the constraint is breached.
    pub breaches: Vec<Range<usize>>,
}

impl Evaluation {
    pub fn pass() -> Self {
        Self::default()
    }

    pub fn fail(penalty: f64, breaches: Vec<Range<usize>>) -> Self {
        Self {
            score: -penalty.abs(),
            breaches,
        }
    }

    pub fn passes(&self) -> bool {
        self.score > -SCORE_EPSILON
    }

    /// Positive penalty, `0.0` when passing.
    pub fn penalty(&self) -> f64 {
        -self.score
    }
}

/// A hard requirement on the final sequence.
pub trait Constraint: fmt::Debug + Send + Sync {
    /// Score `seq` (uppercase ACGT) and locate breaches.
    fn evaluate(&self, seq: &[u8]) -> Evaluation;

    /// Short label used in reports and errors, e.g. `AvoidPattern(BsaI_site)`.
    fn label(&self) -> String;

    fn passes(&self, seq: &[u8]) -> bool {
        self.evaluate(seq).passes()
    }

    /// Penalty of the part of `seq` that a change inside `region` can
    /// affect.
    ///
    /// For two sequences that differ only inside `region`, comparing their
    /// local penalties orders them like comparing full penalties. The
    /// default scores the whole sequence.
    fn local_penalty(&self, seq: &[u8], _region: Range<usize>) -> f64 {
        self.evaluate(seq).penalty()
    }

    /// Narrow the codons each slot may take. Most constraints leave the
    /// mutation space alone.
    fn restrict_mutations(&self, _space: &mut MutationSpace) {}
}

/// Merge sorted, possibly overlapping ranges.
pub(crate) fn merge_ranges(mut ranges: Vec<Range<usize>>) -> Vec<Range<usize>> {
    ranges.sort_by_key(|r| r.start);
    let mut merged: Vec<Range<usize>> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            Some(last) if range.start <= last.end => {
                last.end = last.end.max(range.end);
            }
            _ => merged.push(range),
        }
    }
    merged
}
