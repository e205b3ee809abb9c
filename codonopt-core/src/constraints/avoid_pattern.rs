use std::ops::Range;

use crate::constraints::{Constraint, Evaluation};
use crate::restriction::SitePattern;

/// Forbid a site on either strand. One unit of penalty per occurrence.
#[derive(Debug, Clone)]
pub struct AvoidPattern {
    pattern: SitePattern,
}

impl AvoidPattern {
    pub fn new(pattern: SitePattern) -> Self {
        Self { pattern }
    }

    pub fn pattern(&self) -> &SitePattern {
        &self.pattern
    }
}

impl Constraint for AvoidPattern {
    fn evaluate(&self, seq: &[u8]) -> Evaluation {
        let hits = self.pattern.find_all(seq);
        if hits.is_empty() {
            return Evaluation::pass();
        }
        let len = self.pattern.len();
        let breaches = hits.iter().map(|&start| start..start + len).collect();
        Evaluation::fail(hits.len() as f64, breaches)
    }

    fn label(&self) -> String {
        format!("AvoidPattern({})", self.pattern.label())
    }

    fn passes(&self, seq: &[u8]) -> bool {
        !self.pattern.occurs_in(seq)
    }

    fn local_penalty(&self, seq: &[u8], region: Range<usize>) -> f64 {
        if region.is_empty() {
            return 0.0;
        }
        let reach = self.pattern.len().saturating_sub(1);
        let start = region.start.saturating_sub(reach).min(seq.len());
        let end = (region.end + reach).min(seq.len()).max(start);
        self.pattern.find_all(&seq[start..end]).len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bsai() -> AvoidPattern {
        AvoidPattern::new(SitePattern::from_spec("BsaI_site").unwrap())
    }

    #[test]
    fn counts_sites_on_both_strands() {
        let eval = bsai().evaluate(b"GGTCTCAAAGAGACC");
        assert_eq!(eval.score, -2.0);
        assert_eq!(eval.breaches, vec![0..6, 9..15]);
    }

    #[test]
    fn clean_sequence_passes() {
        let constraint = bsai();
        assert!(constraint.evaluate(b"ATGAAACGTTAA").passes());
        assert!(constraint.passes(b"ATGAAACGTTAA"));
        assert!(!constraint.passes(b"ATGGTCTCA"));
    }

    #[test]
    fn local_penalty_counts_sites_reaching_into_region() {
        let constraint = bsai();
        let seq = b"AAAGGTCTCAAAAAAAAAAAAGAGACCAAA";
        // the first site spans 3..9, the reverse site 21..27
        assert_eq!(constraint.local_penalty(seq, 6..9), 1.0);
        assert_eq!(constraint.local_penalty(seq, 12..15), 0.0);
        assert_eq!(constraint.local_penalty(seq, 0..30), 2.0);
        assert_eq!(constraint.local_penalty(seq, 9..9), 0.0);
    }

    #[test]
    fn label_names_the_site() {
        assert_eq!(bsai().label(), "AvoidPattern(BsaI_site)");
    }
}
