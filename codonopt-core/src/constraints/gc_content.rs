use std::ops::Range;

use codonopt_contracts::GcWindow;

use crate::alphabet::gc_count;
use crate::constraints::{Constraint, Evaluation, merge_ranges};

/// Keep the GC fraction of every `window`-base window within
/// `[min, max]`.
///
/// Windows slide one base at a time. A sequence shorter than the window
/// is scored as a single window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnforceGcContent {
    min: f64,
    max: f64,
    window: usize,
}

impl EnforceGcContent {
    pub fn new(min: f64, max: f64, window: usize) -> Self {
        Self {
            min,
            max,
            window: window.max(1),
        }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn window(&self) -> usize {
        self.window
    }

    fn deviation(&self, gc: usize, len: usize) -> f64 {
        let fraction = gc as f64 / len as f64;
        if fraction < self.min {
            self.min - fraction
        } else if fraction > self.max {
            fraction - self.max
        } else {
            0.0
        }
    }
}

impl From<GcWindow> for EnforceGcContent {
    fn from(gc: GcWindow) -> Self {
        Self::new(gc.min, gc.max, gc.window)
    }
}

impl Constraint for EnforceGcContent {
    fn evaluate(&self, seq: &[u8]) -> Evaluation {
        if seq.is_empty() {
            return Evaluation::pass();
        }

        let window = self.window.min(seq.len());
        let mut gc = gc_count(&seq[..window]);
        let mut penalty = 0.0;
        let mut breaches = Vec::new();

        for start in 0..=seq.len() - window {
            if start > 0 {
                gc -= gc_count(&seq[start - 1..start]);
                gc += gc_count(&seq[start + window - 1..start + window]);
            }
            let deviation = self.deviation(gc, window);
            if deviation > 0.0 {
                penalty += deviation;
                breaches.push(start..start + window);
            }
        }

        if breaches.is_empty() {
            Evaluation::pass()
        } else {
            Evaluation::fail(penalty, merge_ranges(breaches))
        }
    }

    /// Scores only the windows overlapping `region`.
    fn local_penalty(&self, seq: &[u8], region: Range<usize>) -> f64 {
        if region.is_empty() || seq.is_empty() {
            return 0.0;
        }
        let window = self.window.min(seq.len());
        let start = region.start.saturating_sub(window - 1).min(seq.len());
        let end = (region.end + window - 1).min(seq.len()).max(start);
        self.evaluate(&seq[start..end]).penalty()
    }

    fn label(&self) -> String {
        format!(
            "EnforceGCContent({:.2}-{:.2}, window={})",
            self.min, self.max, self.window
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sequence_passes() {
        assert!(EnforceGcContent::new(0.3, 0.7, 50).evaluate(b"").passes());
    }

    #[test]
    fn short_sequence_is_one_window() {
        let constraint = EnforceGcContent::new(0.3, 0.7, 50);
        assert!(constraint.evaluate(b"ATGAAGCGCTAA").passes());
        // 3 GC out of 12
        assert!(!constraint.evaluate(b"ATGAAACGTTAA").passes());
        let eval = constraint.evaluate(b"AAAAAAAAAA");
        assert_eq!(eval.breaches, vec![0..10]);
        assert!((eval.penalty() - 0.3).abs() < 1e-9);
    }

    #[test]
    fn sliding_windows_locate_the_rich_region() {
        let constraint = EnforceGcContent::new(0.0, 0.5, 4);
        let eval = constraint.evaluate(b"ATATGGGGATAT");
        assert!(!eval.passes());
        // windows starting at 3, 4 and 5 hold three or four G
        assert_eq!(eval.breaches, vec![3..9]);
    }

    #[test]
    fn penalty_sums_window_deviation() {
        let constraint = EnforceGcContent::new(0.0, 0.5, 2);
        let eval = constraint.evaluate(b"GGG");
        // two windows, each 1.0 GC, each 0.5 over
        assert!((eval.penalty() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn local_penalty_only_sees_overlapping_windows() {
        let constraint = EnforceGcContent::new(0.0, 0.5, 4);
        let seq = b"GGGGATATATATATAT";
        let full = constraint.evaluate(seq).penalty();
        // windows touching base 12 start at 9..=12 and are all AT
        assert_eq!(constraint.local_penalty(seq, 12..13), 0.0);
        assert!((constraint.local_penalty(seq, 0..4) - full).abs() < 1e-9);
        assert_eq!(constraint.local_penalty(seq, 5..5), 0.0);
    }

    #[test]
    fn local_penalty_on_short_sequence_scores_one_window() {
        let constraint = EnforceGcContent::new(0.3, 0.7, 50);
        let seq = b"AAAAAAAAAA";
        assert!((constraint.local_penalty(seq, 3..6) - 0.3).abs() < 1e-9);
    }

    #[test]
    fn label_includes_bounds() {
        let constraint = EnforceGcContent::from(GcWindow::default());
        assert_eq!(constraint.label(), "EnforceGCContent(0.30-0.70, window=50)");
    }
}
