use std::fmt;
use std::ops::Range;

/// Outcome of one constraint on the final sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintReport {
    pub label: String,
    pub passes: bool,
    pub score: f64,
    pub breaches: Vec<Range<usize>>,
}

/// Text report of a solved (or failed) problem.
#[derive(Debug, Clone, PartialEq)]
pub struct ProblemSummary {
    pub constraints: Vec<ConstraintReport>,
    pub objective: String,
    pub objective_score: f64,
}

impl ProblemSummary {
    pub fn all_pass(&self) -> bool {
        self.constraints.iter().all(|report| report.passes)
    }
}

impl fmt::Display for ProblemSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.all_pass() {
            writeln!(f, "SUCCESS - all constraints evaluations pass")?;
        } else {
            writeln!(f, "FAILURE - some constraints evaluations fail")?;
        }
        for report in &self.constraints {
            let status = if report.passes { "PASS" } else { "FAIL" };
            write!(f, "  {status} {} score={:.2}", report.label, report.score)?;
            if !report.breaches.is_empty() {
                let spans: Vec<String> = report
                    .breaches
                    .iter()
                    .map(|r| format!("{}-{}", r.start, r.end))
                    .collect();
                write!(f, " at {}", spans.join(", "))?;
            }
            writeln!(f)?;
        }
        write!(f, "  {} score={:.2}", self.objective, self.objective_score)
    }
}
