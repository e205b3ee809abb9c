/// GC content bounds enforced over a sliding window.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GcWindow {
    pub min: f64,
    pub max: f64,
    pub window: usize,
}

impl Default for GcWindow {
    fn default() -> Self {
        Self {
            min: 0.30,
            max: 0.70,
            window: 50,
        }
    }
}

/// Constraint and objective set applied to every sequence.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimizationSpec {
    /// Enzyme site (`BsaI_site`), enzyme name, or literal IUPAC pattern.
    pub avoid_pattern: String,
    pub gc: GcWindow,
    /// Codon usage table the objective biases toward.
    pub species: String,
    /// Genetic code used for translation and reverse translation.
    pub genetic_code: String,
}

impl Default for OptimizationSpec {
    fn default() -> Self {
        Self {
            avoid_pattern: "BsaI_site".to_string(),
            gc: GcWindow::default(),
            species: "e_coli".to_string(),
            genetic_code: "Standard".to_string(),
        }
    }
}

impl OptimizationSpec {
    pub fn describe(&self) -> String {
        format!(
            "AvoidPattern({}), EnforceGCContent({:.2}-{:.2}, window={}), EnforceTranslation, CodonOptimize({})",
            self.avoid_pattern,
            self.gc.min,
            self.gc.max,
            self.gc.window,
            self.species
        )
    }
}
