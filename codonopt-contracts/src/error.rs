use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("invalid residue '{residue}' at position {position}")]
    InvalidResidue { position: usize, residue: char },

    #[error("invalid nucleotide '{base}' at position {position}")]
    InvalidBase { position: usize, base: char },

    #[error("sequence length {length} is not a multiple of 3")]
    FrameLength { length: usize },

    #[error("unknown codon usage table: {0}")]
    UnknownSpecies(String),

    #[error("unknown restriction pattern: {0}")]
    UnknownPattern(String),

    #[error("unknown genetic code: {0}")]
    UnknownGeneticCode(String),

    #[error("invalid engine settings: {0}")]
    InvalidSettings(String),

    #[error("no solution satisfies {constraint} at {start}-{end}")]
    NoSolution {
        constraint: String,
        start: usize,
        end: usize,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl EngineError {
    /// Whether the failure stems from the submitted sequence itself rather
    /// than from the solver or its configuration.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            EngineError::InvalidResidue { .. } | EngineError::InvalidBase { .. }
        )
    }
}

pub type EngineResult<T> = std::result::Result<T, EngineError>;
