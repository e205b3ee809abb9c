//! Batch orchestration over a [`SequenceEngine`].

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use codonopt_contracts::{EngineError, EngineRng, SequenceEngine};
use codonopt_model::{
    CodonOptimizeRequest, CodonOptimizeResponse, CodonOptimizedSequence,
    Sequence, SequenceType,
};
use rand::SeedableRng;
use thiserror::Error;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::alphabet::{Alphabet, CodingDna, ProteinResidues};

/// Where each batch gets its random generator from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RngSource {
    /// Fresh OS entropy for every batch.
    #[default]
    Entropy,
    /// The same seed for every batch, so identical requests produce
    /// identical responses.
    Seeded(u64),
}

impl RngSource {
    pub fn rng(&self) -> EngineRng {
        match self {
            RngSource::Entropy => EngineRng::from_os_rng(),
            RngSource::Seeded(seed) => EngineRng::seed_from_u64(*seed),
        }
    }
}

impl From<Option<u64>> for RngSource {
    fn from(seed: Option<u64>) -> Self {
        seed.map_or(RngSource::Entropy, RngSource::Seeded)
    }
}

/// A request rejected before any engine work.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("sequences[{index}].seq: sequence must not be empty")]
    EmptySequence { index: usize },

    #[error(
        "sequences[{index}].seq: invalid {kind} character '{character}' at position {position}"
    )]
    InvalidCharacter {
        index: usize,
        kind: SequenceType,
        position: usize,
        character: char,
    },
}

impl ValidationError {
    /// Path of the offending field, e.g. `sequences[2].seq`.
    pub fn field(&self) -> String {
        let index = match self {
            ValidationError::EmptySequence { index }
            | ValidationError::InvalidCharacter { index, .. } => index,
        };
        format!("sequences[{index}].seq")
    }
}

/// The engine failed on one sequence; the whole batch is abandoned.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("sequence {index} ({name}) failed: {source}")]
pub struct BatchError {
    pub index: usize,
    pub name: String,
    #[source]
    pub source: EngineError,
}

impl BatchError {
    pub fn is_input_error(&self) -> bool {
        self.source.is_input_error()
    }
}

fn first_invalid<A: Alphabet>(seq: &str) -> Option<(usize, char)> {
    seq.chars()
        .enumerate()
        .find(|&(_, c)| !(c.is_ascii() && A::is_valid(c as u8)))
}

/// Check residue letters of every sequence.
///
/// DNA accepts `ACGT`, protein the 20 standard amino acids and `*`, both
/// case-insensitive. Empty sequences are rejected.
pub fn validate_request(
    request: &CodonOptimizeRequest,
) -> Result<(), ValidationError> {
    for (index, sequence) in request.sequences.iter().enumerate() {
        if sequence.seq.is_empty() {
            return Err(ValidationError::EmptySequence { index });
        }
        let invalid = match sequence.kind {
            SequenceType::Dna => first_invalid::<CodingDna>(&sequence.seq),
            SequenceType::Protein => {
                first_invalid::<ProteinResidues>(&sequence.seq)
            }
        };
        if let Some((position, character)) = invalid {
            return Err(ValidationError::InvalidCharacter {
                index,
                kind: sequence.kind,
                position,
                character,
            });
        }
    }
    Ok(())
}

/// Runs every sequence of a request through the engine, in order.
#[derive(Clone)]
pub struct CodonOptimizationService {
    engine: Arc<dyn SequenceEngine>,
    rng_source: RngSource,
}

impl fmt::Debug for CodonOptimizationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodonOptimizationService")
            .field("rng_source", &self.rng_source)
            .finish_non_exhaustive()
    }
}

impl CodonOptimizationService {
    pub fn new(engine: Arc<dyn SequenceEngine>, rng_source: RngSource) -> Self {
        Self { engine, rng_source }
    }

    pub fn engine(&self) -> &Arc<dyn SequenceEngine> {
        &self.engine
    }

    pub fn rng_source(&self) -> RngSource {
        self.rng_source
    }

    /// Optimize every sequence of `request`.
    ///
    /// Protein entries are reverse-translated first. The first failure
    /// aborts the batch; nothing is returned for sequences that did
    /// succeed.
    #[instrument(
        name = "codon_optimize.batch",
        skip(self, request),
        fields(batch_id = %Uuid::new_v4(), sequences = request.sequences.len()),
        err
    )]
    pub fn optimize_batch(
        &self,
        request: &CodonOptimizeRequest,
    ) -> Result<CodonOptimizeResponse, BatchError> {
        let mut rng = self.rng_source.rng();
        let mut sequences = Vec::with_capacity(request.sequences.len());

        for (index, sequence) in request.sequences.iter().enumerate() {
            let optimized =
                self.optimize_one(sequence, &mut rng).map_err(|source| {
                    BatchError {
                        index,
                        name: sequence.name.clone(),
                        source,
                    }
                })?;
            debug!(
                index,
                name = %sequence.name,
                length = optimized.len(),
                "sequence optimized"
            );
            sequences.push(CodonOptimizedSequence::new(
                sequence.clone(),
                optimized,
            ));
        }

        info!(count = sequences.len(), "batch optimized");
        Ok(CodonOptimizeResponse { sequences })
    }

    fn optimize_one(
        &self,
        sequence: &Sequence,
        rng: &mut EngineRng,
    ) -> Result<String, EngineError> {
        let dna: Cow<'_, str> = match sequence.kind {
            SequenceType::Protein => {
                let dna = self.engine.reverse_translate(&sequence.seq, rng)?;
                debug!(name = %sequence.name, "reverse translated protein");
                Cow::Owned(dna)
            }
            SequenceType::Dna => Cow::Borrowed(&sequence.seq),
        };
        self.engine.resolve_and_optimize(&dna, rng)
    }
}

#[cfg(test)]
mod tests {
    use codonopt_contracts::MockSequenceEngine;

    use super::*;

    fn request(sequences: Vec<Sequence>) -> CodonOptimizeRequest {
        CodonOptimizeRequest { sequences }
    }

    #[test]
    fn validation_accepts_mixed_case() {
        let req = request(vec![
            Sequence::dna("a", "atgAAAcgtTAA"),
            Sequence::protein("b", "mkr*"),
        ]);
        assert_eq!(validate_request(&req), Ok(()));
        assert_eq!(validate_request(&request(vec![])), Ok(()));
    }

    #[test]
    fn validation_names_the_field() {
        let req = request(vec![
            Sequence::dna("ok", "ATG"),
            Sequence::dna("bad", "ATGNNN"),
        ]);
        let err = validate_request(&req).unwrap_err();
        assert_eq!(err.field(), "sequences[1].seq");
        assert_eq!(
            err,
            ValidationError::InvalidCharacter {
                index: 1,
                kind: SequenceType::Dna,
                position: 3,
                character: 'N',
            }
        );
        assert!(err.to_string().starts_with("sequences[1].seq: invalid DNA"));
    }

    #[test]
    fn validation_rejects_empty_and_non_ascii() {
        let err = validate_request(&request(vec![Sequence::protein("p", "")]))
            .unwrap_err();
        assert_eq!(err, ValidationError::EmptySequence { index: 0 });

        let err = validate_request(&request(vec![Sequence::protein("p", "MKé")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidCharacter { position: 2, character: 'é', .. }
        ));

        // U is not accepted as DNA input
        assert!(validate_request(&request(vec![Sequence::dna("r", "AUG")])).is_err());
        // B is not one of the 20 standard residues
        assert!(validate_request(&request(vec![Sequence::protein("p", "MB")])).is_err());
    }

    #[test]
    fn batch_preserves_order_and_originals() {
        let mut engine = MockSequenceEngine::new();
        engine
            .expect_reverse_translate()
            .times(1)
            .returning(|protein, _| {
                assert_eq!(protein, "MKR*");
                Ok("ATGAAACGTTAA".to_string())
            });
        engine
            .expect_resolve_and_optimize()
            .times(2)
            .returning(|dna, _| Ok(dna.to_ascii_lowercase()));

        let service =
            CodonOptimizationService::new(Arc::new(engine), RngSource::Seeded(1));
        let req = request(vec![
            Sequence::dna("first", "ATGTAA"),
            Sequence::protein("second", "MKR*"),
        ]);

        let response = service.optimize_batch(&req).unwrap();
        assert_eq!(response.len(), 2);
        assert_eq!(response.sequences[0].original, req.sequences[0]);
        assert_eq!(response.sequences[0].codon_optimized.seq, "atgtaa");
        assert_eq!(response.sequences[1].original, req.sequences[1]);
        assert_eq!(response.sequences[1].codon_optimized.name, "second");
        assert_eq!(response.sequences[1].codon_optimized.kind, SequenceType::Dna);
        assert_eq!(response.sequences[1].codon_optimized.seq, "atgaaacgttaa");
    }

    #[test]
    fn first_failure_aborts_the_batch() {
        let mut engine = MockSequenceEngine::new();
        engine
            .expect_resolve_and_optimize()
            .times(1)
            .returning(|_, _| {
                Err(EngineError::NoSolution {
                    constraint: "AvoidPattern(BsaI_site)".into(),
                    start: 0,
                    end: 6,
                })
            });
        engine.expect_reverse_translate().times(0);

        let service =
            CodonOptimizationService::new(Arc::new(engine), RngSource::Entropy);
        let req = request(vec![
            Sequence::dna("broken", "GGTCTC"),
            Sequence::protein("never", "MK*"),
        ]);

        let err = service.optimize_batch(&req).unwrap_err();
        assert_eq!(err.index, 0);
        assert_eq!(err.name, "broken");
        assert!(!err.is_input_error());
        assert!(err.to_string().contains("broken"));
    }

    #[test]
    fn empty_batch_never_touches_the_engine() {
        let service = CodonOptimizationService::new(
            Arc::new(MockSequenceEngine::new()),
            RngSource::default(),
        );
        let response = service.optimize_batch(&request(vec![])).unwrap();
        assert!(response.is_empty());
    }

    #[test]
    fn rng_source_from_optional_seed() {
        assert_eq!(RngSource::from(Some(3)), RngSource::Seeded(3));
        assert_eq!(RngSource::from(None), RngSource::Entropy);
    }
}
