//! Wire data models shared across codonopt crates.
#![allow(missing_docs)]

pub mod request;
pub mod sequence;
pub mod sequence_type;

// Intentionally curated re-exports for downstream consumers.
pub use request::{
    CodonOptimizeRequest, CodonOptimizeResponse, CodonOptimizedSequence,
};
pub use sequence::Sequence;
pub use sequence_type::SequenceType;
