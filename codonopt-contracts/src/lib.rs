//! Trait surfaces that describe interactions with a sequence optimization
//! engine.
//!
//! The server and orchestration layers only ever talk to
//! [`SequenceEngine`]; the constraint solver that backs it lives in
//! `codonopt-core` and can be swapped for a mock in tests.

pub mod engine;
pub mod error;
pub mod spec;

pub use engine::{EngineRng, SequenceEngine};
#[cfg(any(test, feature = "mock"))]
pub use engine::MockSequenceEngine;
pub use error::{EngineError, EngineResult};
pub use spec::{GcWindow, OptimizationSpec};

/// Frequently used items for crates implementing or consuming an engine.
pub mod prelude {
    pub use super::engine::{EngineRng, SequenceEngine};
    pub use super::error::{EngineError, EngineResult};
    pub use super::spec::{GcWindow, OptimizationSpec};
}
