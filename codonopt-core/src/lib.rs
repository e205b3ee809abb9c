//! # codonopt core
//!
//! Sequence-level building blocks for codon optimization and the
//! orchestration that drives them.
//!
//! ## Overview
//!
//! - [`genetic_code`]: codon lookup, translation and synonymous codon sets
//! - [`codon_usage`]: per-species codon usage tables
//! - [`restriction`]: restriction enzyme catalogue and site search
//! - [`constraints`]: hard constraints (`AvoidPattern`, `EnforceGcContent`,
//!   `EnforceTranslation`)
//! - [`objective`]: the codon usage objective
//! - [`problem`]: constraint resolution and optimization over a codon
//!   mutation space
//! - [`engine`]: [`ChiselEngine`], the concrete
//!   [`SequenceEngine`](codonopt_contracts::SequenceEngine)
//! - [`service`]: batch orchestration consumed by the HTTP layer
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use codonopt_contracts::OptimizationSpec;
//! use codonopt_core::{
//!     ChiselEngine, CodonOptimizationService, RngSource, SolverSettings,
//! };
//! use codonopt_model::{CodonOptimizeRequest, Sequence};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = ChiselEngine::new(
//!     &OptimizationSpec::default(),
//!     SolverSettings::default(),
//! )?;
//! let service =
//!     CodonOptimizationService::new(Arc::new(engine), RngSource::Seeded(7));
//!
//! let request = CodonOptimizeRequest {
//!     sequences: vec![Sequence::protein("demo", "MKR*")],
//! };
//! let response = service.optimize_batch(&request)?;
//! println!("{}", response.sequences[0].codon_optimized.seq);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod alphabet;
pub mod codon_usage;
pub mod constraints;
pub mod engine;
pub mod genetic_code;
pub mod objective;
pub mod problem;
pub mod restriction;
pub mod reverse_translate;
pub mod service;

pub use codon_usage::CodonUsageTable;
pub use engine::ChiselEngine;
pub use genetic_code::{Codon, GeneticCode};
pub use problem::{OptimizationProblem, ProblemSummary, SolverSettings};
pub use restriction::SitePattern;
pub use reverse_translate::reverse_translate;
pub use service::{
    BatchError, CodonOptimizationService, RngSource, ValidationError,
    validate_request,
};
