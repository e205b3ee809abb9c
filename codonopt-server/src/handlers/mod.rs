//! HTTP request handlers

pub mod codon_optimize;
pub mod health;

pub use codon_optimize::codon_optimize_handler;
pub use health::{health_handler, root_handler};
