//! # codonopt server
//!
//! HTTP front end for the codon optimization engine.
//!
//! `POST /codon_optimize` accepts a batch of named DNA or protein
//! sequences and returns, in order, a DNA sequence for each that encodes
//! the same protein. Every result satisfies the configured restriction
//! site and GC window constraints before codon usage is optimized for the
//! host species.

pub mod handlers;
pub mod infra;
pub mod routes;

pub use infra::app_state::AppState;
pub use routes::create_app;
