//! LottoForge Generator
//!
//! This crate provides the bounded rejection-sampling search:
//! - [`CandidateSampler`] drawing random lines that honor pinned and banned numbers
//! - [`GenerationEngine`] looping sampler and validator under an attempt budget
//! - [`Batch`] results that may be shorter than requested
//! - [`GenerationStatistics`] counters for monitoring

pub mod batch;
pub mod engine;
pub mod sampler;
pub mod statistics;

pub use batch::Batch;
pub use engine::{GenerationEngine, GenerationOutcome, DEFAULT_MAX_ATTEMPTS};
pub use sampler::{generate_candidate, CandidateSampler};
pub use statistics::GenerationStatistics;
