//! LottoForge Core - Core types for constrained lottery number generation
//!
//! This crate provides the fundamental abstractions for LottoForge:
//! - [`GameShape`] describing how many numbers a ticket line holds and their range
//! - [`RuleSet`] with the optional statistical constraints a line must meet
//! - [`Candidate`] and its derived [`CandidateStats`]
//! - [`ConstraintValidator`] for all-or-nothing acceptance of a candidate

pub mod candidate;
pub mod error;
pub mod rules;
pub mod shape;
pub mod stats;
pub mod validator;

pub use candidate::Candidate;
pub use error::{LottoError, Result};
pub use rules::{Bounds, RuleSet};
pub use shape::GameShape;
pub use stats::{compute_stats, CandidateStats};
pub use validator::{is_accepted, ConstraintValidator, Rule};

/// Attempt budget of a single-line search.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 2000;
