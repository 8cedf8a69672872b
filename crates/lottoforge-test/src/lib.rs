//! Shared test fixtures for LottoForge crates.
//!
//! This crate provides well-known game shapes, rule sets and assertions.
//! It depends only on `lottoforge-core` so every other crate can use it.
//!
//! - [`shapes`] - Draw shapes of common lotteries
//! - [`rules`] - Rule sets used across tests
//! - [`assert_well_formed`] / [`assert_satisfies`] - Candidate property checks
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! lottoforge-test = { workspace = true }
//! ```

pub mod rules;
pub mod shapes;

use lottoforge_core::{Candidate, CandidateStats, ConstraintValidator, GameShape, RuleSet};

/// Asserts the candidate fits `shape`: right length, in range, strictly ascending.
pub fn assert_well_formed(shape: &GameShape, candidate: &Candidate) {
    assert_eq!(
        candidate.len(),
        shape.numbers_count(),
        "candidate {} has wrong length for {}",
        candidate,
        shape
    );
    for &n in candidate.iter() {
        assert!(shape.contains(n), "{} outside {}", n, shape);
    }
    for pair in candidate.windows(2) {
        assert!(pair[0] < pair[1], "candidate {} not strictly ascending", candidate);
    }
}

/// Asserts the candidate fits `shape` and meets every constraint of `rules`.
pub fn assert_satisfies(shape: &GameShape, rules: &RuleSet, candidate: &Candidate) {
    assert_well_formed(shape, candidate);
    for n in &rules.include_numbers {
        assert!(candidate.contains(*n), "{} missing pinned {}", candidate, n);
    }
    for n in &rules.exclude_numbers {
        assert!(!candidate.contains(*n), "{} holds banned {}", candidate, n);
    }
    let stats = CandidateStats::from_numbers(candidate, rules.reference());
    let violations = ConstraintValidator::new(rules).violations(&stats);
    assert!(
        violations.is_empty(),
        "{} violates {:?}",
        candidate,
        violations
    );
}
