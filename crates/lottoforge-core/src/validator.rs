//! Acceptance of candidates against a rule set.
//!
//! Each active constraint of a [`RuleSet`] becomes one [`Rule`]. A candidate
//! is accepted only when every rule holds; there is no partial scoring.

use std::fmt;

use crate::rules::{Bounds, RuleSet};
use crate::stats::CandidateStats;

/// A single stats-checked constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Sum of the line within bounds.
    SumRange(Bounds<u64>),
    /// Even count within bounds.
    EvenCount(Bounds<usize>),
    /// Prime count within bounds.
    PrimeCount(Bounds<usize>),
    /// Longest consecutive run at most this long.
    MaxConsecutive(usize),
    /// Overlap with the reference draw at most this large.
    MaxRepeated(usize),
}

impl Rule {
    /// Returns true if `stats` satisfies this rule. Bounds are inclusive.
    pub fn check(&self, stats: &CandidateStats) -> bool {
        match *self {
            Rule::SumRange(bounds) => bounds.contains(stats.sum),
            Rule::EvenCount(bounds) => bounds.contains(stats.even_count),
            Rule::PrimeCount(bounds) => bounds.contains(stats.prime_count),
            Rule::MaxConsecutive(max) => stats.longest_consecutive_run <= max,
            Rule::MaxRepeated(max) => stats.repeated_count <= max,
        }
    }

    /// Short identifier used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Rule::SumRange(_) => "sum_range",
            Rule::EvenCount(_) => "even_odd_ratio",
            Rule::PrimeCount(_) => "prime_range",
            Rule::MaxConsecutive(_) => "max_consecutive",
            Rule::MaxRepeated(_) => "max_repeated",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::SumRange(b) => write!(f, "sum between {} and {}", b.min(), b.max()),
            Rule::EvenCount(b) => write!(f, "{} to {} even numbers", b.min(), b.max()),
            Rule::PrimeCount(b) => write!(f, "{} to {} primes", b.min(), b.max()),
            Rule::MaxConsecutive(max) => write!(f, "at most {} consecutive", max),
            Rule::MaxRepeated(max) => write!(f, "at most {} repeated from reference", max),
        }
    }
}

/// Validator built once per generation call from a [`RuleSet`].
///
/// # Example
///
/// ```
/// use lottoforge_core::{CandidateStats, ConstraintValidator, RuleSet};
///
/// let rules = RuleSet::new().with_sum_range(10, 20).with_even_range(2, 3);
/// let validator = ConstraintValidator::new(&rules);
///
/// assert!(validator.is_accepted(&CandidateStats::from_numbers(&[1, 2, 3, 4], None)));
/// assert!(!validator.is_accepted(&CandidateStats::from_numbers(&[1, 2, 3], None)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintValidator {
    rules: Vec<Rule>,
}

impl ConstraintValidator {
    /// Collects the active constraints of `rule_set`.
    ///
    /// The overlap cap only counts when a reference draw is supplied too.
    pub fn new(rule_set: &RuleSet) -> Self {
        let mut rules = Vec::new();
        if let Some(bounds) = rule_set.sum_range {
            rules.push(Rule::SumRange(bounds));
        }
        if let Some(bounds) = rule_set.even_odd_ratio {
            rules.push(Rule::EvenCount(bounds));
        }
        if let Some(bounds) = rule_set.prime_range {
            rules.push(Rule::PrimeCount(bounds));
        }
        if let Some(max) = rule_set.max_consecutive {
            rules.push(Rule::MaxConsecutive(max));
        }
        if let (Some(max), Some(_)) = (rule_set.max_repeated, rule_set.reference()) {
            rules.push(Rule::MaxRepeated(max));
        }
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns true if every active rule holds.
    pub fn is_accepted(&self, stats: &CandidateStats) -> bool {
        self.rules.iter().all(|rule| rule.check(stats))
    }

    /// Returns the rules `stats` breaks, for diagnostics.
    pub fn violations(&self, stats: &CandidateStats) -> Vec<Rule> {
        self.rules
            .iter()
            .filter(|rule| !rule.check(stats))
            .copied()
            .collect()
    }

    /// Human-readable description of every active rule.
    pub fn describe(&self) -> Vec<String> {
        self.rules.iter().map(ToString::to_string).collect()
    }
}

/// Returns true if `stats` meets every constraint in `rule_set`.
pub fn is_accepted(stats: &CandidateStats, rule_set: &RuleSet) -> bool {
    ConstraintValidator::new(rule_set).is_accepted(stats)
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
