//! Rule sets constraining generated lines.
//!
//! Every constraint is optional and toggled independently. An empty
//! [`RuleSet`] accepts any line of the right shape.

use std::fmt;

use crate::error::{LottoError, Result};

/// Inclusive `[min, max]` bound, written as a two element array in config files.
///
/// # Example
///
/// ```
/// use lottoforge_core::Bounds;
///
/// let evens = Bounds::new(2, 4);
/// assert!(evens.contains(2));
/// assert!(evens.contains(4));
/// assert!(!evens.contains(5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds<T>(pub T, pub T);

impl<T: PartialOrd + Copy> Bounds<T> {
    pub fn new(min: T, max: T) -> Self {
        Self(min, max)
    }

    pub fn min(&self) -> T {
        self.0
    }

    pub fn max(&self) -> T {
        self.1
    }

    /// Returns true if `min <= value <= max`.
    pub fn contains(&self, value: T) -> bool {
        self.0 <= value && value <= self.1
    }

    /// Returns true when no value can satisfy the bound.
    pub fn is_empty(&self) -> bool {
        self.0 > self.1
    }
}

impl<T: fmt::Display> fmt::Display for Bounds<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.0, self.1)
    }
}

/// Optional statistical constraints a candidate must satisfy.
///
/// `include_numbers` and `exclude_numbers` are structural: the sampler honors
/// them while drawing. The remaining constraints are checked against
/// [`CandidateStats`](crate::CandidateStats) by the validator.
///
/// # Example
///
/// ```
/// use lottoforge_core::{Bounds, RuleSet};
///
/// let rules = RuleSet::new()
///     .with_sum_range(150, 220)
///     .with_even_range(2, 4)
///     .with_max_consecutive(2);
///
/// assert_eq!(rules.sum_range, Some(Bounds::new(150, 220)));
/// assert!(!rules.is_unconstrained());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case", default))]
pub struct RuleSet {
    /// Inclusive bound on the sum of the line.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub sum_range: Option<Bounds<u64>>,

    /// Inclusive bound on how many even numbers the line holds.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub even_odd_ratio: Option<Bounds<usize>>,

    /// Inclusive bound on how many primes the line holds.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub prime_range: Option<Bounds<usize>>,

    /// Longest allowed run of consecutive integers.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub max_consecutive: Option<usize>,

    /// Numbers pinned into every line.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    pub include_numbers: Vec<u32>,

    /// Numbers never drawn.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    pub exclude_numbers: Vec<u32>,

    /// Largest allowed overlap with `reference_numbers`.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub max_repeated: Option<usize>,

    /// Reference draw for the overlap constraint, usually the latest result.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    pub reference_numbers: Vec<u32>,
}

impl RuleSet {
    /// Creates a rule set with no active constraint.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sum_range(mut self, min: u64, max: u64) -> Self {
        self.sum_range = Some(Bounds::new(min, max));
        self
    }

    pub fn with_even_range(mut self, min: usize, max: usize) -> Self {
        self.even_odd_ratio = Some(Bounds::new(min, max));
        self
    }

    pub fn with_prime_range(mut self, min: usize, max: usize) -> Self {
        self.prime_range = Some(Bounds::new(min, max));
        self
    }

    pub fn with_max_consecutive(mut self, max: usize) -> Self {
        self.max_consecutive = Some(max);
        self
    }

    pub fn with_include_numbers(mut self, numbers: impl IntoIterator<Item = u32>) -> Self {
        self.include_numbers = numbers.into_iter().collect();
        self
    }

    pub fn with_exclude_numbers(mut self, numbers: impl IntoIterator<Item = u32>) -> Self {
        self.exclude_numbers = numbers.into_iter().collect();
        self
    }

    /// Caps the overlap with a reference draw.
    pub fn with_max_repeated(
        mut self,
        max: usize,
        reference: impl IntoIterator<Item = u32>,
    ) -> Self {
        self.max_repeated = Some(max);
        self.reference_numbers = reference.into_iter().collect();
        self
    }

    /// Reference draw to compute overlap against, present only when the
    /// overlap constraint is active.
    pub fn reference(&self) -> Option<&[u32]> {
        match self.max_repeated {
            Some(_) if !self.reference_numbers.is_empty() => {
                Some(self.reference_numbers.as_slice())
            }
            _ => None,
        }
    }

    /// Returns true when the rule set imposes nothing.
    pub fn is_unconstrained(&self) -> bool {
        self.sum_range.is_none()
            && self.even_odd_ratio.is_none()
            && self.prime_range.is_none()
            && self.max_consecutive.is_none()
            && self.include_numbers.is_empty()
            && self.exclude_numbers.is_empty()
            && self.reference().is_none()
    }

    /// Structural check: pinned and banned numbers must not overlap.
    ///
    /// Bounds with `min > max` are left alone; they simply never accept.
    pub fn check_structure(&self) -> Result<()> {
        if let Some(n) = self
            .include_numbers
            .iter()
            .find(|n| self.exclude_numbers.contains(n))
        {
            return Err(LottoError::InvalidRuleSet(format!(
                "number {} is both included and excluded",
                n
            )));
        }
        Ok(())
    }
}
