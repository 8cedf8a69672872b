//! Derived statistics of a number set.
//!
//! Everything here is a pure function of its input. Stats are computed on
//! demand and never stored alongside a candidate.

use crate::candidate::Candidate;

/// Metrics derived from one line of numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub struct CandidateStats {
    pub sum: u64,
    pub even_count: usize,
    pub odd_count: usize,
    /// Length of the longest run of consecutive integers, at least 1 for a non-empty line.
    pub longest_consecutive_run: usize,
    /// `max - min` of the line.
    pub range_span: u32,
    /// Overlap with the reference draw, 0 without one.
    pub repeated_count: usize,
    pub prime_count: usize,
    /// Number of adjacent pairs `(n, n + 1)` in the line.
    pub consecutive_pairs: usize,
}

impl CandidateStats {
    /// Computes stats for numbers in any order.
    ///
    /// # Example
    ///
    /// ```
    /// use lottoforge_core::CandidateStats;
    ///
    /// let stats = CandidateStats::from_numbers(&[4, 5, 6, 10, 23, 31], Some(&[5, 10, 50][..]));
    /// assert_eq!(stats.sum, 79);
    /// assert_eq!(stats.even_count, 3);
    /// assert_eq!(stats.odd_count, 3);
    /// assert_eq!(stats.longest_consecutive_run, 3);
    /// assert_eq!(stats.range_span, 27);
    /// assert_eq!(stats.repeated_count, 2);
    /// assert_eq!(stats.prime_count, 3);
    /// ```
    pub fn from_numbers(numbers: &[u32], reference: Option<&[u32]>) -> Self {
        let mut sorted = numbers.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        Self::from_sorted(&sorted, reference)
    }

    fn from_sorted(sorted: &[u32], reference: Option<&[u32]>) -> Self {
        let (first, last) = match (sorted.first(), sorted.last()) {
            (Some(&first), Some(&last)) => (first, last),
            _ => return Self::default(),
        };

        let sum = sorted.iter().map(|&n| u64::from(n)).sum();
        let even_count = sorted.iter().filter(|&&n| n % 2 == 0).count();

        let mut longest = 1;
        let mut current = 1;
        let mut pairs = 0;
        for window in sorted.windows(2) {
            if window[1] == window[0] + 1 {
                current += 1;
                pairs += 1;
            } else {
                current = 1;
            }
            longest = longest.max(current);
        }

        let repeated_count = reference
            .map(|reference| sorted.iter().filter(|n| reference.contains(n)).count())
            .unwrap_or(0);

        Self {
            sum,
            even_count,
            odd_count: sorted.len() - even_count,
            longest_consecutive_run: longest,
            range_span: last - first,
            repeated_count,
            prime_count: sorted.iter().filter(|&&n| is_prime(n)).count(),
            consecutive_pairs: pairs,
        }
    }
}

/// Computes stats for a candidate, counting overlap with `reference` if given.
pub fn compute_stats(candidate: &Candidate, reference: Option<&[u32]>) -> CandidateStats {
    CandidateStats::from_sorted(candidate.numbers(), reference)
}

/// Trial division over `6k ± 1`.
pub fn is_prime(n: u32) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let n = u64::from(n);
    let mut i = 5u64;
    while i * i <= n {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
