//! Random candidate sampling.
//!
//! The sampler seeds each line with the pinned numbers, then draws uniformly
//! from the shape's range, skipping banned numbers and duplicates, until the
//! line is full. All structural checks happen once, in [`CandidateSampler::new`],
//! so sampling itself cannot fail.

use rand::Rng;
use smallvec::SmallVec;

use lottoforge_core::{Candidate, GameShape, LottoError, Result, RuleSet};

/// Draws random lines of a fixed shape.
///
/// Holds only the immutable draw plan; the random source is passed to every
/// call so tests can supply a seeded generator.
///
/// # Example
///
/// ```
/// use lottoforge_core::GameShape;
/// use lottoforge_generator::CandidateSampler;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let shape = GameShape::new(6, 1, 60).unwrap();
/// let sampler = CandidateSampler::new(shape, &[7], &[13]).unwrap();
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let candidate = sampler.sample(&mut rng);
/// assert_eq!(candidate.len(), 6);
/// assert!(candidate.contains(7));
/// assert!(!candidate.contains(13));
/// ```
#[derive(Debug, Clone)]
pub struct CandidateSampler {
    shape: GameShape,
    /// Sorted, distinct pinned numbers.
    included: SmallVec<[u32; 8]>,
    /// Sorted, distinct banned numbers.
    excluded: Vec<u32>,
}

impl CandidateSampler {
    /// Builds a sampler, rejecting plans that can never fill a line.
    ///
    /// # Errors
    ///
    /// Returns [`LottoError::InvalidShape`] when a number is both pinned and
    /// banned, a pinned number lies outside the range, more numbers are pinned
    /// than the line holds, or the unbanned range is too small for the rest.
    pub fn new(shape: GameShape, included: &[u32], excluded: &[u32]) -> Result<Self> {
        let mut included: SmallVec<[u32; 8]> = included.iter().copied().collect();
        included.sort_unstable();
        included.dedup();

        let mut excluded = excluded.to_vec();
        excluded.sort_unstable();
        excluded.dedup();

        if let Some(n) = included.iter().find(|n| excluded.binary_search(n).is_ok()) {
            return Err(LottoError::InvalidShape(format!(
                "number {} is both included and excluded",
                n
            )));
        }
        if let Some(n) = included.iter().find(|&&n| !shape.contains(n)) {
            return Err(LottoError::InvalidShape(format!(
                "included number {} outside [{}, {}]",
                n,
                shape.min(),
                shape.max()
            )));
        }

        let count = shape.numbers_count();
        if included.len() > count {
            return Err(LottoError::InvalidShape(format!(
                "{} numbers included, line holds {}",
                included.len(),
                count
            )));
        }

        let banned_in_range = excluded.iter().filter(|&&n| shape.contains(n)).count();
        let free = shape.range_size() - (included.len() + banned_in_range) as u64;
        let needed = (count - included.len()) as u64;
        if free < needed {
            return Err(LottoError::InvalidShape(format!(
                "{} free numbers left for {} open slots",
                free, needed
            )));
        }

        Ok(Self {
            shape,
            included,
            excluded,
        })
    }

    /// Builds a sampler from the pinned and banned numbers of `rules`.
    pub fn from_rules(shape: GameShape, rules: &RuleSet) -> Result<Self> {
        Self::new(shape, &rules.include_numbers, &rules.exclude_numbers)
    }

    pub fn shape(&self) -> &GameShape {
        &self.shape
    }

    /// Draws one ascending line containing every pinned number and no banned one.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Candidate {
        let count = self.shape.numbers_count();
        let mut numbers: SmallVec<[u32; 16]> = SmallVec::with_capacity(count);
        numbers.extend(self.included.iter().copied());

        while numbers.len() < count {
            let n = rng.random_range(self.shape.range());
            if self.excluded.binary_search(&n).is_err() && !numbers.contains(&n) {
                numbers.push(n);
            }
        }

        Candidate::new(numbers)
    }
}

/// Draws a single line of `shape`, checking the plan first.
///
/// Convenience for one-off draws; loops should build a [`CandidateSampler`] once.
pub fn generate_candidate<R: Rng + ?Sized>(
    rng: &mut R,
    shape: GameShape,
    included: &[u32],
    excluded: &[u32],
) -> Result<Candidate> {
    Ok(CandidateSampler::new(shape, included, excluded)?.sample(rng))
}

#[cfg(test)]
#[path = "sampler_tests.rs"]
mod tests;
