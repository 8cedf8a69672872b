//! Bounded rejection-sampling engine.
//!
//! Each single-line search moves through `Sampling -> Validating` and ends
//! either `Accepted` on the first candidate that meets every rule or
//! `Exhausted` after `max_attempts` rejections. The engine is first-fit:
//! it never compares accepted candidates against each other.

use std::fmt::{self, Debug};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace};

use lottoforge_core::{
    compute_stats, Candidate, ConstraintValidator, GameShape, Result, RuleSet,
};

pub use lottoforge_core::DEFAULT_MAX_ATTEMPTS;

use crate::batch::Batch;
use crate::sampler::CandidateSampler;
use crate::statistics::GenerationStatistics;

/// Terminal state of a single-line search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// A candidate met every rule after `attempts` draws.
    Accepted { candidate: Candidate, attempts: u32 },
    /// Every one of `attempts` draws was rejected.
    Exhausted { attempts: u32 },
}

impl GenerationOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, GenerationOutcome::Accepted { .. })
    }

    /// Draws used by the search.
    pub fn attempts(&self) -> u32 {
        match self {
            GenerationOutcome::Accepted { attempts, .. }
            | GenerationOutcome::Exhausted { attempts } => *attempts,
        }
    }

    pub fn candidate(&self) -> Option<&Candidate> {
        match self {
            GenerationOutcome::Accepted { candidate, .. } => Some(candidate),
            GenerationOutcome::Exhausted { .. } => None,
        }
    }

    pub fn into_candidate(self) -> Option<Candidate> {
        match self {
            GenerationOutcome::Accepted { candidate, .. } => Some(candidate),
            GenerationOutcome::Exhausted { .. } => None,
        }
    }
}

/// Generates candidates that satisfy a [`RuleSet`].
///
/// Generic over the random source so tests can inject a seeded generator.
/// An engine carries no state between calls apart from its random source
/// and statistics counters.
///
/// # Example
///
/// ```
/// use lottoforge_core::{GameShape, RuleSet};
/// use lottoforge_generator::GenerationEngine;
///
/// let shape = GameShape::new(6, 1, 60).unwrap();
/// let rules = RuleSet::new()
///     .with_sum_range(150, 220)
///     .with_even_range(2, 4)
///     .with_max_consecutive(2);
///
/// let mut engine = GenerationEngine::with_seed(7);
/// let candidate = engine.generate_one(&shape, &rules).unwrap().unwrap();
///
/// let sum: u32 = candidate.iter().sum();
/// assert!((150..=220).contains(&sum));
/// ```
pub struct GenerationEngine<R = StdRng> {
    rng: R,
    max_attempts: u32,
    statistics: GenerationStatistics,
    terminate_early_flag: Option<Arc<AtomicBool>>,
}

impl<R> Debug for GenerationEngine<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationEngine")
            .field("max_attempts", &self.max_attempts)
            .field("statistics", &self.statistics)
            .field("has_terminate_flag", &self.terminate_early_flag.is_some())
            .finish()
    }
}

impl GenerationEngine<StdRng> {
    /// Creates an engine seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Creates a reproducible engine.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for GenerationEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> GenerationEngine<R> {
    /// Creates an engine drawing from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            statistics: GenerationStatistics::new(),
            terminate_early_flag: None,
        }
    }

    /// Sets the attempt budget of each single-line search.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Shares a flag that stops a batch before its next member when set.
    ///
    /// A single-line search in progress always runs to its end.
    pub fn with_terminate_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.terminate_early_flag = Some(flag);
        self
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn statistics(&self) -> &GenerationStatistics {
        &self.statistics
    }

    pub fn reset_statistics(&mut self) {
        self.statistics = GenerationStatistics::new();
    }

    pub fn rng(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Searches for one line satisfying `rules`.
    ///
    /// Returns `Ok(None)` when the attempt budget runs out.
    ///
    /// # Errors
    ///
    /// Returns [`LottoError::InvalidShape`](lottoforge_core::LottoError) when
    /// the pinned and banned numbers make the shape impossible. No sampling
    /// happens in that case.
    pub fn generate_one(
        &mut self,
        shape: &GameShape,
        rules: &RuleSet,
    ) -> Result<Option<Candidate>> {
        Ok(self.search(shape, rules)?.into_candidate())
    }

    /// Like [`generate_one`](Self::generate_one), reporting the terminal state
    /// and attempt count.
    pub fn search(&mut self, shape: &GameShape, rules: &RuleSet) -> Result<GenerationOutcome> {
        let sampler = CandidateSampler::from_rules(*shape, rules)?;
        let validator = ConstraintValidator::new(rules);

        debug!(
            event = "generation_start",
            shape = %shape,
            rules = validator.rules().len(),
            max_attempts = self.max_attempts,
        );

        Ok(self.run(&sampler, &validator, rules.reference()))
    }

    /// Generates up to `quantity` independent lines.
    ///
    /// Each member gets its own attempt budget. Members that exhaust it are
    /// skipped, so the batch may be short; duplicates are possible.
    ///
    /// # Errors
    ///
    /// Returns [`LottoError::InvalidShape`](lottoforge_core::LottoError) before
    /// any sampling if the shape is impossible.
    pub fn generate_batch(
        &mut self,
        shape: &GameShape,
        rules: &RuleSet,
        quantity: usize,
    ) -> Result<Batch> {
        let sampler = CandidateSampler::from_rules(*shape, rules)?;
        let validator = ConstraintValidator::new(rules);
        let reference = rules.reference();

        info!(
            event = "batch_start",
            shape = %shape,
            quantity = quantity as u64,
            rules = validator.rules().len(),
        );

        let mut batch = Batch::with_capacity(quantity);
        let mut attempts = 0u64;
        for _ in 0..quantity {
            if self.should_terminate() {
                batch.mark_cancelled();
                break;
            }
            let outcome = self.run(&sampler, &validator, reference);
            attempts += u64::from(outcome.attempts());
            if let Some(candidate) = outcome.into_candidate() {
                batch.push(candidate);
            }
        }

        self.statistics.record_batch(batch.is_partial());
        info!(
            event = "batch_end",
            requested = quantity as u64,
            generated = batch.len() as u64,
            attempts = attempts,
            cancelled = batch.was_cancelled(),
        );

        Ok(batch)
    }

    fn should_terminate(&self) -> bool {
        self.terminate_early_flag
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::SeqCst))
    }

    fn run(
        &mut self,
        sampler: &CandidateSampler,
        validator: &ConstraintValidator,
        reference: Option<&[u32]>,
    ) -> GenerationOutcome {
        for attempt in 1..=self.max_attempts {
            let candidate = sampler.sample(&mut self.rng);
            let stats = compute_stats(&candidate, reference);
            let accepted = validator.is_accepted(&stats);
            self.statistics.record_sample(accepted);

            if accepted {
                debug!(
                    event = "candidate_accepted",
                    attempts = attempt,
                    numbers = %candidate,
                    sum = stats.sum,
                );
                return GenerationOutcome::Accepted {
                    candidate,
                    attempts: attempt,
                };
            }

            trace!(
                event = "candidate_rejected",
                attempt = attempt,
                numbers = %candidate,
            );
        }

        self.statistics.record_exhausted();
        debug!(
            event = "generation_exhausted",
            attempts = self.max_attempts,
        );
        GenerationOutcome::Exhausted {
            attempts: self.max_attempts,
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
