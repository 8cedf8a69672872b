//! Generation statistics.
//!
//! Counters accumulated by a [`GenerationEngine`](crate::GenerationEngine)
//! across calls, useful for spotting rule sets that are too restrictive.

/// Counters for a generation engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationStatistics {
    /// Candidates drawn by the sampler.
    pub candidates_sampled: u64,
    /// Candidates that passed validation.
    pub candidates_accepted: u64,
    /// Candidates discarded by validation.
    pub candidates_rejected: u64,
    /// Single-line searches that used their whole attempt budget.
    pub exhausted_calls: u64,
    /// Batches generated.
    pub batches: u64,
    /// Batches that came back shorter than requested.
    pub partial_batches: u64,
}

impl GenerationStatistics {
    /// Creates empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_sample(&mut self, accepted: bool) {
        self.candidates_sampled += 1;
        if accepted {
            self.candidates_accepted += 1;
        } else {
            self.candidates_rejected += 1;
        }
    }

    pub(crate) fn record_exhausted(&mut self) {
        self.exhausted_calls += 1;
    }

    pub(crate) fn record_batch(&mut self, partial: bool) {
        self.batches += 1;
        if partial {
            self.partial_batches += 1;
        }
    }

    /// Returns the acceptance rate (accepted / sampled).
    pub fn acceptance_rate(&self) -> f64 {
        if self.candidates_sampled == 0 {
            0.0
        } else {
            self.candidates_accepted as f64 / self.candidates_sampled as f64
        }
    }
}
