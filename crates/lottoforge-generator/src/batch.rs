//! Batches of accepted candidates.

use std::slice;

use lottoforge_core::Candidate;

/// Ordered candidates from one batch request.
///
/// A batch may hold fewer candidates than requested when single-line searches
/// ran out of attempts or the batch was cancelled. Both are normal results;
/// compare [`len`](Batch::len) with [`requested`](Batch::requested).
/// Candidates are independent, so the same line can appear twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Batch {
    candidates: Vec<Candidate>,
    requested: usize,
    cancelled: bool,
}

impl Batch {
    pub(crate) fn with_capacity(requested: usize) -> Self {
        Self {
            candidates: Vec::with_capacity(requested),
            requested,
            cancelled: false,
        }
    }

    pub(crate) fn push(&mut self, candidate: Candidate) {
        self.candidates.push(candidate);
    }

    pub(crate) fn mark_cancelled(&mut self) {
        self.cancelled = true;
    }

    /// Quantity the caller asked for.
    pub fn requested(&self) -> usize {
        self.requested
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Returns true if fewer candidates came back than were requested.
    pub fn is_partial(&self) -> bool {
        self.candidates.len() < self.requested
    }

    /// Returns true if the batch stopped early on the terminate flag.
    pub fn was_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn iter(&self) -> slice::Iter<'_, Candidate> {
        self.candidates.iter()
    }

    pub fn into_candidates(self) -> Vec<Candidate> {
        self.candidates
    }
}

impl IntoIterator for Batch {
    type Item = Candidate;
    type IntoIter = std::vec::IntoIter<Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.into_iter()
    }
}

impl<'a> IntoIterator for &'a Batch {
    type Item = &'a Candidate;
    type IntoIter = slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}
