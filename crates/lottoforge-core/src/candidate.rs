//! Candidate ticket lines.

use std::fmt;
use std::ops::Deref;

use smallvec::SmallVec;

use crate::error::{LottoError, Result};
use crate::shape::GameShape;

/// Inline capacity covering every common draw shape without a heap allocation.
const INLINE_NUMBERS: usize = 16;

/// One complete number set for a single ticket line.
///
/// Numbers are kept strictly ascending, so they are distinct by construction.
///
/// # Example
///
/// ```
/// use lottoforge_core::Candidate;
///
/// let candidate = Candidate::new([42, 7, 13, 7]);
/// assert_eq!(candidate.numbers(), &[7, 13, 42]);
/// assert_eq!(candidate.to_string(), "07 13 42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<u32>", into = "Vec<u32>"))]
pub struct Candidate {
    numbers: SmallVec<[u32; INLINE_NUMBERS]>,
}

impl Candidate {
    /// Creates a candidate from arbitrary numbers, sorting and dropping duplicates.
    pub fn new(numbers: impl IntoIterator<Item = u32>) -> Self {
        let mut numbers: SmallVec<[u32; INLINE_NUMBERS]> = numbers.into_iter().collect();
        numbers.sort_unstable();
        numbers.dedup();
        Self { numbers }
    }

    /// Creates a candidate that must match `shape` exactly.
    ///
    /// Fails when the numbers contain duplicates, fall outside the range or
    /// do not add up to the shape's count.
    pub fn for_shape(shape: &GameShape, numbers: &[u32]) -> Result<Self> {
        if let Some(&out) = numbers.iter().find(|&&n| !shape.contains(n)) {
            return Err(LottoError::InvalidShape(format!(
                "number {} outside [{}, {}]",
                out,
                shape.min(),
                shape.max()
            )));
        }
        let candidate = Self::new(numbers.iter().copied());
        if candidate.len() != numbers.len() {
            return Err(LottoError::InvalidShape(
                "numbers must be distinct".to_string(),
            ));
        }
        if candidate.len() != shape.numbers_count() {
            return Err(LottoError::InvalidShape(format!(
                "expected {} numbers, got {}",
                shape.numbers_count(),
                candidate.len()
            )));
        }
        Ok(candidate)
    }

    /// Ascending numbers of this line.
    pub fn numbers(&self) -> &[u32] {
        &self.numbers
    }

    pub fn contains(&self, number: u32) -> bool {
        self.numbers.binary_search(&number).is_ok()
    }

    pub fn into_vec(self) -> Vec<u32> {
        self.numbers.into_vec()
    }
}

impl Deref for Candidate {
    type Target = [u32];

    fn deref(&self) -> &[u32] {
        &self.numbers
    }
}

impl From<Vec<u32>> for Candidate {
    fn from(numbers: Vec<u32>) -> Self {
        Self::new(numbers)
    }
}

impl From<Candidate> for Vec<u32> {
    fn from(candidate: Candidate) -> Self {
        candidate.into_vec()
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, n) in self.numbers.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:02}", n)?;
        }
        Ok(())
    }
}
