//! Game shape descriptors.
//!
//! A shape fixes how many numbers a single ticket line holds and the
//! inclusive range they are drawn from. Shapes come from the lottery
//! catalog and never change during generation.

use std::fmt;
use std::ops::RangeInclusive;

use crate::error::{LottoError, Result};

/// Draw shape of a lottery: `numbers_count` distinct numbers in `[min, max]`.
///
/// # Example
///
/// ```
/// use lottoforge_core::GameShape;
///
/// let mega = GameShape::new(6, 1, 60).unwrap();
/// assert_eq!(mega.range_size(), 60);
/// assert!(mega.contains(60));
/// assert!(!mega.contains(0));
///
/// assert!(GameShape::new(7, 1, 6).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGameShape", into = "RawGameShape"))]
pub struct GameShape {
    numbers_count: usize,
    min: u32,
    max: u32,
}

impl GameShape {
    /// Creates a shape, checking `numbers_count > 0`, `min <= max` and that
    /// the range holds at least `numbers_count` values.
    pub fn new(numbers_count: usize, min: u32, max: u32) -> Result<Self> {
        if numbers_count == 0 {
            return Err(LottoError::InvalidShape(
                "numbers count must be positive".to_string(),
            ));
        }
        if min > max {
            return Err(LottoError::InvalidShape(format!(
                "range start {} exceeds range end {}",
                min, max
            )));
        }
        let shape = Self {
            numbers_count,
            min,
            max,
        };
        if shape.range_size() < numbers_count as u64 {
            return Err(LottoError::InvalidShape(format!(
                "range [{}, {}] holds {} values, {} requested",
                min,
                max,
                shape.range_size(),
                numbers_count
            )));
        }
        Ok(shape)
    }

    pub fn numbers_count(&self) -> usize {
        self.numbers_count
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Number of values in `[min, max]`.
    pub fn range_size(&self) -> u64 {
        u64::from(self.max) - u64::from(self.min) + 1
    }

    pub fn range(&self) -> RangeInclusive<u32> {
        self.min..=self.max
    }

    pub fn contains(&self, value: u32) -> bool {
        self.range().contains(&value)
    }
}

impl fmt::Display for GameShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of [{}, {}]", self.numbers_count, self.min, self.max)
    }
}

/// Wire form of [`GameShape`]: `{ numbers_count = 6, range = [1, 60] }`.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawGameShape {
    numbers_count: usize,
    range: (u32, u32),
}

#[cfg(feature = "serde")]
impl TryFrom<RawGameShape> for GameShape {
    type Error = LottoError;

    fn try_from(raw: RawGameShape) -> Result<Self> {
        GameShape::new(raw.numbers_count, raw.range.0, raw.range.1)
    }
}

#[cfg(feature = "serde")]
impl From<GameShape> for RawGameShape {
    fn from(shape: GameShape) -> Self {
        Self {
            numbers_count: shape.numbers_count,
            range: (shape.min, shape.max),
        }
    }
}
