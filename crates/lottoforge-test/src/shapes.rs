//! Draw shapes of common lotteries.
//!
//! The real catalog lives outside the generator; these mirror its entries.

use lottoforge_core::GameShape;

fn shape(numbers_count: usize, min: u32, max: u32) -> GameShape {
    match GameShape::new(numbers_count, min, max) {
        Ok(shape) => shape,
        Err(e) => panic!("fixture shape is invalid: {}", e),
    }
}

/// 6 of [1, 60].
pub fn megasena() -> GameShape {
    shape(6, 1, 60)
}

/// 5 of [1, 80].
pub fn quina() -> GameShape {
    shape(5, 1, 80)
}

/// 15 of [1, 25].
pub fn lotofacil() -> GameShape {
    shape(15, 1, 25)
}

/// 50 of [0, 99].
pub fn lotomania() -> GameShape {
    shape(50, 0, 99)
}

/// 7 of [1, 80].
pub fn timemania() -> GameShape {
    shape(7, 1, 80)
}

/// 6 of [1, 50].
pub fn dupla_sena() -> GameShape {
    shape(6, 1, 50)
}
