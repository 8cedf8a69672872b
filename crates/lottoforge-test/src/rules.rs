//! Rule sets used across tests.

use lottoforge_core::RuleSet;

/// Balanced Mega-Sena line: sum 150..=220, 2 to 4 evens, no run of three.
pub fn balanced_mega() -> RuleSet {
    RuleSet::new()
        .with_sum_range(150, 220)
        .with_even_range(2, 4)
        .with_max_consecutive(2)
}

/// Odd-leaning Lotofácil line: 6 or 7 evens, sum 180..=210.
pub fn odd_heavy_loto() -> RuleSet {
    RuleSet::new()
        .with_even_range(6, 7)
        .with_sum_range(180, 210)
}

/// Mega-Sena sums top out at 345, so this never accepts.
pub fn unsatisfiable_mega() -> RuleSet {
    RuleSet::new().with_sum_range(346, 400)
}
