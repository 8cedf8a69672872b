//! Tests for candidate sampling.

use super::*;
use lottoforge_test::shapes::{lotofacil, lotomania, megasena};
use lottoforge_test::assert_well_formed;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn test_sample_is_well_formed() {
    let shape = megasena();
    let sampler = CandidateSampler::new(shape, &[], &[]).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    for _ in 0..500 {
        assert_well_formed(&shape, &sampler.sample(&mut rng));
    }
}

#[test]
fn test_zero_based_shape() {
    let shape = lotomania();
    let sampler = CandidateSampler::new(shape, &[], &[]).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(2);

    for _ in 0..100 {
        assert_well_formed(&shape, &sampler.sample(&mut rng));
    }
}

#[test]
fn test_pins_and_bans_honored() {
    let shape = megasena();
    let sampler = CandidateSampler::new(shape, &[1, 2, 3], &[60]).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    for _ in 0..500 {
        let candidate = sampler.sample(&mut rng);
        assert_well_formed(&shape, &candidate);
        assert!(candidate.contains(1) && candidate.contains(2) && candidate.contains(3));
        assert!(!candidate.contains(60));
    }
}

#[test]
fn test_fully_pinned_line() {
    let shape = GameShape::new(3, 1, 10).unwrap();
    let sampler = CandidateSampler::new(shape, &[9, 1, 5], &[]).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    assert_eq!(sampler.sample(&mut rng).numbers(), &[1, 5, 9]);
}

#[test]
fn test_duplicate_pins_collapse() {
    let shape = GameShape::new(3, 1, 10).unwrap();
    let sampler = CandidateSampler::new(shape, &[4, 4, 4], &[]).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let candidate = sampler.sample(&mut rng);
    assert_eq!(candidate.len(), 3);
    assert!(candidate.contains(4));
}

#[test]
fn test_only_remaining_numbers_fill_line() {
    // 5 of [1, 10] with 5 banned: the line is forced.
    let shape = GameShape::new(5, 1, 10).unwrap();
    let sampler = CandidateSampler::new(shape, &[], &[1, 3, 5, 7, 9]).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(6);
    assert_eq!(sampler.sample(&mut rng).numbers(), &[2, 4, 6, 8, 10]);
}

#[test]
fn test_bans_outside_range_are_ignored_for_capacity() {
    let shape = GameShape::new(5, 1, 5).unwrap();
    assert!(CandidateSampler::new(shape, &[], &[0, 6, 100]).is_ok());
}

#[test]
fn test_same_seed_same_candidate() {
    let shape = lotofacil();
    let sampler = CandidateSampler::new(shape, &[], &[]).unwrap();
    let mut a = ChaCha8Rng::seed_from_u64(99);
    let mut b = ChaCha8Rng::seed_from_u64(99);
    assert_eq!(sampler.sample(&mut a), sampler.sample(&mut b));
}

#[test]
fn test_rejects_pinned_and_banned() {
    let result = CandidateSampler::new(megasena(), &[1, 2], &[2]);
    assert!(matches!(result, Err(LottoError::InvalidShape(_))));
}

#[test]
fn test_rejects_pin_out_of_range() {
    let result = CandidateSampler::new(megasena(), &[61], &[]);
    assert!(matches!(result, Err(LottoError::InvalidShape(_))));
}

#[test]
fn test_rejects_too_many_pins() {
    let shape = GameShape::new(3, 1, 10).unwrap();
    let result = CandidateSampler::new(shape, &[1, 2, 3, 4], &[]);
    assert!(matches!(result, Err(LottoError::InvalidShape(_))));
}

#[test]
fn test_rejects_range_exhausted_by_bans() {
    let shape = GameShape::new(5, 1, 10).unwrap();
    let result = CandidateSampler::new(shape, &[1], &[2, 3, 4, 5, 6, 7]);
    assert!(matches!(result, Err(LottoError::InvalidShape(_))));
}

#[test]
fn test_from_rules() {
    let rules = RuleSet::new()
        .with_include_numbers([10])
        .with_exclude_numbers([11]);
    let sampler = CandidateSampler::from_rules(megasena(), &rules).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let candidate = sampler.sample(&mut rng);
    assert!(candidate.contains(10));
    assert!(!candidate.contains(11));
}

#[test]
fn test_generate_candidate_checks_plan() {
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    assert!(generate_candidate(&mut rng, megasena(), &[5], &[5]).is_err());

    let candidate = generate_candidate(&mut rng, megasena(), &[5], &[]).unwrap();
    assert!(candidate.contains(5));
}

