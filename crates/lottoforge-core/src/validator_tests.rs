//! Tests for rule validation.

use super::*;

fn stats(numbers: &[u32]) -> CandidateStats {
    CandidateStats::from_numbers(numbers, None)
}

#[test]
fn test_empty_rule_set_accepts_everything() {
    let rules = RuleSet::new();
    assert!(is_accepted(&stats(&[1, 2, 3, 4, 5, 6]), &rules));
    assert!(ConstraintValidator::new(&rules).is_empty());
}

#[test]
fn test_sum_range_inclusive() {
    let rules = RuleSet::new().with_sum_range(10, 20);
    assert!(is_accepted(&stats(&[1, 2, 3, 4]), &rules)); // 10
    assert!(is_accepted(&stats(&[5, 15]), &rules)); // 20
    assert!(!is_accepted(&stats(&[1, 2, 3]), &rules)); // 6
    assert!(!is_accepted(&stats(&[10, 11]), &rules)); // 21
}

#[test]
fn test_even_range() {
    let rules = RuleSet::new().with_even_range(2, 3);
    assert!(is_accepted(&stats(&[2, 4, 1, 3]), &rules));
    assert!(is_accepted(&stats(&[2, 4, 6, 1]), &rules));
    assert!(!is_accepted(&stats(&[2, 1, 3, 5]), &rules));
    assert!(!is_accepted(&stats(&[2, 4, 6, 8]), &rules));
}

#[test]
fn test_exact_even_count() {
    let rules = RuleSet::new().with_even_range(3, 3);
    assert!(is_accepted(&stats(&[2, 4, 6, 1, 3, 5]), &rules));
    assert!(!is_accepted(&stats(&[2, 4, 1, 3, 5, 7]), &rules));
}

#[test]
fn test_prime_range() {
    let rules = RuleSet::new().with_prime_range(1, 2);
    assert!(is_accepted(&stats(&[2, 4, 6]), &rules));
    assert!(is_accepted(&stats(&[2, 3, 4]), &rules));
    assert!(!is_accepted(&stats(&[4, 6, 8]), &rules));
    assert!(!is_accepted(&stats(&[2, 3, 5]), &rules));
}

#[test]
fn test_max_consecutive() {
    let rules = RuleSet::new().with_max_consecutive(2);
    assert!(is_accepted(&stats(&[1, 2, 4, 5, 7]), &rules));
    assert!(!is_accepted(&stats(&[1, 2, 3, 7]), &rules));
}

#[test]
fn test_max_repeated_uses_reference() {
    let rules = RuleSet::new().with_max_repeated(1, [1, 2, 3]);
    let reference = rules.reference();
    assert!(is_accepted(
        &CandidateStats::from_numbers(&[1, 10, 20], reference),
        &rules
    ));
    assert!(!is_accepted(
        &CandidateStats::from_numbers(&[1, 2, 20], reference),
        &rules
    ));
}

#[test]
fn test_max_repeated_without_reference_is_ignored() {
    let rules = RuleSet::new().with_max_repeated(0, Vec::new());
    let validator = ConstraintValidator::new(&rules);
    assert!(validator.is_empty());
}

#[test]
fn test_empty_bounds_never_accept() {
    let rules = RuleSet::new().with_sum_range(100, 50);
    assert!(!is_accepted(&stats(&[60]), &rules));
    assert!(!is_accepted(&stats(&[100]), &rules));
}

#[test]
fn test_all_or_nothing() {
    let rules = RuleSet::new()
        .with_sum_range(10, 20)
        .with_even_range(4, 4)
        .with_max_consecutive(1);
    let validator = ConstraintValidator::new(&rules);
    let s = stats(&[1, 2, 3, 4]);

    assert!(!validator.is_accepted(&s));
    assert_eq!(
        validator.violations(&s),
        vec![Rule::EvenCount(Bounds::new(4, 4)), Rule::MaxConsecutive(1)]
    );
}

#[test]
fn test_rule_order_and_names() {
    let rules = RuleSet::new()
        .with_max_consecutive(2)
        .with_sum_range(150, 220)
        .with_even_range(2, 4);
    let names: Vec<_> = ConstraintValidator::new(&rules)
        .rules()
        .iter()
        .map(Rule::name)
        .collect();
    assert_eq!(names, vec!["sum_range", "even_odd_ratio", "max_consecutive"]);
}

#[test]
fn test_describe() {
    let rules = RuleSet::new()
        .with_sum_range(150, 220)
        .with_max_repeated(2, [4, 8, 15]);
    assert_eq!(
        ConstraintValidator::new(&rules).describe(),
        vec![
            "sum between 150 and 220".to_string(),
            "at most 2 repeated from reference".to_string(),
        ]
    );
}
