//! Tests for generator configuration.

use std::io::Write;

use lottoforge_core::Bounds;

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        max_attempts = 10000
        random_seed = 42

        [[presets]]
        id = "mega-pinned"
        name = "Mega pinned"
        lottery = "megasena"

        [presets.rules]
        sum_range = [150, 220]
        even_odd_ratio = [3, 3]
        prime_range = [1, 2]
        include_numbers = [7, 13]
        exclude_numbers = [60]
        max_repeated = 1
        reference_numbers = [4, 8, 15, 16, 23, 42]
    "#;

    let config = GeneratorConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.max_attempts, 10000);
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.presets.len(), 1);

    let rules = &config.presets[0].rules;
    assert_eq!(rules.sum_range, Some(Bounds::new(150, 220)));
    assert_eq!(rules.even_odd_ratio, Some(Bounds::new(3, 3)));
    assert_eq!(rules.prime_range, Some(Bounds::new(1, 2)));
    assert_eq!(rules.max_consecutive, None);
    assert_eq!(rules.include_numbers, vec![7, 13]);
    assert_eq!(rules.exclude_numbers, vec![60]);
    assert_eq!(rules.reference(), Some(&[4, 8, 15, 16, 23, 42][..]));
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        random_seed: 7
        presets:
          - id: odd-lotofacil
            name: Odd Lotofácil
            lottery: lotofacil
            rules:
              even_odd_ratio: [6, 7]
              sum_range: [180, 210]
    "#;

    let config = GeneratorConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.max_attempts, DEFAULT_MAX_ATTEMPTS);
    assert_eq!(config.random_seed, Some(7));
    assert_eq!(
        config.presets[0].rules.even_odd_ratio,
        Some(Bounds::new(6, 7))
    );
}

#[test]
fn test_empty_config_uses_defaults() {
    let config = GeneratorConfig::from_toml_str("").unwrap();
    assert_eq!(config, GeneratorConfig::default());
    assert_eq!(config.max_attempts, 2000);
}

#[test]
fn test_preset_without_rules_is_unconstrained() {
    let toml = r#"
        [[presets]]
        id = "free"
        name = "Anything goes"
        lottery = "quina"
    "#;
    let config = GeneratorConfig::from_toml_str(toml).unwrap();
    assert!(config.preset("free").unwrap().rules.is_unconstrained());
}

#[test]
fn test_builder() {
    let config = GeneratorConfig::new()
        .with_random_seed(123)
        .with_max_attempts(50)
        .with_preset(PresetConfig::new(
            "tight",
            "Tight",
            "megasena",
            RuleSet::new().with_max_consecutive(1),
        ));

    assert_eq!(config.random_seed, Some(123));
    assert_eq!(config.max_attempts, 50);
    assert_eq!(config.presets.len(), 1);
}

#[test]
fn test_default_presets() {
    let config = GeneratorConfig::new();
    let balanced = config.preset("balanced-mega").unwrap();
    assert_eq!(balanced.lottery, "megasena");
    assert_eq!(balanced.rules.sum_range, Some(Bounds::new(150, 220)));
    assert_eq!(balanced.rules.even_odd_ratio, Some(Bounds::new(2, 4)));
    assert_eq!(balanced.rules.max_consecutive, Some(2));

    let odd = config.preset("odd-heavy-loto").unwrap();
    assert_eq!(odd.lottery, "lotofacil");
}

#[test]
fn test_user_preset_overrides_default() {
    let config = GeneratorConfig::new().with_preset(PresetConfig::new(
        "balanced-mega",
        "My Mega",
        "megasena",
        RuleSet::new().with_sum_range(100, 200),
    ));

    assert_eq!(config.preset("balanced-mega").unwrap().name, "My Mega");
    assert_eq!(config.all_presets().len(), 2);
}

#[test]
fn test_presets_for_lottery() {
    let config = GeneratorConfig::new().with_preset(PresetConfig::new(
        "mega-low",
        "Mega low",
        "megasena",
        RuleSet::new().with_sum_range(21, 120),
    ));

    let ids: Vec<_> = config
        .presets_for("megasena")
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec!["mega-low", "balanced-mega"]);
    assert!(config.presets_for("timemania").is_empty());
}

#[test]
fn test_unknown_preset() {
    let result = GeneratorConfig::new().preset("missing");
    assert!(matches!(result, Err(ConfigError::UnknownPreset(id)) if id == "missing"));
}

#[test]
fn test_validate_rejects_duplicate_ids() {
    let preset = PresetConfig::new("dup", "Dup", "quina", RuleSet::new());
    let config = GeneratorConfig::new()
        .with_preset(preset.clone())
        .with_preset(preset);
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_validate_rejects_contradictory_rules() {
    let config = GeneratorConfig::new().with_preset(PresetConfig::new(
        "broken",
        "Broken",
        "megasena",
        RuleSet::new()
            .with_include_numbers([10])
            .with_exclude_numbers([10]),
    ));
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "max_attempts = 300").unwrap();

    let config = GeneratorConfig::load(file.path()).unwrap();
    assert_eq!(config.max_attempts, 300);
}

#[test]
fn test_load_missing_file() {
    let result = GeneratorConfig::load("/nonexistent/lottoforge.toml");
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_invalid_toml() {
    let result = GeneratorConfig::from_toml_str("max_attempts = \"many\"");
    assert!(matches!(result, Err(ConfigError::Toml(_))));
}

#[test]
fn test_round_trip_preserves_sparse_rules() {
    let config = GeneratorConfig::new().with_preset(PresetConfig::new(
        "sparse",
        "Sparse",
        "quina",
        RuleSet::new().with_max_consecutive(2),
    ));
    let text = toml::to_string(&config).unwrap();
    assert!(!text.contains("sum_range"));

    let parsed = GeneratorConfig::from_toml_str(&text).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_load_yaml_by_extension() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(file, "max_attempts: 250\nrandom_seed: 3").unwrap();

    let config = GeneratorConfig::load(file.path()).unwrap();
    assert_eq!(config.max_attempts, 250);
    assert_eq!(config.random_seed, Some(3));
}

#[test]
fn test_load_or_default_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = GeneratorConfig::load_or_default(dir.path().join("lottoforge.toml")).unwrap();
    assert_eq!(config, GeneratorConfig::default());
}

#[test]
fn test_load_or_default_reports_broken_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lottoforge.toml");
    std::fs::write(&path, "max_attempts = \"oops\"").unwrap();

    let result = GeneratorConfig::load_or_default(&path);
    assert!(matches!(result, Err(ConfigError::Toml(_))));
}

#[test]
fn test_load_or_default_reports_invalid_presets() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lottoforge.toml");
    std::fs::write(
        &path,
        r#"
        [[presets]]
        id = "dup"
        name = "One"
        lottery = "quina"

        [[presets]]
        id = "dup"
        name = "Two"
        lottery = "quina"
        "#,
    )
    .unwrap();

    let result = GeneratorConfig::load_or_default(&path);
    assert!(matches!(result, Err(ConfigError::Invalid(_))));
}
