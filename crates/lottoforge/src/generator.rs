//! Generator entry points that hide engine wiring.

use tracing::{info, warn};

use lottoforge_config::GeneratorConfig;
use lottoforge_core::{Candidate, GameShape, RuleSet};
use lottoforge_generator::{Batch, GenerationEngine};

use crate::error::Result;

/// Configuration file picked up by [`generate`] and [`generate_batch`].
pub const CONFIG_FILE: &str = "lottoforge.toml";

/// Builds an engine with the attempt budget and seed from `config`.
///
/// Without a seed the engine draws from the operating system.
pub fn engine_from_config(config: &GeneratorConfig) -> GenerationEngine {
    let engine = match config.random_seed {
        Some(seed) => GenerationEngine::with_seed(seed),
        None => GenerationEngine::new(),
    };
    engine.with_max_attempts(config.max_attempts)
}

/// Generates one line, using `lottoforge.toml` when present.
///
/// Returns `Ok(None)` if the rules are too restrictive to satisfy within
/// the attempt budget.
///
/// # Errors
///
/// A `lottoforge.toml` that exists but fails to load is an error, as is an
/// impossible shape.
pub fn generate(shape: &GameShape, rules: &RuleSet) -> Result<Option<Candidate>> {
    let mut engine = engine_from_config(&GeneratorConfig::load_or_default(CONFIG_FILE)?);
    Ok(engine.generate_one(shape, rules)?)
}

/// Generates up to `quantity` lines, using `lottoforge.toml` when present.
pub fn generate_batch(shape: &GameShape, rules: &RuleSet, quantity: usize) -> Result<Batch> {
    let mut engine = engine_from_config(&GeneratorConfig::load_or_default(CONFIG_FILE)?);
    Ok(engine.generate_batch(shape, rules, quantity)?)
}

/// Generates up to `quantity` lines with the rules of preset `preset_id`.
///
/// The preset's lottery tag is informational; matching it to `shape` is up
/// to the caller.
///
/// # Example
///
/// ```
/// use lottoforge::{generate_preset_batch, GameShape, GeneratorConfig};
///
/// let config = GeneratorConfig::new().with_random_seed(5);
/// let shape = GameShape::new(6, 1, 60).unwrap();
///
/// let batch = generate_preset_batch(&config, &shape, "balanced-mega", 2).unwrap();
/// assert_eq!(batch.len(), 2);
/// ```
pub fn generate_preset_batch(
    config: &GeneratorConfig,
    shape: &GameShape,
    preset_id: &str,
    quantity: usize,
) -> Result<Batch> {
    let preset = config.preset(preset_id)?;
    info!(
        event = "preset_selected",
        preset = preset.id.as_str(),
        lottery = preset.lottery.as_str(),
    );

    let mut engine = engine_from_config(config);
    let batch = engine.generate_batch(shape, &preset.rules, quantity)?;
    if batch.is_partial() {
        warn!(
            event = "batch_short",
            preset = preset.id.as_str(),
            requested = quantity as u64,
            generated = batch.len() as u64,
        );
    }
    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use lottoforge_config::{ConfigError, PresetConfig};
    use lottoforge_test::assert_satisfies;
    use lottoforge_test::shapes::{lotofacil, megasena};

    #[test]
    fn test_engine_from_config_is_reproducible() {
        let config = GeneratorConfig::new().with_random_seed(9).with_max_attempts(100);
        let mut a = engine_from_config(&config);
        let mut b = engine_from_config(&config);

        assert_eq!(a.max_attempts(), 100);
        assert_eq!(
            a.generate_batch(&megasena(), &RuleSet::new(), 3).unwrap(),
            b.generate_batch(&megasena(), &RuleSet::new(), 3).unwrap()
        );
    }

    #[test]
    fn test_preset_batch_honors_rules() {
        let config = GeneratorConfig::new().with_random_seed(1);
        let shape = lotofacil();
        let batch = generate_preset_batch(&config, &shape, "odd-heavy-loto", 5).unwrap();

        let rules = config.preset("odd-heavy-loto").unwrap().rules;
        assert_eq!(batch.len(), 5);
        for line in &batch {
            assert_satisfies(&shape, &rules, line);
        }
    }

    #[test]
    fn test_infeasible_preset_gives_short_batch() {
        let config = GeneratorConfig::new()
            .with_random_seed(2)
            .with_max_attempts(100)
            .with_preset(PresetConfig::new(
                "impossible",
                "Impossible",
                "megasena",
                RuleSet::new().with_sum_range(0, 20),
            ));

        let batch = generate_preset_batch(&config, &megasena(), "impossible", 5).unwrap();
        assert!(batch.is_empty());
        assert!(batch.is_partial());
    }

    #[test]
    fn test_unknown_preset() {
        let result = generate_preset_batch(&GeneratorConfig::new(), &megasena(), "nope", 1);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::UnknownPreset(_)))
        ));
    }

    #[test]
    fn test_invalid_shape_propagates() {
        let rules = RuleSet::new().with_include_numbers([61]);
        assert!(matches!(
            generate(&megasena(), &rules),
            Err(Error::Generation(_))
        ));
    }

    #[test]
    fn test_generate_without_config_file() {
        let line = generate(&megasena(), &RuleSet::new()).unwrap().unwrap();
        assert_eq!(line.len(), 6);
    }
}
