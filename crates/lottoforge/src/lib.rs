//! LottoForge - Constrained Lottery Number Generation in Rust
//!
//! Describe the draw shape, pick the constraints, get ticket lines.
//!
//! # Example
//!
//! ```rust
//! use lottoforge::prelude::*;
//!
//! let shape = GameShape::new(6, 1, 60).unwrap();
//! let rules = RuleSet::new().with_even_range(3, 3).with_max_consecutive(1);
//!
//! let mut engine = GenerationEngine::with_seed(11);
//! let batch = engine.generate_batch(&shape, &rules, 3).unwrap();
//!
//! for line in &batch {
//!     let stats = compute_stats(line, None);
//!     assert_eq!(stats.even_count, 3);
//!     assert_eq!(stats.longest_consecutive_run, 1);
//! }
//! ```

// Domain types
pub use lottoforge_core::{
    compute_stats, is_accepted, Bounds, Candidate, CandidateStats, ConstraintValidator,
    GameShape, LottoError, Rule, RuleSet, DEFAULT_MAX_ATTEMPTS,
};

// Search
pub use lottoforge_generator::{
    generate_candidate, Batch, CandidateSampler, GenerationEngine, GenerationOutcome,
    GenerationStatistics,
};

// Configuration
pub use lottoforge_config::{default_presets, ConfigError, GeneratorConfig, PresetConfig};

#[cfg(feature = "console")]
pub mod console;

mod error;
mod generator;

pub use error::{Error, Result};
pub use generator::{
    engine_from_config, generate, generate_batch, generate_preset_batch, CONFIG_FILE,
};

pub mod prelude {
    pub use super::{
        compute_stats, Batch, Bounds, Candidate, CandidateStats, GameShape, GenerationEngine,
        GeneratorConfig, RuleSet,
    };
}
