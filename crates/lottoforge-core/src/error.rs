//! Error types for LottoForge

use thiserror::Error;

/// Main error type for LottoForge operations.
///
/// Only structural problems are errors. A generation run that exhausts its
/// attempt budget is a normal outcome and is reported through return values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LottoError {
    /// The requested line cannot be drawn from the usable range
    #[error("Invalid shape: {0}")]
    InvalidShape(String),

    /// The rule set contradicts itself
    #[error("Invalid rule set: {0}")]
    InvalidRuleSet(String),
}

/// Result type alias for LottoForge operations
pub type Result<T> = std::result::Result<T, LottoError>;
