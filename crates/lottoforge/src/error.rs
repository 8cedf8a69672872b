//! Errors surfaced by the convenience entry points.

use thiserror::Error;

use lottoforge_config::ConfigError;
use lottoforge_core::LottoError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Generation(#[from] LottoError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;
