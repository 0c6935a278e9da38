use bites_model::{ConfigError, MapParseError};
use thiserror::Error;

/// A sprite, sound, font or text resource that couldn't be used.
#[derive(Debug, Error)]
pub enum AssetLoadError {
    #[error("asset {name} not found")]
    NotFound {
        name: String,
        #[source]
        source: ggez::GameError,
    },
    #[error("asset {name} couldn't be decoded")]
    Decode {
        name: String,
        #[source]
        source: ggez::GameError,
    },
    #[error("couldn't read {name}")]
    Read {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

impl AssetLoadError {
    pub fn from_ggez(name: &str, source: ggez::GameError) -> Self {
        let name = name.to_string();
        match source {
            ggez::GameError::ResourceNotFound(..) => AssetLoadError::NotFound { name, source },
            source => AssetLoadError::Decode { name, source },
        }
    }
}

/// Anything that stops the game from starting.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Asset(#[from] AssetLoadError),
    #[error("invalid map: {0}")]
    Map(#[from] MapParseError),
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
    #[error("ggez error: {0}")]
    Ggez(#[from] ggez::GameError),
}
