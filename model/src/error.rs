use thiserror::Error;

/// A map file that doesn't follow the tile grammar (digits separated by whitespace).
#[derive(Debug, Error, PartialEq)]
pub enum MapParseError {
    #[error("map token {index} ({token:?}) is not a number")]
    InvalidToken { index: usize, token: String },
    #[error("map token {index} has unknown tile code {code}")]
    UnknownTile { index: usize, code: u32 },
    #[error("map should have {expected} tiles but has {found}")]
    WrongTileCount { expected: usize, found: usize },
    #[error("map has no floor tiles to put anything on")]
    NoFloor,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("couldn't parse config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{name} speed {speed} must be positive and divide the tile size {tile_size}")]
    InvalidSpeed {
        name: &'static str,
        speed: i32,
        tile_size: i32,
    },
    #[error("the tile size must be positive (was {0})")]
    InvalidTileSize(i32),
    #[error("bites to win must be between 1 and {max} (was {found})")]
    InvalidWinCount { found: usize, max: usize },
}
