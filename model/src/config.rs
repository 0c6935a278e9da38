use std::time::Duration;

use serde::Deserialize;

use crate::{ConfigError, SpriteId};

/// Tunables for a game. Every field has a default so a config file only needs to mention what it
/// changes.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub tile_size: i32,
    pub player_speed: i32,
    pub enemy_speed: i32,
    /// Out of 100, the chance an aligned enemy picks a new horizontal (and separately vertical)
    /// velocity each tick.
    pub wander_chance: u32,
    pub bites_to_win: usize,
    pub animation_period_ms: u64,
    pub title_duration_ms: u64,
    pub word_reveal_ms: u64,
    pub shake_period_ms: u64,
    pub shake_amplitude: i32,
    /// Name of a map in the resources `maps` folder, the built in layout is used when missing.
    pub map: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            tile_size: 32,
            player_speed: 2,
            enemy_speed: 1,
            wander_chance: 25,
            bites_to_win: 8,
            animation_period_ms: 100,
            title_duration_ms: 5000,
            word_reveal_ms: 1000,
            shake_period_ms: 50,
            shake_amplitude: 3,
            map: None,
        }
    }
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<GameConfig, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Sprites only ever stop on tile boundaries if their speed divides the tile size.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tile_size <= 0 {
            return Err(ConfigError::InvalidTileSize(self.tile_size));
        }

        for &(name, speed) in &[("player", self.player_speed), ("enemy", self.enemy_speed)] {
            if speed <= 0 || self.tile_size % speed != 0 {
                return Err(ConfigError::InvalidSpeed {
                    name,
                    speed,
                    tile_size: self.tile_size,
                });
            }
        }

        let max = SpriteId::BITES.len();
        if self.bites_to_win == 0 || self.bites_to_win > max {
            return Err(ConfigError::InvalidWinCount {
                found: self.bites_to_win,
                max,
            });
        }

        Ok(())
    }

    pub fn animation_period(&self) -> Duration {
        Duration::from_millis(self.animation_period_ms)
    }

    pub fn title_duration(&self) -> Duration {
        Duration::from_millis(self.title_duration_ms)
    }

    pub fn word_reveal(&self) -> Duration {
        Duration::from_millis(self.word_reveal_ms)
    }

    pub fn shake_period(&self) -> Duration {
        Duration::from_millis(self.shake_period_ms)
    }
}
