//! Game rules for 8 Bites, independent of any window or renderer.
//!
//! A host loop owns a [`Game`], feeds it the held keys once per tick through [`Game::update`] and
//! draws whatever the accessors describe.

mod map;
pub use map::{Map, Tile, MAP_HEIGHT, MAP_WIDTH};

mod entity;
pub use entity::{Direction, Entity, Input, Mob, Player};

mod animation;
pub use animation::{Animation, ScoreCounter};

mod grid;
pub use grid::Grid;

mod sprite;
pub use sprite::{Sprite, SpriteId};

pub mod collision;
pub use collision::{check_wall_collision, Rect};

mod timer;
pub use timer::Gate;

pub mod title;
pub use title::Title;

mod config;
pub use config::GameConfig;

mod error;
pub use error::{ConfigError, MapParseError};

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use std::time::Instant;
use tracing::{debug, info};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Lose,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Ended(Outcome),
}

/// An event produced by the game model
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    BiteEaten {
        bite: SpriteId,
        first_time: bool,
        points: u32,
    },
    EnemySpawned {
        position: (i32, i32),
        enemies: usize,
    },
    Won {
        score: u32,
    },
    Lost {
        score: u32,
    },
    Reset,
}

/// Everything that is rebuilt when the game restarts.
#[derive(Debug, Clone)]
pub struct GameData {
    pub map: Map,
    pub player: Player,
    pub enemies: Vec<Mob>,
    pub bite: Sprite,
    /// Ids of the bites eaten so far, in the order they were first eaten.
    pub eaten: Vec<SpriteId>,
    pub title: Title,
    pub status: GameStatus,
}

pub struct Game {
    config: GameConfig,
    /// The map as loaded, restored on every reset.
    layout: Map,
    data: GameData,
    rng: StdRng,
    animation_gate: Gate,
}

impl Game {
    /// Starts a game with an RNG seeded from the OS.
    pub fn new(config: GameConfig, map: Map, now: Instant) -> Result<Game, MapParseError> {
        Self::with_rng(config, map, StdRng::from_entropy(), now)
    }

    pub fn with_rng(
        config: GameConfig,
        map: Map,
        mut rng: StdRng,
        now: Instant,
    ) -> Result<Game, MapParseError> {
        if map.floor_positions().next().is_none() {
            return Err(MapParseError::NoFloor);
        }

        let data = Self::fresh_data(&config, &map, &mut rng, now);

        Ok(Game {
            animation_gate: Gate::new(config.animation_period()),
            config,
            layout: map,
            data,
            rng,
        })
    }

    /// Builds the start of a run: the player somewhere on the floor, one enemy away from the
    /// player and a random bite.
    fn fresh_data(config: &GameConfig, map: &Map, rng: &mut StdRng, now: Instant) -> GameData {
        let player = Player::new(floor_position(map, rng), config);
        let enemy = Self::new_enemy(config, map, player.sprite(), rng);
        let bite = Self::new_bite(config, map, rng);

        GameData {
            map: map.clone(),
            player,
            enemies: vec![enemy],
            bite,
            eaten: Vec::new(),
            title: Title::show(title::INTRO_TEXT, now, config),
            status: GameStatus::Playing,
        }
    }

    fn new_enemy(config: &GameConfig, map: &Map, player: &Sprite, rng: &mut StdRng) -> Mob {
        let id = *SpriteId::ENEMIES
            .choose(rng)
            .expect("there is at least one enemy kind");

        Mob::new(id, spawn_location(map, player, rng), config)
    }

    fn new_bite(config: &GameConfig, map: &Map, rng: &mut StdRng) -> Sprite {
        let id = *SpriteId::BITES
            .choose(rng)
            .expect("there is at least one bite kind");

        Sprite::new(id, config.tile_size, config.tile_size).at(floor_position(map, rng))
    }

    /// Runs a single tick.
    ///
    /// Order:
    /// 1. Animation frames (at most once per animation period) and the title
    /// 2. If the game is over only the restart key is looked at
    /// 3. Win / lose check, a game that just ended does nothing else this tick
    /// 4. Eating the current bite
    /// 5. Enemy then player movement
    pub fn update<F: FnMut(GameEvent)>(&mut self, input: &Input, now: Instant, mut callback: F) {
        if self.animation_gate.ready(now) {
            self.animate();
        }
        self.data.title.update(now, &mut self.rng);

        if let GameStatus::Ended(_) = self.data.status {
            if input.restart {
                self.reset(now);
                callback(GameEvent::Reset);
            }
            return;
        }

        if let Some(outcome) = self.check_game_end(now) {
            let score = self.data.player.points();
            callback(match outcome {
                Outcome::Win => GameEvent::Won { score },
                Outcome::Lose => GameEvent::Lost { score },
            });
            return;
        }

        self.check_bite_eaten(&mut callback);
        self.handle_movement(input);
    }

    /// Throws away the current run and starts again on the map it was built with.
    pub fn reset(&mut self, now: Instant) {
        self.data = Self::fresh_data(&self.config, &self.layout, &mut self.rng, now);
        info!("Game reset");
    }

    fn animate(&mut self) {
        self.data.player.animate();
        for enemy in self.data.enemies.iter_mut() {
            enemy.animate();
        }
        self.data.bite.animate();
    }

    fn check_game_end(&mut self, now: Instant) -> Option<Outcome> {
        let outcome = if self.data.eaten.len() >= self.config.bites_to_win {
            Outcome::Win
        } else if self
            .data
            .enemies
            .iter()
            .any(|enemy| self.data.player.collides_with(enemy.sprite()))
        {
            Outcome::Lose
        } else {
            return None;
        };

        let text = match outcome {
            Outcome::Win => title::WIN_TEXT,
            Outcome::Lose => title::LOSE_TEXT,
        };
        self.data.title = Title::show(text, now, &self.config);
        self.data.status = GameStatus::Ended(outcome);
        info!(
            "Game ended: {:?} with {} points",
            outcome,
            self.data.player.points()
        );

        Some(outcome)
    }

    /// A new kind of bite is worth 500 plus 100 per enemy. Eating a kind again is only worth 100
    /// per enemy and brings in another enemy. Either way a new bite appears somewhere else.
    fn check_bite_eaten<F: FnMut(GameEvent)>(&mut self, callback: &mut F) {
        if !self.data.player.collides_with(&self.data.bite) {
            return;
        }

        let bite = self.data.bite.id();
        let enemies = self.data.enemies.len() as u32;
        let first_time = !self.data.eaten.contains(&bite);

        let points = if first_time {
            self.data.eaten.push(bite);
            500 + 100 * enemies
        } else {
            100 * enemies
        };

        self.data.player.add_points(points);
        debug!("Ate {:?} (first time: {}) for {} points", bite, first_time, points);
        callback(GameEvent::BiteEaten {
            bite,
            first_time,
            points,
        });

        if !first_time {
            let position = self.spawn_enemy();
            callback(GameEvent::EnemySpawned {
                position,
                enemies: self.data.enemies.len(),
            });
        }

        self.data.bite = Self::new_bite(&self.config, &self.data.map, &mut self.rng);
    }

    /// Adds an enemy away from the player, returning where it was placed.
    pub fn spawn_enemy(&mut self) -> (i32, i32) {
        let enemy = Self::new_enemy(
            &self.config,
            &self.data.map,
            self.data.player.sprite(),
            &mut self.rng,
        );
        let position = enemy.position();
        self.data.enemies.push(enemy);
        debug!(
            "Spawned enemy at {:?}, there are now {} enemies",
            position,
            self.data.enemies.len()
        );

        position
    }

    fn handle_movement(&mut self, input: &Input) {
        for enemy in self.data.enemies.iter_mut() {
            enemy.process_turn(input, &self.config, &mut self.rng);
            enemy.advance(&self.data.map);
        }

        self.data
            .player
            .process_turn(input, &self.config, &mut self.rng);
        self.data.player.advance(&self.data.map);
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn map(&self) -> &Map {
        &self.data.map
    }

    pub fn player(&self) -> &Player {
        &self.data.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.data.player
    }

    pub fn enemies(&self) -> &[Mob] {
        &self.data.enemies
    }

    pub fn bite(&self) -> &Sprite {
        &self.data.bite
    }

    pub fn eaten(&self) -> &[SpriteId] {
        &self.data.eaten
    }

    pub fn title(&self) -> &Title {
        &self.data.title
    }

    pub fn status(&self) -> GameStatus {
        self.data.status
    }

    pub fn is_ended(&self) -> bool {
        self.data.status != GameStatus::Playing
    }

    pub fn data(&self) -> &GameData {
        &self.data
    }

    /// Direct access for scripted scenarios, e.g. putting the player next to a bite.
    pub fn data_mut(&mut self) -> &mut GameData {
        &mut self.data
    }
}

fn floor_position(map: &Map, rng: &mut StdRng) -> (i32, i32) {
    map.random_floor_position(rng)
        .expect("games are only built on maps with floor")
}

/// Takes a random floor tile that doesn't overlap the given sprite, or any floor tile if the
/// sprite is in the way of all of them.
fn spawn_location(map: &Map, avoid: &Sprite, rng: &mut StdRng) -> (i32, i32) {
    let size = map.tile_size();
    let avoid = avoid.bounds();
    let candidates: Vec<_> = map
        .floor_positions()
        .filter(|&(x, y)| !Rect::new(x, y, size, size).overlaps(&avoid))
        .collect();

    match candidates.choose(rng) {
        Some(point) => *point,
        None => floor_position(map, rng),
    }
}
