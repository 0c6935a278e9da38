use rand::RngCore;

use crate::{Direction, Entity, GameConfig, Input, ScoreCounter, Sprite, SpriteId};

#[derive(Clone, Debug)]
pub struct Player {
    sprite: Sprite,
    /// A turn requested between tiles, taken at the next tile boundary.
    queued: Option<Direction>,
    points: u32,
    score_counter: ScoreCounter,
}

impl Player {
    pub fn new(pos: (i32, i32), config: &GameConfig) -> Self {
        Player {
            sprite: Sprite::new(SpriteId::Player, config.tile_size, config.tile_size).at(pos),
            queued: None,
            points: 0,
            score_counter: ScoreCounter::default(),
        }
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn add_points(&mut self, points: u32) {
        self.points += points;
    }

    /// The score to draw this frame, it lags behind the real score and catches up over a few
    /// frames.
    pub fn displayed_points(&mut self) -> u32 {
        self.score_counter.next_display(self.points)
    }

    pub fn queued(&self) -> Option<Direction> {
        self.queued
    }

    fn head(&mut self, direction: Direction, speed: i32) {
        let (x, y) = direction.vector();
        self.sprite.set_velocity((x * speed, y * speed));
        self.sprite.set_animation(direction.animation());
    }
}

impl Entity for Player {
    fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    fn sprite_mut(&mut self) -> &mut Sprite {
        &mut self.sprite
    }

    /// Turning is only allowed on tile boundaries so the player always runs down the middle of a
    /// corridor. Input between tiles is remembered and applied at the next boundary.
    fn process_turn(&mut self, input: &Input, config: &GameConfig, _rng: &mut dyn RngCore) {
        let aligned = self.sprite.is_aligned(config.tile_size);

        if aligned {
            if let Some(direction) = self.queued.take() {
                self.head(direction, config.player_speed);
            }
        }

        if let Some(direction) = input.direction() {
            if aligned {
                self.head(direction, config.player_speed);
                self.queued = None;
            } else {
                self.queued = Some(direction);
            }
        }
    }
}
