use rand::{Rng, RngCore};

use crate::{Entity, GameConfig, Input, Sprite, SpriteId};

/// An enemy that wanders the maze at random.
#[derive(Clone, Debug)]
pub struct Mob {
    sprite: Sprite,
}

impl Mob {
    pub fn new(id: SpriteId, pos: (i32, i32), config: &GameConfig) -> Self {
        Mob {
            sprite: Sprite::new(id, config.tile_size, config.tile_size).at(pos),
        }
    }
}

impl Entity for Mob {
    fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    fn sprite_mut(&mut self) -> &mut Sprite {
        &mut self.sprite
    }

    /// Only changes course on a tile boundary. A high roll may pick a new horizontal velocity if
    /// it isn't already moving horizontally, a low roll does the same vertically. The new
    /// velocity can be zero so mobs sometimes stop for a while.
    fn process_turn(&mut self, _input: &Input, config: &GameConfig, rng: &mut dyn RngCore) {
        if !self.sprite.is_aligned(config.tile_size) {
            return;
        }

        let roll: u32 = rng.gen_range(0, 101);
        let speed = config.enemy_speed;

        if roll > 100u32.saturating_sub(config.wander_chance) && self.sprite.vx == 0 {
            let step: i32 = rng.gen_range(-1, 2);
            self.sprite.set_velocity((step * speed, 0));
        }

        if roll < config.wander_chance && self.sprite.vy == 0 {
            let step: i32 = rng.gen_range(-1, 2);
            self.sprite.set_velocity((0, step * speed));
        }
    }
}
