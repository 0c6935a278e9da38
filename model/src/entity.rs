use rand::RngCore;

use crate::{collision, GameConfig, Map, Sprite};

mod player;
pub use player::Player;

mod mob;
pub use mob::Mob;

#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// One pixel step in this direction.
    pub fn vector(self) -> (i32, i32) {
        use Direction::*;

        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    /// The sprite sheet row used while heading this way.
    pub fn animation(self) -> &'static str {
        use Direction::*;

        match self {
            Up => "up",
            Down => "down",
            Left => "left",
            Right => "right",
        }
    }
}

/// The keys held during a tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Input {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub restart: bool,
}

impl Input {
    /// The held direction, if several are held the first of up, down, left, right wins.
    pub fn direction(&self) -> Option<Direction> {
        if self.up {
            Some(Direction::Up)
        } else if self.down {
            Some(Direction::Down)
        } else if self.left {
            Some(Direction::Left)
        } else if self.right {
            Some(Direction::Right)
        } else {
            None
        }
    }
}

pub trait Entity {
    fn sprite(&self) -> &Sprite;
    fn sprite_mut(&mut self) -> &mut Sprite;

    /// Picks the velocity for this tick, it is applied afterwards by [`Entity::advance`].
    fn process_turn(&mut self, input: &Input, config: &GameConfig, rng: &mut dyn RngCore);

    /// Applies the velocity unless it runs into a wall, returns whether the entity moved.
    fn advance(&mut self, map: &Map) -> bool {
        collision::step(self.sprite_mut(), map)
    }

    fn animate(&mut self) {
        self.sprite_mut().animate();
    }

    fn position(&self) -> (i32, i32) {
        self.sprite().position()
    }

    fn collides_with(&self, other: &Sprite) -> bool {
        self.sprite().collides_with(other)
    }
}
