use crate::{Map, Sprite, Tile};

/// An axis aligned box in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// Last pixel column covered by the box.
    pub fn right(&self) -> i32 {
        self.x + self.width - 1
    }

    /// Last pixel row covered by the box.
    pub fn bottom(&self) -> i32 {
        self.y + self.height - 1
    }

    /// Strict overlap, boxes that only share an edge don't overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }

    /// The inclusive range of tiles `(x1, y1, x2, y2)` this box touches. Uses floor division so
    /// a box poking off the top or left edge lands on tile -1.
    pub fn tile_span(&self, tile_size: i32) -> (i32, i32, i32, i32) {
        (
            self.x.div_euclid(tile_size),
            self.y.div_euclid(tile_size),
            self.right().div_euclid(tile_size),
            self.bottom().div_euclid(tile_size),
        )
    }
}

/// Works out if applying the sprite's velocity would put any part of it in a wall (or off the
/// map). Returns true if the move is blocked.
pub fn check_wall_collision(sprite: &Sprite, map: &Map) -> bool {
    let (x1, y1, x2, y2) = sprite.next_bounds().tile_span(map.tile_size());

    for y in y1..=y2 {
        for x in x1..=x2 {
            if map.tile_at(x, y) == Tile::Wall {
                return true;
            }
        }
    }

    false
}

/// Moves the sprite for this tick unless a wall is in the way. Returns whether it moved.
pub fn step(sprite: &mut Sprite, map: &Map) -> bool {
    if check_wall_collision(sprite, map) {
        return false;
    }

    sprite.move_within(map.pixel_width(), map.pixel_height());
    true
}
