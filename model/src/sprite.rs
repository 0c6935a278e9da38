use crate::{Animation, Rect};

const PLAYER_ANIMATIONS: &[Animation] = &[
    Animation::new("right", 12),
    Animation::new("left", 12),
    Animation::new("up", 12),
    Animation::new("down", 12),
];

const SLIME_ANIMATIONS: &[Animation] = &[Animation::new("idle", 10)];

const CHEESE_ANIMATIONS: &[Animation] = &[Animation::new("idle", 9)];
const PIZZA_ANIMATIONS: &[Animation] = &[Animation::new("idle", 10)];
const DONUT_ANIMATIONS: &[Animation] = &[Animation::new("idle", 23)];
const SUSHI_ANIMATIONS: &[Animation] = &[Animation::new("idle", 12)];
const ORANGE_ANIMATIONS: &[Animation] = &[Animation::new("idle", 8)];
const AVOCADO_ANIMATIONS: &[Animation] = &[Animation::new("idle", 21)];
const APPLE_ANIMATIONS: &[Animation] = &[Animation::new("idle", 20)];
const BANANA_ANIMATIONS: &[Animation] = &[Animation::new("idle", 21)];

/// What a sprite is. Bites are compared by id to know if they were eaten before.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpriteId {
    Player,
    Slime,
    Cheese,
    Pizza,
    Donut,
    Sushi,
    Orange,
    Avocado,
    Apple,
    Banana,
}

impl SpriteId {
    pub const BITES: [SpriteId; 8] = [
        SpriteId::Cheese,
        SpriteId::Pizza,
        SpriteId::Donut,
        SpriteId::Sushi,
        SpriteId::Orange,
        SpriteId::Avocado,
        SpriteId::Apple,
        SpriteId::Banana,
    ];

    pub const ENEMIES: [SpriteId; 1] = [SpriteId::Slime];

    pub fn animations(self) -> &'static [Animation] {
        use SpriteId::*;

        match self {
            Player => PLAYER_ANIMATIONS,
            Slime => SLIME_ANIMATIONS,
            Cheese => CHEESE_ANIMATIONS,
            Pizza => PIZZA_ANIMATIONS,
            Donut => DONUT_ANIMATIONS,
            Sushi => SUSHI_ANIMATIONS,
            Orange => ORANGE_ANIMATIONS,
            Avocado => AVOCADO_ANIMATIONS,
            Apple => APPLE_ANIMATIONS,
            Banana => BANANA_ANIMATIONS,
        }
    }

    /// The sprite sheet name, relative to the sprites folder and without extension.
    pub fn asset_name(self) -> &'static str {
        use SpriteId::*;

        match self {
            Player => "player/yellow",
            Slime => "npc/slime",
            Cheese => "items/cheese",
            Pizza => "items/pizza",
            Donut => "items/donut",
            Sushi => "items/sushi",
            Orange => "items/orange",
            Avocado => "items/avocado",
            Apple => "items/apple",
            Banana => "items/banana",
        }
    }

    pub fn is_bite(self) -> bool {
        Self::BITES.contains(&self)
    }
}

/// Anything drawn from a sprite sheet that sits on the pixel grid.
#[derive(Clone, Debug)]
pub struct Sprite {
    id: SpriteId,
    pub x: i32,
    pub y: i32,
    pub vx: i32,
    pub vy: i32,
    width: i32,
    height: i32,
    animations: &'static [Animation],
    current_animation: usize,
    current_frame: usize,
}

impl Sprite {
    pub fn new(id: SpriteId, width: i32, height: i32) -> Self {
        Sprite {
            id,
            x: 0,
            y: 0,
            vx: 0,
            vy: 0,
            width,
            height,
            animations: id.animations(),
            current_animation: 0,
            current_frame: 0,
        }
    }

    pub fn at(mut self, (x, y): (i32, i32)) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn id(&self) -> SpriteId {
        self.id
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn velocity(&self) -> (i32, i32) {
        (self.vx, self.vy)
    }

    pub fn set_velocity(&mut self, (vx, vy): (i32, i32)) {
        self.vx = vx;
        self.vy = vy;
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Switches animation by name. The frame restarts only if the animation actually changed and
    /// unknown names are ignored.
    pub fn set_animation(&mut self, name: &str) {
        if let Some(index) = self.animations.iter().position(|a| a.name == name) {
            if index != self.current_animation {
                self.current_animation = index;
                self.current_frame = 0;
            }
        }
    }

    pub fn animation(&self) -> &'static Animation {
        &self.animations[self.current_animation]
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    /// Steps to the next frame of the current animation, wrapping at the end.
    pub fn animate(&mut self) {
        self.current_frame += 1;
        if self.current_frame >= self.animation().frames {
            self.current_frame = 0;
        }
    }

    /// Applies the velocity and keeps the sprite inside the screen.
    pub fn move_within(&mut self, screen_width: i32, screen_height: i32) {
        self.x = (self.x + self.vx).max(0).min(screen_width - self.width);
        self.y = (self.y + self.vy).max(0).min(screen_height - self.height);
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Where the sprite would be after this tick's velocity is applied.
    pub fn next_bounds(&self) -> Rect {
        Rect::new(self.x + self.vx, self.y + self.vy, self.width, self.height)
    }

    pub fn collides_with(&self, other: &Sprite) -> bool {
        self.bounds().overlaps(&other.bounds())
    }

    pub fn is_aligned(&self, tile_size: i32) -> bool {
        self.x % tile_size == 0 && self.y % tile_size == 0
    }

    pub fn is_moving(&self) -> bool {
        self.vx != 0 || self.vy != 0
    }

    /// Top left pixel of the current frame in the sprite sheet. Frames run left to right and
    /// animations top to bottom.
    pub fn frame_origin(&self) -> (i32, i32) {
        (
            self.current_frame as i32 * self.width,
            self.current_animation as i32 * self.height,
        )
    }

    /// The sheet's first frame, used for icons.
    pub fn first_frame_origin(&self) -> (i32, i32) {
        (0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn animate_wraps_before_frame_count() {
        let mut sprite = Sprite::new(SpriteId::Orange, 32, 32);
        let frames = sprite.animation().frames;
        assert_eq!(frames, 8);

        let mut seen = Vec::new();
        for _ in 0..frames * 2 {
            seen.push(sprite.current_frame());
            sprite.animate();
            assert!(sprite.current_frame() < frames);
        }

        let expected: Vec<usize> = (0..frames).chain(0..frames).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn set_animation_resets_frame_only_on_change() {
        let mut sprite = Sprite::new(SpriteId::Player, 32, 32);
        sprite.animate();
        sprite.animate();

        sprite.set_animation("right");
        assert_eq!(sprite.current_frame(), 2);

        sprite.set_animation("up");
        assert_eq!(sprite.animation().name, "up");
        assert_eq!(sprite.current_frame(), 0);
        assert_eq!(sprite.frame_origin(), (0, 64));
    }

    #[test]
    fn unknown_animation_is_ignored() {
        let mut sprite = Sprite::new(SpriteId::Player, 32, 32);
        sprite.set_animation("down");
        sprite.animate();

        sprite.set_animation("sideways");
        assert_eq!(sprite.animation().name, "down");
        assert_eq!(sprite.current_frame(), 1);
    }

    #[test]
    fn move_within_clamps_to_screen() {
        let mut sprite = Sprite::new(SpriteId::Slime, 32, 32).at((2, 447));
        sprite.set_velocity((-5, 5));
        sprite.move_within(640, 480);
        assert_eq!(sprite.position(), (0, 448));

        sprite.set_velocity((700, -1));
        sprite.move_within(640, 480);
        assert_eq!(sprite.position(), (608, 447));
    }

    #[test]
    fn collision_is_rectangle_overlap() {
        let player = Sprite::new(SpriteId::Player, 32, 32).at((64, 64));

        let touching = Sprite::new(SpriteId::Slime, 32, 32).at((96, 64));
        assert!(!player.collides_with(&touching));

        let overlapping = Sprite::new(SpriteId::Slime, 32, 32).at((95, 90));
        assert!(player.collides_with(&overlapping));
        assert!(overlapping.collides_with(&player));
    }

    #[test]
    fn frame_origin_follows_frame() {
        let mut sprite = Sprite::new(SpriteId::Donut, 32, 32);
        for _ in 0..3 {
            sprite.animate();
        }
        assert_eq!(sprite.frame_origin(), (96, 0));
        assert_eq!(sprite.first_frame_origin(), (0, 0));
    }

    #[test]
    fn bites_are_distinct() {
        for (i, a) in SpriteId::BITES.iter().enumerate() {
            assert!(a.is_bite());
            for b in &SpriteId::BITES[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(!SpriteId::Slime.is_bite());
        assert!(!SpriteId::Player.is_bite());
    }
}
