use std::time::{Duration, Instant};

use rand::Rng;

use crate::{GameConfig, Gate};

pub const INTRO_TEXT: &str = "8 BITES TO WIN!";
pub const WIN_TEXT: &str = "YOU WIN!";
pub const LOSE_TEXT: &str = "GAME OVER!";

/// The banner in the middle of the screen. It types itself out one word at a time, shakes a
/// little and disappears once its duration is over.
#[derive(Clone, Debug)]
pub struct Title {
    text: String,
    visible: bool,
    start: Instant,
    duration: Duration,
    word_reveal: Duration,
    words_visible: usize,
    shake: (i32, i32),
    shake_gate: Gate,
    shake_amplitude: i32,
}

impl Title {
    pub fn show(text: &str, now: Instant, config: &GameConfig) -> Self {
        Title {
            text: text.to_string(),
            visible: true,
            start: now,
            duration: config.title_duration(),
            word_reveal: config.word_reveal(),
            words_visible: 0,
            shake: (0, 0),
            shake_gate: Gate::new(config.shake_period()),
            shake_amplitude: config.shake_amplitude,
        }
    }

    pub fn update<R: Rng + ?Sized>(&mut self, now: Instant, rng: &mut R) {
        if !self.visible {
            return;
        }

        let elapsed = now.saturating_duration_since(self.start);

        if self.words_visible < self.word_count()
            && elapsed > self.word_reveal * self.words_visible as u32
        {
            self.words_visible += 1;
        }

        if self.shake_amplitude > 0 && self.shake_gate.ready(now) {
            let a = self.shake_amplitude;
            self.shake = (rng.gen_range(-a, a), rng.gen_range(-a, a));
        }

        if elapsed > self.duration {
            self.visible = false;
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn words_visible(&self) -> usize {
        self.words_visible
    }

    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// The words revealed so far, in order.
    pub fn visible_words(&self) -> impl Iterator<Item = &str> {
        self.text.split_whitespace().take(self.words_visible)
    }

    /// Pixel offset to draw the banner at this frame.
    pub fn shake(&self) -> (i32, i32) {
        self.shake
    }
}
