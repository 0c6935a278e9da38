/// A named row of a sprite sheet.
#[derive(Clone, Debug, PartialEq)]
pub struct Animation {
    pub name: &'static str,
    pub frames: usize,
}

impl Animation {
    pub const fn new(name: &'static str, frames: usize) -> Self {
        Animation { name, frames }
    }
}

/// A number shown on screen that chases the real value instead of jumping to it.
///
/// Every call to [`ScoreCounter::next_display`] closes a tenth of the gap (plus one so it always
/// arrives).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScoreCounter {
    displayed: u32,
}

impl ScoreCounter {
    /// Returns the value to draw this frame and then steps towards `target`.
    pub fn next_display(&mut self, target: u32) -> u32 {
        if target <= self.displayed {
            self.displayed = target;
            return target;
        }

        let shown = self.displayed;
        self.displayed += (target - self.displayed) / 10 + 1;
        shown
    }

    pub fn displayed(&self) -> u32 {
        self.displayed
    }
}
