//! Scroll-linked effects: hero parallax and one-shot card reveal.
//!
//! Inputs are bounding-rect numbers in CSS pixels, so these functions stay
//! independent of the DOM.

use crate::constants::{CARD_REVEAL_AMOUNT, RIBBON_SHIFTS_PX};

/// Progress of the hero scrolling out of view: 0 while its top sits at (or
/// below) the viewport top, 1 once its bottom has reached it.
#[inline]
pub fn hero_progress(rect_top: f32, rect_height: f32) -> f32 {
    if rect_height <= 0.0 || !rect_top.is_finite() {
        return 0.0;
    }
    (-rect_top / rect_height).clamp(0.0, 1.0)
}

#[derive(Clone, Debug)]
pub struct ParallaxParams {
    pub ribbon_shifts_px: [f32; 2],
}

impl Default for ParallaxParams {
    fn default() -> Self {
        Self {
            ribbon_shifts_px: RIBBON_SHIFTS_PX,
        }
    }
}

impl ParallaxParams {
    pub fn ribbon_offsets(&self, progress: f32) -> [f32; 2] {
        let t = progress.clamp(0.0, 1.0);
        self.ribbon_shifts_px.map(|shift| shift * t)
    }
}

/// Fraction of an element's height inside a viewport of `viewport_height`.
#[inline]
pub fn visible_fraction(rect_top: f32, rect_height: f32, viewport_height: f32) -> f32 {
    if rect_height <= 0.0 {
        return 0.0;
    }
    let top = rect_top.max(0.0);
    let bottom = (rect_top + rect_height).min(viewport_height);
    ((bottom - top) / rect_height).clamp(0.0, 1.0)
}

/// Latching reveal: once `amount` of the element has been visible it stays
/// revealed.
#[derive(Clone, Copy, Debug)]
pub struct Reveal {
    amount: f32,
    revealed: bool,
}

impl Reveal {
    pub fn new(amount: f32) -> Self {
        Self {
            amount,
            revealed: false,
        }
    }

    /// Card rule: 30% visible.
    pub fn card() -> Self {
        Self::new(CARD_REVEAL_AMOUNT)
    }

    /// Any visible portion.
    pub fn any() -> Self {
        Self::new(0.0)
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feed the current rect. Returns true only on the update that flips
    /// the element to revealed.
    pub fn update(&mut self, rect_top: f32, rect_height: f32, viewport_height: f32) -> bool {
        if self.revealed {
            return false;
        }
        let frac = visible_fraction(rect_top, rect_height, viewport_height);
        let hit = if self.amount <= 0.0 {
            frac > 0.0
        } else {
            frac >= self.amount
        };
        if hit {
            self.revealed = true;
        }
        hit
    }
}
