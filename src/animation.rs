use std::ops::RangeInclusive;
use std::time::{Duration, Instant};

use crate::config::ClockConfig;
use crate::rng::{uniform, Rng};
use crate::slot::{DigitSlot, Glyph};

/// Drives the roll/glitch animation of a single digit slot.
///
/// A roll starts by blanking the slot, then shows 9, then counts down by
/// `stride` mod 10 until the target digit comes up. With a stride coprime to
/// 10 every digit is reached within ten steps. An armed glitch preempts the
/// roll with a short random flicker before the countdown begins.
#[derive(Debug, Clone)]
pub struct DigitAnimator {
    step_duration: Duration,
    glitch_step_duration: Duration,
    glitch_steps: RangeInclusive<u32>,
    stride: u8,
}

impl DigitAnimator {
    pub fn new(config: &ClockConfig) -> Self {
        DigitAnimator {
            step_duration: config.step_duration,
            glitch_step_duration: config.glitch_step_duration,
            glitch_steps: config.glitch_steps.clone(),
            stride: config.stride,
        }
    }

    /// Begins a roll from `old` to `new`. A slot that is already animating
    /// keeps its current animation; the request is dropped.
    pub fn start(&self, slot: &mut DigitSlot, old: u8, new: u8, now: Instant, rng: &mut Rng) {
        if slot.animating {
            return;
        }
        slot.animating = true;
        slot.started = now;
        slot.target = new;
        slot.current = Glyph::Digit(old);
        slot.step = -1;
        if slot.glitch_enabled {
            self.activate_glitch(slot, rng);
        }
    }

    fn activate_glitch(&self, slot: &mut DigitSlot, rng: &mut Rng) {
        slot.glitch_active = true;
        slot.glitch_steps = uniform(rng, *self.glitch_steps.start(), *self.glitch_steps.end());
    }

    /// Advances the slot's animation to `now`. Returns whether the slot is
    /// still animating.
    ///
    /// At most one roll step is applied per call, keyed on elapsed time since
    /// the animation started, so irregular call spacing changes smoothness
    /// but not the outcome.
    pub fn advance(&self, slot: &mut DigitSlot, now: Instant) -> bool {
        if !slot.animating {
            return false;
        }

        let mut elapsed = now.saturating_duration_since(slot.started);

        if slot.glitch_active {
            let glitch_total = self.glitch_step_duration * slot.glitch_steps;
            if elapsed >= glitch_total {
                slot.glitch_active = false;
                slot.glitch_enabled = false;
                // Restart the roll clock so the countdown begins fresh.
                slot.started = now;
                elapsed = Duration::ZERO;
            } else {
                return true;
            }
        }

        let steps_passed = (elapsed.as_millis() / self.step_duration.as_millis().max(1)) as i32;
        if steps_passed > slot.step {
            slot.step = steps_passed;
            match slot.step {
                0 => slot.current = Glyph::Blank,
                1 => slot.current = Glyph::Digit(9),
                _ => {
                    let value = match slot.current {
                        Glyph::Digit(d) => d,
                        Glyph::Blank => 9,
                    };
                    let next = (value + 10 - self.stride % 10) % 10;
                    slot.current = Glyph::Digit(next);
                    if next == slot.target {
                        slot.animating = false;
                    }
                }
            }
        }

        slot.animating
    }

    /// The glyph the slot owes the display right now. While a glitch is
    /// active this is a fresh random digit on every call, so the flicker is
    /// recomputed per frame and never stored.
    pub fn current_display(&self, slot: &DigitSlot, rng: &mut Rng) -> Glyph {
        if slot.glitch_active {
            Glyph::Digit(uniform(rng, 0, 9) as u8)
        } else if slot.animating {
            slot.current
        } else {
            Glyph::Digit(slot.target)
        }
    }
}
