use std::ops::RangeInclusive;
use std::time::{Duration, Instant};

use crate::config::ClockConfig;
use crate::rng::{uniform, uniform_duration, Rng};
use crate::slot::{Slot, Slots};

/// Arms a glitch on a random digit slot every 30-60 seconds (by default).
///
/// Arming only sets the slot's `glitch_enabled` flag; nothing is visible
/// until that slot's digit next changes and its roll animation starts.
#[derive(Debug, Clone)]
pub struct GlitchScheduler {
    deadline: Instant,
    rearm: RangeInclusive<Duration>,
}

impl GlitchScheduler {
    pub fn new(config: &ClockConfig, now: Instant, rng: &mut Rng) -> Self {
        let mut scheduler = GlitchScheduler {
            deadline: now,
            rearm: config.glitch_rearm.clone(),
        };
        scheduler.rearm(now, rng);
        scheduler
    }

    fn rearm(&mut self, now: Instant, rng: &mut Rng) {
        self.deadline = now + uniform_duration(rng, &self.rearm);
    }

    /// Called once per tick, before any new animations are started. When the
    /// deadline has passed, arms one slot chosen uniformly at random and
    /// schedules the next glitch.
    pub fn arm_check(&mut self, now: Instant, slots: &mut Slots, rng: &mut Rng) {
        if now < self.deadline {
            return;
        }
        let slot = Slot::ALL[uniform(rng, 0, 3) as usize];
        slots[slot].glitch_enabled = true;
        log::debug!("glitch armed on {:?}", slot);
        self.rearm(now, rng);
    }

    #[cfg(test)]
    pub(crate) fn deadline(&self) -> Instant {
        self.deadline
    }
}
