use std::mem;
use std::time::Instant;

use crate::animation::DigitAnimator;
use crate::config::{stride_reaches_all, ClockConfig};
use crate::differ::DisplayDiffer;
use crate::glitch::GlitchScheduler;
use crate::rng::{new_rng, Rng};
use crate::slot::{Slot, Slots};
use crate::style::{next_enabled, ClockStyle, StyleSet};
use crate::surface::{DrawError, RenderSurface};
use crate::time_source::{Clock, TimeSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Ok,
    Left,
    Right,
}

/// How long a button was held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Press {
    Short,
    Medium,
    Long,
}

/// The clock face: four rolling digit screens, a colon screen with second
/// hand and AM/PM indicator, and an occasional glitch.
///
/// The host calls [`update`](ClockWidget::update) and
/// [`draw`](ClockWidget::draw) periodically from a single task; all state
/// lives here and is only touched from those calls.
pub struct ClockWidget<T, C> {
    config: ClockConfig,
    styles: StyleSet,
    style: ClockStyle,
    animator: DigitAnimator,
    glitch: GlitchScheduler,
    differ: DisplayDiffer,
    slots: Slots,
    time_source: T,
    clock: C,
    rng: Rng,
    second: u8,
    pm: bool,
    last_hour: u8,
    last_minute: u8,
    last_update: Option<Instant>,
    full_redraw: bool,
    clear_screens: bool,
}

impl<T: TimeSource, C: Clock> ClockWidget<T, C> {
    pub fn new(config: ClockConfig, time_source: T, clock: C) -> Self {
        Self::with_rng(config, time_source, clock, new_rng())
    }

    /// Like [`new`](Self::new), with a caller-provided random generator for
    /// deterministic glitch behavior.
    pub fn with_rng(config: ClockConfig, time_source: T, clock: C, mut rng: Rng) -> Self {
        debug_assert!(
            stride_reaches_all(config.stride),
            "stride must be coprime with 10"
        );

        let now = clock.now();
        let hour = time_source.hour();
        let minute = time_source.minute();
        let second = time_source.second();
        let pm = time_source.is_pm();

        let mut slots = Slots::new(now);
        let digits = digits_for(hour, minute, time_source.is_24_hour());
        for slot in Slot::ALL {
            slots[slot].target = digits[slot.index()];
        }

        let animator = DigitAnimator::new(&config);
        let glitch = GlitchScheduler::new(&config, now, &mut rng);

        ClockWidget {
            config,
            styles: StyleSet::from_features(),
            style: ClockStyle::Segment,
            animator,
            glitch,
            differ: DisplayDiffer::new(),
            slots,
            time_source,
            clock,
            rng,
            second,
            pm,
            last_hour: hour,
            last_minute: minute,
            last_update: None,
            full_redraw: false,
            clear_screens: false,
        }
    }

    pub fn style(&self) -> ClockStyle {
        self.style
    }

    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    /// Re-reads the time and starts roll animations on digits that changed.
    /// Skipped when called again within the refresh interval, unless forced.
    pub fn update(&mut self, force: bool) {
        let now = self.clock.now();
        if let Some(last) = self.last_update {
            if !force && now.duration_since(last) < self.config.refresh_interval {
                return;
            }
        }
        self.last_update = Some(now);

        let hour = self.time_source.hour();
        let minute = self.time_source.minute();
        self.second = self.time_source.second();
        self.pm = self.time_source.is_pm();

        self.glitch.arm_check(now, &mut self.slots, &mut self.rng);

        let format_24 = self.time_source.is_24_hour();
        let old = digits_for(self.last_hour, self.last_minute, format_24);
        let new = digits_for(hour, minute, format_24);
        for slot in Slot::ALL {
            let (old_digit, new_digit) = (old[slot.index()], new[slot.index()]);
            if old_digit != new_digit && !self.slots[slot].animating {
                self.animator
                    .start(&mut self.slots[slot], old_digit, new_digit, now, &mut self.rng);
            }
        }

        self.last_hour = hour;
        self.last_minute = minute;
    }

    /// Advances all animations and repaints whatever changed. With `force`
    /// (or after a style/format change) every element is repainted.
    pub fn draw<S: RenderSurface>(&mut self, surface: &mut S, force: bool) -> Result<(), DrawError> {
        let force = force || mem::take(&mut self.full_redraw);
        if mem::take(&mut self.clear_screens) {
            surface.clear_all()?;
        }
        surface.set_font(self.config.font);

        let now = self.clock.now();
        for slot in Slot::ALL {
            self.animator.advance(&mut self.slots[slot], now);
        }

        for slot in Slot::ALL {
            let glyph = self.animator.current_display(&self.slots[slot], &mut self.rng);
            self.differ
                .paint_digit(surface, &self.config, self.style, slot, glyph, force)?;
        }

        self.differ
            .paint_colon(surface, &self.config, self.style, self.second % 2 == 0, force)?;

        if self.config.show_second_ticks {
            let color = if self.style == ClockStyle::Nixie {
                self.config.accent_color
            } else {
                self.config.color
            };
            self.differ
                .paint_seconds(surface, &self.config, color, self.second, force)?;
        }

        if !self.time_source.is_24_hour()
            && self.config.show_am_pm
            && self.style != ClockStyle::Nixie
        {
            let label = if self.pm { "PM" } else { "AM" };
            self.differ.paint_am_pm(surface, &self.config, label, force)?;
        }

        Ok(())
    }

    pub fn on_button(&mut self, button: Button, press: Press) {
        match (button, press) {
            (Button::Ok, Press::Short) => self.cycle_style(),
            (Button::Ok, Press::Medium) => self.toggle_format(),
            _ => {}
        }
    }

    /// Switches to the next enabled style and schedules a clear plus full
    /// repaint for the next draw.
    pub fn cycle_style(&mut self) {
        self.style = next_enabled(self.style, &self.styles);
        self.differ.clear();
        self.clear_screens = true;
        self.full_redraw = true;
        log::info!("clock style changed to {:?}", self.style);
    }

    /// Flips between 12h and 24h display and schedules a full repaint.
    /// Running animations and armed glitches are left alone.
    pub fn toggle_format(&mut self) {
        let format_24 = !self.time_source.is_24_hour();
        self.time_source.set_24_hour(format_24);
        self.full_redraw = true;
        log::info!(
            "clock format changed to {}",
            if format_24 { "24h" } else { "12h" }
        );
    }
}

/// Digit values for the four slots, in slot order. The hour tens digit is
/// zero-padded in 24-hour format; minutes are always zero-padded.
pub(crate) fn digits_for(hour: u8, minute: u8, format_24: bool) -> [u8; 4] {
    let hour_tens = if hour < 10 && format_24 { 0 } else { hour / 10 };
    [hour_tens, hour % 10, minute / 10, minute % 10]
}
