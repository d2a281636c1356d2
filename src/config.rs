use std::ops::RangeInclusive;
use std::time::Duration;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::RgbColor;

use crate::surface::FontId;

/// Pixel nudge applied to a single digit glyph so that glyphs of uneven
/// width still appear centered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DigitOffset {
    pub x: i32,
    pub y: i32,
}

impl DigitOffset {
    pub const ZERO: DigitOffset = DigitOffset { x: 0, y: 0 };
}

/// Static configuration of the clock face, resolved at startup.
#[derive(Debug, Clone)]
pub struct ClockConfig {
    /// Duration of one step of the roll animation.
    pub step_duration: Duration,
    /// Duration of one glitch flicker step. Shorter than `step_duration`.
    pub glitch_step_duration: Duration,
    /// How many flicker steps a glitch lasts.
    pub glitch_steps: RangeInclusive<u32>,
    /// How long until the next glitch is armed after one fires.
    pub glitch_rearm: RangeInclusive<Duration>,
    /// Decrement applied per roll step. Must be coprime with 10 so the roll
    /// can reach every digit; see [`stride_reaches_all`].
    pub stride: u8,
    /// Minimum interval between time re-reads in `update`.
    pub refresh_interval: Duration,
    pub show_second_ticks: bool,
    pub show_am_pm: bool,
    /// Draw an all-segments backdrop behind digits instead of erasing the
    /// previous glyph. Only effective for fonts with a filler glyph.
    pub shadowing: bool,
    pub color: Rgb565,
    pub shadow_color: Rgb565,
    /// Second-hand color for image-backed styles.
    pub accent_color: Rgb565,
    pub background: Rgb565,
    pub font: FontId,
    pub font_size: u32,
    /// Width and height of one (square) screen.
    pub screen_size: i32,
    pub digit_offset_x: i32,
    pub colon_offset_x: i32,
    /// Per-digit pixel offsets, indexed by digit value.
    pub digit_offsets: [DigitOffset; 10],
}

impl Default for ClockConfig {
    fn default() -> Self {
        ClockConfig {
            step_duration: Duration::from_millis(100),
            glitch_step_duration: Duration::from_millis(50),
            glitch_steps: 3..=5,
            glitch_rearm: Duration::from_secs(30)..=Duration::from_secs(60),
            stride: 3,
            refresh_interval: Duration::from_millis(500),
            show_second_ticks: true,
            show_am_pm: true,
            shadowing: true,
            color: Rgb565::WHITE,
            shadow_color: Rgb565::new(6, 12, 6),
            accent_color: Rgb565::new(31, 42, 0),
            background: Rgb565::BLACK,
            font: FontId::Segment7,
            font_size: 200,
            screen_size: 240,
            digit_offset_x: 0,
            colon_offset_x: 0,
            digit_offsets: [DigitOffset::ZERO; 10],
        }
    }
}

/// Whether repeated subtraction of `stride` mod 10 visits all ten digits.
/// Holds exactly when the stride is coprime with 10.
pub fn stride_reaches_all(stride: u8) -> bool {
    gcd(u32::from(stride) % 10, 10) == 1
}

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}
