use embedded_graphics::pixelcolor::Rgb565;
use u8g2_fonts::types::HorizontalAlignment;

use crate::config::{ClockConfig, DigitOffset};
use crate::slot::{Glyph, Slot, COLON_SCREEN};
use crate::style::ClockStyle;
use crate::surface::{DrawError, FontId, RenderSurface};

const AM_PM_FONT_SIZE: u32 = 25;

/// Remembers what each visual element last showed and repaints only on
/// change (or when forced). Erasing happens by redrawing the previous glyph
/// in the background color, at the previous glyph's pixel offset.
#[derive(Debug, Clone, Default)]
pub struct DisplayDiffer {
    digits: [Option<Glyph>; 4],
    colon: Option<bool>,
    seconds: Option<u8>,
    am_pm: Option<&'static str>,
}

impl DisplayDiffer {
    pub fn new() -> Self {
        DisplayDiffer::default()
    }

    /// Forgets everything last rendered. The next paint of each element
    /// draws unconditionally.
    pub fn clear(&mut self) {
        *self = DisplayDiffer::default();
    }

    fn offset_for(config: &ClockConfig, glyph: char) -> DigitOffset {
        match glyph.to_digit(10) {
            Some(d) => config.digit_offsets[d as usize],
            // Not a digit: no per-glyph nudge.
            None => DigitOffset::ZERO,
        }
    }

    pub fn paint_digit<S: RenderSurface>(
        &mut self,
        surface: &mut S,
        config: &ClockConfig,
        style: ClockStyle,
        slot: Slot,
        glyph: Glyph,
        force: bool,
    ) -> Result<(), DrawError> {
        if !force && self.digits[slot.index()] == Some(glyph) {
            return Ok(());
        }
        let old = self.digits[slot.index()];

        surface.select_screen(slot.screen());
        if style.image_backed() {
            surface.draw_image(style, glyph.as_char())?;
        } else {
            let x = config.screen_size / 2 + config.digit_offset_x;
            let y = config.screen_size / 2;

            let backdrop = if config.shadowing {
                config.font.filler()
            } else {
                None
            };
            if let Some(filler) = backdrop {
                // The filler glyph covers every segment, so it both erases
                // the old digit and provides the dim backdrop.
                surface.set_color(config.shadow_color, config.background);
                surface.draw_text(
                    filler,
                    x,
                    y,
                    config.font_size,
                    HorizontalAlignment::Center,
                )?;
            } else if let Some(Glyph::Digit(d)) = old {
                let offset = Self::offset_for(config, Glyph::Digit(d).as_char());
                surface.set_color(config.background, config.background);
                surface.draw_text(
                    &Glyph::Digit(d).as_char().to_string(),
                    x + offset.x,
                    y + offset.y,
                    config.font_size,
                    HorizontalAlignment::Center,
                )?;
            }

            if let Glyph::Digit(d) = glyph {
                let offset = Self::offset_for(config, glyph.as_char());
                surface.set_color(config.color, config.background);
                surface.draw_text(
                    &char::from(b'0' + d).to_string(),
                    x + offset.x,
                    y + offset.y,
                    config.font_size,
                    HorizontalAlignment::Center,
                )?;
            }
        }

        self.digits[slot.index()] = Some(glyph);
        Ok(())
    }

    /// Paints the colon in the primary color when `on`, in the shadow color
    /// otherwise. Image-backed styles switch between colon-on and colon-off
    /// frames instead.
    pub fn paint_colon<S: RenderSurface>(
        &mut self,
        surface: &mut S,
        config: &ClockConfig,
        style: ClockStyle,
        on: bool,
        force: bool,
    ) -> Result<(), DrawError> {
        if !force && self.colon == Some(on) {
            return Ok(());
        }

        surface.select_screen(COLON_SCREEN);
        if style.image_backed() {
            surface.draw_image(style, if on { ':' } else { ' ' })?;
        } else {
            let color = if on { config.color } else { config.shadow_color };
            surface.set_color(color, config.background);
            surface.draw_text(
                ":",
                config.screen_size / 2 + config.colon_offset_x,
                config.screen_size / 2,
                config.font_size,
                HorizontalAlignment::Center,
            )?;
        }

        self.colon = Some(on);
        Ok(())
    }

    /// Erases the previous second-hand position and draws the new one, a 6
    /// degree arc on the colon screen.
    pub fn paint_seconds<S: RenderSurface>(
        &mut self,
        surface: &mut S,
        config: &ClockConfig,
        color: Rgb565,
        seconds: u8,
        force: bool,
    ) -> Result<(), DrawError> {
        if !force && self.seconds == Some(seconds) {
            return Ok(());
        }

        surface.select_screen(COLON_SCREEN);
        if let Some(previous) = self.seconds {
            Self::second_arc(surface, config, previous, config.background)?;
        }
        Self::second_arc(surface, config, seconds, color)?;

        self.seconds = Some(seconds);
        Ok(())
    }

    fn second_arc<S: RenderSurface>(
        surface: &mut S,
        config: &ClockConfig,
        seconds: u8,
        color: Rgb565,
    ) -> Result<(), DrawError> {
        // Two half-circle sweeps, 6 degrees per second.
        let s = i32::from(seconds);
        let start = if s < 30 { 6 * s + 180 } else { 6 * s - 180 };
        surface.draw_arc(
            config.screen_size / 2,
            config.screen_size / 2,
            (config.screen_size / 2) as u32,
            (config.screen_size / 2 - 10) as u32,
            start as f32,
            (start + 6) as f32,
            color,
            config.background,
        )
    }

    pub fn paint_am_pm<S: RenderSurface>(
        &mut self,
        surface: &mut S,
        config: &ClockConfig,
        label: &'static str,
        force: bool,
    ) -> Result<(), DrawError> {
        if !force && self.am_pm == Some(label) {
            return Ok(());
        }

        let x = config.screen_size / 5 * 4;
        let y = config.screen_size / 2;

        surface.select_screen(COLON_SCREEN);
        // The indicator uses its own small font; the clock font is restored
        // below.
        surface.set_font(FontId::Label);
        if let Some(previous) = self.am_pm {
            surface.set_color(config.background, config.background);
            surface.draw_text(previous, x, y, AM_PM_FONT_SIZE, HorizontalAlignment::Center)?;
        }
        surface.set_color(config.color, config.background);
        surface.draw_text(label, x, y, AM_PM_FONT_SIZE, HorizontalAlignment::Center)?;
        surface.set_font(config.font);

        self.am_pm = Some(label);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::recording::{Call, RecordingSurface};

    fn config() -> ClockConfig {
        ClockConfig {
            shadowing: false,
            ..ClockConfig::default()
        }
    }

    #[test]
    fn repeated_paint_is_suppressed() {
        let mut differ = DisplayDiffer::new();
        let mut surface = RecordingSurface::new();
        let config = config();

        differ
            .paint_digit(
                &mut surface,
                &config,
                ClockStyle::Segment,
                Slot::HourOnes,
                Glyph::Digit(4),
                false,
            )
            .unwrap();
        let first = surface.draw_count();
        assert!(first > 0);

        differ
            .paint_digit(
                &mut surface,
                &config,
                ClockStyle::Segment,
                Slot::HourOnes,
                Glyph::Digit(4),
                false,
            )
            .unwrap();
        assert_eq!(surface.draw_count(), first);
    }

    #[test]
    fn force_repaints_an_unchanged_digit() {
        let mut differ = DisplayDiffer::new();
        let mut surface = RecordingSurface::new();
        let config = config();

        for _ in 0..2 {
            differ
                .paint_digit(
                    &mut surface,
                    &config,
                    ClockStyle::Segment,
                    Slot::MinuteOnes,
                    Glyph::Digit(0),
                    true,
                )
                .unwrap();
        }
        assert!(surface.draw_count() >= 2);
    }

    #[test]
    fn erase_uses_old_offset_and_draw_uses_new() {
        let mut differ = DisplayDiffer::new();
        let mut surface = RecordingSurface::new();
        let mut config = config();
        config.digit_offsets[1] = DigitOffset { x: 2, y: 0 };
        config.digit_offsets[2] = DigitOffset { x: 5, y: 1 };
        let base_x = config.screen_size / 2;
        let base_y = config.screen_size / 2;

        differ
            .paint_digit(
                &mut surface,
                &config,
                ClockStyle::Segment,
                Slot::HourTens,
                Glyph::Digit(1),
                false,
            )
            .unwrap();
        surface.calls.clear();

        differ
            .paint_digit(
                &mut surface,
                &config,
                ClockStyle::Segment,
                Slot::HourTens,
                Glyph::Digit(2),
                false,
            )
            .unwrap();

        assert_eq!(
            surface.calls,
            vec![
                Call::Text {
                    screen: 0,
                    text: "1".to_string(),
                    x: base_x + 2,
                    y: base_y,
                    fg: config.background,
                },
                Call::Text {
                    screen: 0,
                    text: "2".to_string(),
                    x: base_x + 5,
                    y: base_y + 1,
                    fg: config.color,
                },
            ]
        );
    }

    #[test]
    fn shadowed_repaint_draws_the_filler_backdrop() {
        let mut differ = DisplayDiffer::new();
        let mut surface = RecordingSurface::new();
        let config = ClockConfig::default();
        assert!(config.shadowing);

        differ
            .paint_digit(
                &mut surface,
                &config,
                ClockStyle::Segment,
                Slot::HourOnes,
                Glyph::Digit(3),
                false,
            )
            .unwrap();

        match &surface.calls[0] {
            Call::Text { text, fg, .. } => {
                assert_eq!(text, "8");
                assert_eq!(*fg, config.shadow_color);
            }
            other => panic!("expected filler text call, got {other:?}"),
        }
    }

    #[test]
    fn shadowing_without_a_filler_glyph_erases_the_old_digit() {
        let mut differ = DisplayDiffer::new();
        let mut surface = RecordingSurface::new();
        let mut config = ClockConfig::default();
        config.font = FontId::Rounded;
        assert!(config.shadowing);
        assert!(config.font.filler().is_none());

        differ
            .paint_digit(
                &mut surface,
                &config,
                ClockStyle::Segment,
                Slot::HourOnes,
                Glyph::Digit(3),
                false,
            )
            .unwrap();
        surface.calls.clear();

        differ
            .paint_digit(
                &mut surface,
                &config,
                ClockStyle::Segment,
                Slot::HourOnes,
                Glyph::Digit(4),
                false,
            )
            .unwrap();

        match &surface.calls[0] {
            Call::Text { text, fg, .. } => {
                assert_eq!(text, "3");
                assert_eq!(*fg, config.background);
            }
            other => panic!("expected erase text call, got {other:?}"),
        }
    }

    #[test]
    fn blank_erases_without_drawing() {
        let mut differ = DisplayDiffer::new();
        let mut surface = RecordingSurface::new();
        let config = config();

        differ
            .paint_digit(
                &mut surface,
                &config,
                ClockStyle::Segment,
                Slot::MinuteTens,
                Glyph::Digit(5),
                false,
            )
            .unwrap();
        surface.calls.clear();

        differ
            .paint_digit(
                &mut surface,
                &config,
                ClockStyle::Segment,
                Slot::MinuteTens,
                Glyph::Blank,
                false,
            )
            .unwrap();

        assert_eq!(surface.calls.len(), 1);
        match &surface.calls[0] {
            Call::Text { text, fg, .. } => {
                assert_eq!(text, "5");
                assert_eq!(*fg, config.background);
            }
            other => panic!("expected erase call, got {other:?}"),
        }
    }

    #[test]
    fn image_styles_swap_frames_instead_of_text() {
        let mut differ = DisplayDiffer::new();
        let mut surface = RecordingSurface::new();
        let config = config();

        differ
            .paint_digit(
                &mut surface,
                &config,
                ClockStyle::Nixie,
                Slot::HourOnes,
                Glyph::Digit(7),
                false,
            )
            .unwrap();

        assert_eq!(
            surface.calls,
            vec![Call::Image {
                screen: 1,
                style: ClockStyle::Nixie,
                glyph: '7',
            }]
        );
    }

    #[test]
    fn colon_repaints_only_on_parity_change() {
        let mut differ = DisplayDiffer::new();
        let mut surface = RecordingSurface::new();
        let config = config();

        differ
            .paint_colon(&mut surface, &config, ClockStyle::Segment, true, false)
            .unwrap();
        assert_eq!(surface.draw_count(), 1);

        differ
            .paint_colon(&mut surface, &config, ClockStyle::Segment, true, false)
            .unwrap();
        assert_eq!(surface.draw_count(), 1);

        differ
            .paint_colon(&mut surface, &config, ClockStyle::Segment, false, false)
            .unwrap();
        assert_eq!(surface.draw_count(), 2);
        match &surface.calls[1] {
            Call::Text { fg, .. } => assert_eq!(*fg, config.shadow_color),
            other => panic!("expected colon text call, got {other:?}"),
        }
    }

    #[test]
    fn second_hand_erases_previous_position() {
        let mut differ = DisplayDiffer::new();
        let mut surface = RecordingSurface::new();
        let config = config();

        differ
            .paint_seconds(&mut surface, &config, config.color, 10, false)
            .unwrap();
        surface.calls.clear();

        differ
            .paint_seconds(&mut surface, &config, config.color, 11, false)
            .unwrap();

        assert_eq!(
            surface.calls,
            vec![
                Call::Arc {
                    screen: COLON_SCREEN,
                    angle_start: 240.0,
                    angle_end: 246.0,
                    color: config.background,
                },
                Call::Arc {
                    screen: COLON_SCREEN,
                    angle_start: 246.0,
                    angle_end: 252.0,
                    color: config.color,
                },
            ]
        );
    }

    #[test]
    fn second_hand_wraps_to_the_lower_half_circle() {
        let mut differ = DisplayDiffer::new();
        let mut surface = RecordingSurface::new();
        let config = config();

        differ
            .paint_seconds(&mut surface, &config, config.color, 30, false)
            .unwrap();
        match &surface.calls[0] {
            Call::Arc { angle_start, .. } => assert_eq!(*angle_start, 0.0),
            other => panic!("expected arc call, got {other:?}"),
        }
    }

    #[test]
    fn am_pm_diffs_and_restores_the_clock_font() {
        let mut differ = DisplayDiffer::new();
        let mut surface = RecordingSurface::new();
        let config = config();

        differ
            .paint_am_pm(&mut surface, &config, "AM", false)
            .unwrap();
        assert_eq!(surface.draw_count(), 1);
        assert_eq!(surface.font, config.font);

        differ
            .paint_am_pm(&mut surface, &config, "AM", false)
            .unwrap();
        assert_eq!(surface.draw_count(), 1);

        differ
            .paint_am_pm(&mut surface, &config, "PM", false)
            .unwrap();
        // Old label erased, new label drawn.
        assert_eq!(surface.draw_count(), 3);
    }

    #[test]
    fn clear_forgets_cached_values() {
        let mut differ = DisplayDiffer::new();
        let mut surface = RecordingSurface::new();
        let config = config();

        differ
            .paint_colon(&mut surface, &config, ClockStyle::Segment, true, false)
            .unwrap();
        differ.clear();
        differ
            .paint_colon(&mut surface, &config, ClockStyle::Segment, true, false)
            .unwrap();
        assert_eq!(surface.draw_count(), 2);
    }

    #[test]
    fn unknown_glyph_offset_falls_back_to_zero() {
        let mut config = config();
        config.digit_offsets = [DigitOffset { x: 9, y: 9 }; 10];
        assert_eq!(
            DisplayDiffer::offset_for(&config, ':'),
            DigitOffset::ZERO
        );
        assert_eq!(
            DisplayDiffer::offset_for(&config, '3'),
            DigitOffset { x: 9, y: 9 }
        );
    }
}
