use embedded_graphics::pixelcolor::Rgb565;
use thiserror::Error;
use u8g2_fonts::types::HorizontalAlignment;

use crate::style::ClockStyle;

/// Fonts available to the clock face. The backend decides how each id maps
/// onto an actual font renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontId {
    /// Seven-segment style digits.
    Segment7,
    /// Rounded sans-serif digits.
    Rounded,
    /// Small font for the AM/PM indicator.
    Label,
}

impl FontId {
    /// Glyph that lights up every segment of the font, if it has one.
    /// Used as a backdrop when shadowed rendering is enabled.
    pub fn filler(self) -> Option<&'static str> {
        match self {
            FontId::Segment7 => Some("8"),
            _ => None,
        }
    }
}

/// Drawing backend for the clock face: a handful of screens addressed by
/// index, with stateful color and font selection.
///
/// Implementations are expected to treat unresolvable requests (unknown
/// screen, missing image asset) as no-ops rather than errors.
pub trait RenderSurface {
    fn select_screen(&mut self, screen: u8);

    fn set_color(&mut self, fg: Rgb565, bg: Rgb565);

    fn set_font(&mut self, font: FontId);

    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        size: u32,
        align: HorizontalAlignment,
    ) -> Result<(), DrawError>;

    /// Draws an arc ring segment. Angles are in degrees, measured clockwise
    /// from 12 o'clock.
    #[allow(clippy::too_many_arguments)]
    fn draw_arc(
        &mut self,
        cx: i32,
        cy: i32,
        r_outer: u32,
        r_inner: u32,
        angle_start: f32,
        angle_end: f32,
        color: Rgb565,
        bg: Rgb565,
    ) -> Result<(), DrawError>;

    /// Draws the full-screen image for a glyph of an image-backed style.
    fn draw_image(&mut self, style: ClockStyle, glyph: char) -> Result<(), DrawError>;

    /// Clears every screen to the background color.
    fn clear_all(&mut self) -> Result<(), DrawError>;
}

#[derive(Debug, Error)]
pub enum DrawError {
    #[error("Draw failed: {0}")]
    DrawFailed(String),
}
