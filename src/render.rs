use std::fmt::Debug;

use embedded_graphics::{
    geometry::{Angle, Point},
    image::{Image, ImageRaw},
    pixelcolor::Rgb565,
    prelude::{DrawTarget, RgbColor},
    primitives::{Arc, Primitive, PrimitiveStyle},
    Drawable,
};
use u8g2_fonts::{
    fonts,
    types::{FontColor, HorizontalAlignment, VerticalPosition},
    FontRenderer,
};

use crate::style::ClockStyle;
use crate::surface::{DrawError, FontId, RenderSurface};

/// Digit/colon images for the image-backed styles. Lookup misses are fine;
/// the panel simply leaves the screen untouched.
pub trait AssetStore {
    fn image(&self, style: ClockStyle, glyph: char) -> Option<ImageRaw<'static, Rgb565>>;
}

fn renderer(font: FontId) -> FontRenderer {
    match font {
        FontId::Segment7 => FontRenderer::new::<fonts::u8g2_font_7Segments_26x42_mn>(),
        FontId::Rounded => FontRenderer::new::<fonts::u8g2_font_logisoso58_tn>(),
        FontId::Label => FontRenderer::new::<fonts::u8g2_font_logisoso16_tf>(),
    }
}

/// Render backend driving one draw target per screen.
pub struct ScreenPanel<D> {
    screens: Vec<D>,
    active: usize,
    fg: Rgb565,
    bg: Rgb565,
    font: FontId,
    assets: Option<Box<dyn AssetStore>>,
}

impl<D> ScreenPanel<D> {
    pub fn new(screens: Vec<D>) -> Self {
        ScreenPanel {
            screens,
            active: 0,
            fg: Rgb565::WHITE,
            bg: Rgb565::BLACK,
            font: FontId::Segment7,
            assets: None,
        }
    }

    pub fn with_assets(mut self, assets: Box<dyn AssetStore>) -> Self {
        self.assets = Some(assets);
        self
    }

    pub fn screen(&self, index: usize) -> Option<&D> {
        self.screens.get(index)
    }
}

impl<D> RenderSurface for ScreenPanel<D>
where
    D: DrawTarget<Color = Rgb565>,
    D::Error: Debug,
{
    fn select_screen(&mut self, screen: u8) {
        self.active = screen as usize;
    }

    fn set_color(&mut self, fg: Rgb565, bg: Rgb565) {
        self.fg = fg;
        self.bg = bg;
    }

    fn set_font(&mut self, font: FontId) {
        self.font = font;
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        _size: u32,
        align: HorizontalAlignment,
    ) -> Result<(), DrawError> {
        if text.is_empty() {
            return Ok(());
        }
        let font = renderer(self.font);
        let color = self.fg;
        let Some(display) = self.screens.get_mut(self.active) else {
            return Ok(());
        };

        font.render_aligned(
            text,
            Point::new(x, y),
            VerticalPosition::Center,
            align,
            FontColor::Transparent(color),
            display,
        )
        .map_err(|err| DrawError::DrawFailed(format!("{:?}", err)))?;

        Ok(())
    }

    fn draw_arc(
        &mut self,
        cx: i32,
        cy: i32,
        r_outer: u32,
        r_inner: u32,
        angle_start: f32,
        angle_end: f32,
        color: Rgb565,
        _bg: Rgb565,
    ) -> Result<(), DrawError> {
        let Some(display) = self.screens.get_mut(self.active) else {
            return Ok(());
        };

        let width = r_outer.saturating_sub(r_inner).max(1);
        // Stroke is centered on the mean circle of the requested ring.
        let diameter = r_outer + r_inner;
        Arc::with_center(
            Point::new(cx, cy),
            diameter,
            // Input angles measure from 12 o'clock.
            Angle::from_degrees(angle_start - 90.0),
            Angle::from_degrees(angle_end - angle_start),
        )
        .into_styled(PrimitiveStyle::with_stroke(color, width))
        .draw(display)
        .map_err(|err| DrawError::DrawFailed(format!("{:?}", err)))?;

        Ok(())
    }

    fn draw_image(&mut self, style: ClockStyle, glyph: char) -> Result<(), DrawError> {
        let Some(assets) = self.assets.as_deref() else {
            return Ok(());
        };
        let Some(raw) = assets.image(style, glyph) else {
            // Missing asset: leave the screen untouched.
            return Ok(());
        };
        let Some(display) = self.screens.get_mut(self.active) else {
            return Ok(());
        };

        Image::new(&raw, Point::zero())
            .draw(display)
            .map_err(|err| DrawError::DrawFailed(format!("{:?}", err)))?;

        Ok(())
    }

    fn clear_all(&mut self) -> Result<(), DrawError> {
        let bg = self.bg;
        for screen in &mut self.screens {
            screen
                .clear(bg)
                .map_err(|err| DrawError::DrawFailed(format!("{:?}", err)))?;
        }
        Ok(())
    }
}
