use embedded_graphics::{
    prelude::{DrawTarget, OriginDimensions, PixelColor, Point, Size},
    Pixel,
};

/// In-memory draw target, for tests and headless hosts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeDisplay<C> {
    size: Size,
    pixels: Vec<C>,
}

impl<C: PixelColor> FakeDisplay<C> {
    /// Creates a display filled with `fill`.
    pub fn new(size: Size, fill: C) -> Self {
        let count = size.width as usize * size.height as usize;
        FakeDisplay {
            size,
            pixels: vec![fill; count],
        }
    }

    /// Color of the pixel at `point`, or `None` outside the display.
    pub fn get_pixel(&self, point: Point) -> Option<C> {
        self.point_to_index(point)
            .and_then(|index| self.pixels.get(index).copied())
    }

    /// Number of pixels with a color other than `background`.
    pub fn lit_pixels(&self, background: C) -> usize {
        self.pixels.iter().filter(|&&p| p != background).count()
    }

    fn point_to_index(&self, point: Point) -> Option<usize> {
        let (x, y) = <(u32, u32)>::try_from(point).ok()?;
        if x < self.size.width && y < self.size.height {
            Some((x + y * self.size.width) as usize)
        } else {
            None
        }
    }
}

impl<C: PixelColor> DrawTarget for FakeDisplay<C> {
    type Color = C;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels.into_iter() {
            if let Some(index) = self.point_to_index(point) {
                self.pixels[index] = color;
            }
        }

        Ok(())
    }
}

impl<C> OriginDimensions for FakeDisplay<C> {
    fn size(&self) -> Size {
        self.size
    }
}
