//! Frame output
//!
//! The engine draws through [`FrameSink`]. [`FrameBuffer`] keeps a full frame
//! in memory and hands it to an [`OutputDriver`] in one piece on flush.

use smart_leds::SmartLedsWrite;

use crate::OutputDriver;
use crate::color::Rgb;

/// Pixel level access to a strip
///
/// Indices are physical strip positions.
pub trait FrameSink {
    /// Set one buffered pixel
    fn set_pixel(&mut self, index: usize, color: Rgb);

    /// Set every buffered pixel
    fn fill(&mut self, color: Rgb);

    /// Push the whole buffer to the strip at once
    fn flush(&mut self);
}

/// In-memory frame for a strip of `N` LEDs
#[derive(Debug)]
pub struct FrameBuffer<D: OutputDriver, const N: usize> {
    driver: D,
    pixels: [Rgb; N],
}

impl<D: OutputDriver, const N: usize> FrameBuffer<D, N> {
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            pixels: [Rgb::default(); N],
        }
    }

    /// Pixels as they will be written on the next flush
    pub fn pixels(&self) -> &[Rgb; N] {
        &self.pixels
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }
}

impl<D: OutputDriver, const N: usize> FrameSink for FrameBuffer<D, N> {
    fn set_pixel(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }

    fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    fn flush(&mut self) {
        self.driver.write(&self.pixels);
    }
}

/// [`OutputDriver`] on top of any `smart-leds` writer
pub struct SmartLedsOutput<W> {
    writer: W,
}

impl<W> SmartLedsOutput<W>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> OutputDriver for SmartLedsOutput<W>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    fn write(&mut self, colors: &[Rgb]) {
        // A failed write only drops this frame; the next flush retries.
        let _ = self.writer.write(colors.iter().copied());
    }
}
