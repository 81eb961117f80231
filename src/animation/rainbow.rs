use crate::color::wheel;
use crate::sink::FrameSink;

use super::RingFrame;

/// Color wheel spread over the ring, rotating one step per tick
#[derive(Debug, Clone, Default)]
pub struct RainbowAnimation {
    phase: u8,
}

impl RainbowAnimation {
    pub const fn new() -> Self {
        Self { phase: 0 }
    }

    /// Wheel offset used by the next tick
    pub const fn phase(&self) -> u8 {
        self.phase
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn render<S: FrameSink>(&mut self, frame: &mut RingFrame<'_, S>) {
        let len = frame.len();
        for pos in 0..len {
            // pos < len, so the spread stays below 256
            let spread = (pos * 256 / len) as u8;
            frame.set(pos, wheel(spread.wrapping_add(self.phase)));
        }
        frame.flush();

        self.phase = self.phase.wrapping_add(1);
    }
}
