//! Per-mode animation state and frame computation
//!
//! Every animation draws into a [`RingFrame`] using logical positions; the
//! frame rotates them onto the strip. State that has to survive between
//! ticks lives in the animation structs and is owned by the engine.

mod chase;
mod clock_face;
mod drip;
mod heartbeat;
mod rainbow;
mod stars;

pub use chase::ChaseAnimation;
pub use clock_face::{ClockFaceAnimation, ClockHands};
pub use drip::DripAnimation;
pub use heartbeat::{HEARTBEAT_LEVELS, HeartbeatAnimation};
pub use rainbow::RainbowAnimation;
pub use stars::StarsAnimation;

use crate::color::{BLACK, Rgb};
use crate::mapper::PixelMapper;
use crate::sink::FrameSink;

/// Drawing surface addressed by logical ring position
pub struct RingFrame<'a, S: FrameSink> {
    sink: &'a mut S,
    mapper: PixelMapper,
}

impl<'a, S: FrameSink> RingFrame<'a, S> {
    pub fn new(sink: &'a mut S, mapper: PixelMapper) -> Self {
        Self { sink, mapper }
    }

    /// Number of logical positions
    pub fn len(&self) -> usize {
        self.mapper.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapper.is_empty()
    }

    /// Set the LED at a logical position
    pub fn set(&mut self, pos: usize, color: Rgb) {
        self.sink.set_pixel(self.mapper.map(pos), color);
    }

    pub fn fill(&mut self, color: Rgb) {
        self.sink.fill(color);
    }

    pub fn clear(&mut self) {
        self.sink.fill(BLACK);
    }

    pub fn flush(&mut self) {
        self.sink.flush();
    }
}
