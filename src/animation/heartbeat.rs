use crate::color::red;
use crate::sink::FrameSink;

use super::RingFrame;

/// Red levels of one heartbeat, one entry per tick
pub const HEARTBEAT_LEVELS: [u8; 10] = [10, 80, 255, 80, 20, 150, 60, 20, 10, 0];

/// Whole ring pulsing through [`HEARTBEAT_LEVELS`]
#[derive(Debug, Clone, Default)]
pub struct HeartbeatAnimation {
    index: usize,
}

impl HeartbeatAnimation {
    pub const fn new() -> Self {
        Self { index: 0 }
    }

    /// Position in [`HEARTBEAT_LEVELS`] used by the next tick
    pub const fn index(&self) -> usize {
        self.index
    }

    pub fn render<S: FrameSink>(&mut self, frame: &mut RingFrame<'_, S>) {
        let level = HEARTBEAT_LEVELS[self.index];
        frame.fill(red(level));
        frame.flush();

        self.index = (self.index + 1) % HEARTBEAT_LEVELS.len();
    }
}
