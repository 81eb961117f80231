use crate::color::{GREEN, PURPLE, RED};
use crate::sink::FrameSink;

use super::RingFrame;

/// Two cursors running around the ring
#[derive(Debug, Clone, Default)]
pub struct ChaseAnimation {
    forward: usize,
    backward: usize,
}

impl ChaseAnimation {
    pub const fn new() -> Self {
        Self {
            forward: 0,
            backward: 0,
        }
    }

    /// Cursor moving forward
    pub const fn forward(&self) -> usize {
        self.forward
    }

    /// Cursor moving backward (purple/green chase only)
    pub const fn backward(&self) -> usize {
        self.backward
    }

    pub fn enter_red_green(&mut self) {
        self.forward = 0;
        self.backward = 0;
    }

    pub fn enter_purple_green(&mut self, len: usize) {
        self.forward = 0;
        self.backward = len.saturating_sub(1);
    }

    /// Light the forward cursor, red on even positions and green on odd ones.
    pub fn render_red_green<S: FrameSink>(&mut self, frame: &mut RingFrame<'_, S>) {
        let len = frame.len();
        let color = if self.forward.is_multiple_of(2) { RED } else { GREEN };

        frame.clear();
        frame.set(self.forward, color);
        frame.flush();

        self.forward = (self.forward + 1) % len;
    }

    /// Purple cursor forward, green cursor backward; green wins where they meet.
    pub fn render_purple_green<S: FrameSink>(&mut self, frame: &mut RingFrame<'_, S>) {
        let len = frame.len();

        frame.clear();
        frame.set(self.forward, PURPLE);
        frame.set(self.backward, GREEN);
        frame.flush();

        self.forward = (self.forward + 1) % len;
        self.backward = (self.backward + len - 1) % len;
    }
}
