use rand::{Rng, RngCore};

use crate::color::Rgb;
use crate::sink::FrameSink;

use super::RingFrame;

/// A single random star per tick on a dark ring
#[derive(Debug, Clone, Default)]
pub struct StarsAnimation {
    last: Option<(usize, Rgb)>,
}

impl StarsAnimation {
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Logical position and color of the star currently shown
    pub const fn last(&self) -> Option<(usize, Rgb)> {
        self.last
    }

    pub fn render<S: FrameSink, R: RngCore>(&mut self, frame: &mut RingFrame<'_, S>, rng: &mut R) {
        let pos = rng.gen_range(0..frame.len());
        let color = Rgb::new(rng.r#gen(), rng.r#gen(), rng.r#gen());

        frame.clear();
        frame.set(pos, color);
        frame.flush();

        self.last = Some((pos, color));
    }
}
