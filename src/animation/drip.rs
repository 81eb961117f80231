use rand::{Rng, RngCore};

use crate::color::green;
use crate::config::DripConfig;
use crate::path::CenterOutPath;
use crate::sink::FrameSink;

use super::RingFrame;

/// Green drips seeded at the path center and flowing outward
///
/// Levels are stored by logical position. Each tick every level moves one
/// step further along the path and loses `fade` on the way.
#[derive(Debug, Clone)]
pub struct DripAnimation<const N: usize> {
    levels: [u8; N],
}

impl<const N: usize> Default for DripAnimation<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> DripAnimation<N> {
    pub const fn new() -> Self {
        Self { levels: [0; N] }
    }

    pub const fn levels(&self) -> &[u8; N] {
        &self.levels
    }

    /// Level at a logical position, 0 when out of range
    pub fn level(&self, pos: usize) -> u8 {
        self.levels.get(pos).copied().unwrap_or(0)
    }

    pub fn set_level(&mut self, pos: usize, level: u8) {
        if let Some(slot) = self.levels.get_mut(pos) {
            *slot = level;
        }
    }

    pub fn clear(&mut self) {
        self.levels = [0; N];
    }

    /// Advance every drip one step outward and maybe start a new one.
    pub fn advance<R: RngCore>(&mut self, path: &CenterOutPath<N>, config: &DripConfig, rng: &mut R) {
        let order = path.as_slice();
        // Walk from the outer end so each level moves exactly one step.
        for i in (1..order.len()).rev() {
            let src = self.levels[order[i - 1]];
            self.levels[order[i]] = src.saturating_sub(config.fade);
        }

        if rng.r#gen::<f32>() < config.chance {
            self.levels[path.center()] = rng.gen_range(config.seed_min..=config.seed_max);
        }
    }

    pub fn render<S: FrameSink, R: RngCore>(
        &mut self,
        frame: &mut RingFrame<'_, S>,
        path: &CenterOutPath<N>,
        config: &DripConfig,
        rng: &mut R,
    ) {
        self.advance(path, config, rng);

        for (pos, &level) in self.levels.iter().enumerate() {
            frame.set(pos, green(level));
        }
        frame.flush();
    }
}
