#![allow(dead_code)]

use myrtio_ring_composer::color::BLACK;
use myrtio_ring_composer::{
    AnimationEngine, FrameBuffer, OutputDriver, Rgb, RingConfig, TimeOfDay, WallClock,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;


/// Driver that keeps every frame written to it
#[derive(Debug, Default)]
pub struct RecordingDriver {
    pub frames: Vec<Vec<Rgb>>,
}

impl OutputDriver for RecordingDriver {
    fn write(&mut self, colors: &[Rgb]) {
        self.frames.push(colors.to_vec());
    }
}

/// Wall clock stuck at a fixed time
#[derive(Debug, Default)]
pub struct FixedClock {
    pub time: Option<TimeOfDay>,
}

impl WallClock for FixedClock {
    fn time_of_day(&self) -> Option<TimeOfDay> {
        self.time
    }
}

pub type TestEngine<const N: usize> =
    AnimationEngine<FrameBuffer<RecordingDriver, N>, FixedClock, SmallRng, N>;

pub fn engine<const N: usize>(config: &RingConfig) -> TestEngine<N> {
    AnimationEngine::new(
        FrameBuffer::new(RecordingDriver::default()),
        FixedClock::default(),
        SmallRng::seed_from_u64(42),
        config,
    )
    .expect("valid config")
}

pub fn frames<const N: usize>(engine: &TestEngine<N>) -> &[Vec<Rgb>] {
    &engine.sink().driver().frames
}

pub fn last_frame<const N: usize>(engine: &TestEngine<N>) -> &[Rgb] {
    frames(engine).last().expect("at least one frame")
}

pub fn lit<const N: usize>(engine: &TestEngine<N>) -> Vec<usize> {
    last_frame(engine)
        .iter()
        .enumerate()
        .filter(|(_, c)| **c != BLACK)
        .map(|(i, _)| i)
        .collect()
}
