use rand::RngCore;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::animation::{
    ChaseAnimation, ClockFaceAnimation, DripAnimation, HeartbeatAnimation, RainbowAnimation,
    RingFrame, StarsAnimation,
};
use crate::clock::WallClock;
use crate::config::{ConfigError, RingConfig};
use crate::mapper::PixelMapper;
use crate::mode::Mode;
use crate::path::CenterOutPath;
use crate::sink::FrameSink;

/// Animation Engine - owns the active mode and all per-mode state
///
/// `N` is the number of LEDs in the ring.
pub struct AnimationEngine<S, C, R, const N: usize> {
    // External dependencies and configuration
    sink: S,
    clock: C,
    rng: R,
    config: RingConfig,
    mapper: PixelMapper,
    path: CenterOutPath<N>,

    // Internal state
    mode: Mode,
    chase: ChaseAnimation,
    clock_face: ClockFaceAnimation,
    heartbeat: HeartbeatAnimation,
    rainbow: RainbowAnimation,
    stars: StarsAnimation,
    drip: DripAnimation<N>,
}

impl<S, C, R, const N: usize> AnimationEngine<S, C, R, N>
where
    S: FrameSink,
    C: WallClock,
    R: RngCore,
{
    /// Create an engine in [`Mode::Off`].
    ///
    /// Nothing is drawn until the first mode switch or tick.
    pub fn new(sink: S, clock: C, rng: R, config: &RingConfig) -> Result<Self, ConfigError> {
        config.validate(N)?;
        let path = CenterOutPath::new(config.drip.center)?;

        Ok(Self {
            sink,
            clock,
            rng,
            config: *config,
            mapper: PixelMapper::new(config.offset, N),
            path,
            mode: Mode::Off,
            chase: ChaseAnimation::new(),
            clock_face: ClockFaceAnimation::new(),
            heartbeat: HeartbeatAnimation::new(),
            rainbow: RainbowAnimation::new(),
            stars: StarsAnimation::new(),
            drip: DripAnimation::new(),
        })
    }

    /// Currently active mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switch to a new mode, applying its entry reset.
    ///
    /// Switching to the active mode applies the reset again. Modes that show a
    /// fixed picture (off, solid color, drip start) render it immediately.
    pub fn set_mode(&mut self, mode: Mode) {
        let mut frame = RingFrame::new(&mut self.sink, self.mapper);
        match mode {
            Mode::Off => {
                frame.clear();
                frame.flush();
            }
            Mode::SolidColor(color) => {
                frame.fill(color);
                frame.flush();
            }
            Mode::ChaseRedGreen => self.chase.enter_red_green(),
            Mode::ChasePurpleGreen => self.chase.enter_purple_green(N),
            Mode::Clock => self.clock_face.enter(),
            Mode::MatrixDripGreen => {
                self.drip.clear();
                frame.clear();
                frame.flush();
            }
            // Heartbeat and rainbow resume where they stopped
            Mode::Heartbeat | Mode::Rainbow | Mode::Stars => {}
        }
        self.mode = mode;

        #[cfg(feature = "esp32-log")]
        println!("[ring] mode: {}", mode.as_str());
    }

    /// Compute and flush the next frame of the active mode.
    pub fn tick(&mut self) {
        let mut frame = RingFrame::new(&mut self.sink, self.mapper);
        match self.mode {
            Mode::Clock => {
                self.clock_face
                    .render(&mut frame, &self.clock, self.config.clock_divider);
            }
            Mode::Heartbeat => self.heartbeat.render(&mut frame),
            Mode::Rainbow => self.rainbow.render(&mut frame),
            Mode::Stars => self.stars.render(&mut frame, &mut self.rng),
            Mode::MatrixDripGreen => {
                self.drip
                    .render(&mut frame, &self.path, &self.config.drip, &mut self.rng);
            }
            Mode::ChaseRedGreen => self.chase.render_red_green(&mut frame),
            Mode::ChasePurpleGreen => self.chase.render_purple_green(&mut frame),
            // Already drawn on entry
            Mode::SolidColor(_) | Mode::Off => {}
        }
    }

    pub fn config(&self) -> &RingConfig {
        &self.config
    }

    pub fn mapper(&self) -> PixelMapper {
        self.mapper
    }

    pub fn path(&self) -> &CenterOutPath<N> {
        &self.path
    }

    pub fn chase(&self) -> &ChaseAnimation {
        &self.chase
    }

    pub fn clock_face(&self) -> &ClockFaceAnimation {
        &self.clock_face
    }

    pub fn heartbeat(&self) -> &HeartbeatAnimation {
        &self.heartbeat
    }

    pub fn rainbow(&self) -> &RainbowAnimation {
        &self.rainbow
    }

    pub fn stars(&self) -> &StarsAnimation {
        &self.stars
    }

    pub fn drip(&self) -> &DripAnimation<N> {
        &self.drip
    }

    pub fn drip_mut(&mut self) -> &mut DripAnimation<N> {
        &mut self.drip
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the wall clock, e.g. to apply a time sync
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }
}
