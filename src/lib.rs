#![no_std]

pub mod animation;
pub mod clock;
pub mod color;
pub mod command;
pub mod config;
pub mod controller;
pub mod engine;
pub mod mapper;
pub mod mode;
pub mod path;
pub mod sink;
pub mod tick_scheduler;

pub use clock::{NoClock, SyncedClock, TimeOfDay, WallClock};
pub use command::{Command, CommandOutcome};
pub use config::{ConfigError, DEFAULT_TICK_PERIOD, DripConfig, RingConfig};
pub use controller::{ModeController, SharedRing};
pub use engine::AnimationEngine;
pub use mapper::PixelMapper;
pub use mode::Mode;
pub use path::CenterOutPath;
pub use sink::{FrameBuffer, FrameSink, SmartLedsOutput};
pub use tick_scheduler::{TickResult, TickScheduler};

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// [`FrameBuffer`] writes whole frames through it.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
