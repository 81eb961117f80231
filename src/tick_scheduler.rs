//! Fixed-rate tick pacing.
//!
//! Keeps animation ticks on a fixed grid with drift correction. The caller
//! either sleeps for the returned duration or uses [`TickScheduler::run`].

use embassy_time::{Duration, Instant, Timer};
use rand::RngCore;

use crate::clock::WallClock;
use crate::config::DEFAULT_TICK_PERIOD;
use crate::controller::SharedRing;
use crate::sink::FrameSink;

/// Result of a tick operation.
#[derive(Debug, Clone, Copy)]
pub struct TickResult {
    /// The deadline for the next tick.
    pub next_deadline: Instant,
    /// How long to wait until the next tick (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Drives [`SharedRing::tick`] at a fixed period.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = TickScheduler::new(&RING);
///
/// loop {
///     let result = scheduler.tick(Instant::now());
///     sleep(result.sleep_duration);
/// }
/// ```
pub struct TickScheduler<'a, S, C, R, const N: usize> {
    ring: &'a SharedRing<S, C, R, N>,
    next_tick: Instant,
    period: Duration,
}

impl<'a, S, C, R, const N: usize> TickScheduler<'a, S, C, R, N>
where
    S: FrameSink,
    C: WallClock,
    R: RngCore,
{
    /// Create a scheduler with [`DEFAULT_TICK_PERIOD`].
    pub fn new(ring: &'a SharedRing<S, C, R, N>) -> Self {
        Self::with_period(ring, DEFAULT_TICK_PERIOD)
    }

    pub fn with_period(ring: &'a SharedRing<S, C, R, N>, period: Duration) -> Self {
        Self {
            ring,
            next_tick: Instant::from_millis(0),
            period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Run one tick and return timing information.
    ///
    /// If the scheduler has fallen more than two periods behind it restarts
    /// from `now` instead of bursting through the backlog.
    pub fn tick(&mut self, now: Instant) -> TickResult {
        let max_drift = self.period * 2;
        if now > self.next_tick + max_drift {
            self.next_tick = now;
        }

        self.ring.tick();

        self.next_tick += self.period;

        let sleep_duration = if self.next_tick > now {
            self.next_tick - now
        } else {
            Duration::from_millis(0)
        };

        TickResult {
            next_deadline: self.next_tick,
            sleep_duration,
        }
    }

    /// Tick forever on the embassy timer.
    pub async fn run(&mut self) -> ! {
        loop {
            let result = self.tick(Instant::now());
            Timer::at(result.next_deadline).await;
        }
    }
}
