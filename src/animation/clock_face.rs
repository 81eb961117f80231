#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::clock::{TimeOfDay, WallClock};
use crate::color::{BLUE, GREEN, RED};
use crate::sink::FrameSink;

use super::RingFrame;

const MINUTES_PER_HALF_DAY: usize = 12 * 60;

/// Logical LED positions of the clock hands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockHands {
    pub hour: usize,
    pub minute: usize,
    pub second: usize,
}

impl ClockHands {
    /// Place the hands on a ring of `len` LEDs.
    ///
    /// The hour hand moves continuously with the minutes.
    pub fn new(time: TimeOfDay, len: usize) -> Self {
        let hour = usize::from(time.hour() % 12);
        let minute = usize::from(time.minute());
        let second = usize::from(time.second());

        Self {
            hour: ((hour * 60 + minute) * len / MINUTES_PER_HALF_DAY) % len,
            minute: minute * len / 60,
            second: second * len / 60,
        }
    }
}

/// Clock face refreshed once every `divider` ticks
#[derive(Debug, Clone, Default)]
pub struct ClockFaceAnimation {
    ticks: u8,
    hands: Option<ClockHands>,
}

impl ClockFaceAnimation {
    pub const fn new() -> Self {
        Self {
            ticks: 0,
            hands: None,
        }
    }

    /// Ticks counted since the last update
    pub const fn ticks(&self) -> u8 {
        self.ticks
    }

    /// Hands shown by the last update
    pub const fn hands(&self) -> Option<ClockHands> {
        self.hands
    }

    pub fn enter(&mut self) {
        self.ticks = 0;
    }

    /// Count one tick; on every `divider`-th tick redraw the face.
    ///
    /// Returns `true` if the face was redrawn. Without a known time the
    /// previous frame stays on the ring.
    pub fn render<S: FrameSink, C: WallClock>(
        &mut self,
        frame: &mut RingFrame<'_, S>,
        clock: &C,
        divider: u8,
    ) -> bool {
        self.ticks = self.ticks.saturating_add(1);
        if self.ticks < divider {
            return false;
        }
        self.ticks = 0;

        let Some(time) = clock.time_of_day() else {
            #[cfg(feature = "esp32-log")]
            println!("[ring] clock update skipped, time unknown");
            return false;
        };

        let hands = ClockHands::new(time, frame.len());
        frame.clear();
        frame.set(hands.hour, RED);
        frame.set(hands.minute, GREEN);
        frame.set(hands.second, BLUE);
        frame.flush();

        self.hands = Some(hands);
        true
    }
}
