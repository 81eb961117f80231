//! Wall clock time source
//!
//! The clock face needs the local time of day. Until a clock has been
//! synchronized it reports nothing and the face stays frozen.

use embassy_time::Instant;

#[cfg(feature = "esp32-log")]
use esp_println::println;

const SECONDS_PER_MINUTE: u32 = 60;
const SECONDS_PER_HOUR: u32 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: u32 = 24 * SECONDS_PER_HOUR;

/// Local time of day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
    second: u8,
}

impl TimeOfDay {
    /// Returns `None` for values outside a 24-hour day
    pub const fn new(hour: u8, minute: u8, second: u8) -> Option<Self> {
        if hour >= 24 || minute >= 60 || second >= 60 {
            return None;
        }
        Some(Self {
            hour,
            minute,
            second,
        })
    }

    /// Time of day `seconds` after midnight, wrapping at 24 hours
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_seconds(seconds: u32) -> Self {
        let seconds = seconds % SECONDS_PER_DAY;
        Self {
            hour: (seconds / SECONDS_PER_HOUR) as u8,
            minute: ((seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE) as u8,
            second: (seconds % SECONDS_PER_MINUTE) as u8,
        }
    }

    pub const fn hour(self) -> u8 {
        self.hour
    }

    pub const fn minute(self) -> u8 {
        self.minute
    }

    pub const fn second(self) -> u8 {
        self.second
    }
}

/// Source of the current time of day
pub trait WallClock {
    /// Current local time, or `None` if it is not known
    fn time_of_day(&self) -> Option<TimeOfDay>;
}

/// Clock that is never synchronized
#[derive(Debug, Clone, Copy, Default)]
pub struct NoClock;

impl WallClock for NoClock {
    fn time_of_day(&self) -> Option<TimeOfDay> {
        None
    }
}

#[derive(Debug, Clone, Copy)]
struct SyncPoint {
    /// Seconds since midnight UTC at `at`
    seconds: u32,
    at: Instant,
}

/// Clock anchored to the monotonic timer by an external time sync
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncedClock {
    sync: Option<SyncPoint>,
    utc_offset_minutes: i16,
}

impl SyncedClock {
    pub const fn new() -> Self {
        Self {
            sync: None,
            utc_offset_minutes: 0,
        }
    }

    /// Set the local time zone as minutes east of UTC
    #[must_use]
    pub const fn with_utc_offset(mut self, minutes: i16) -> Self {
        self.utc_offset_minutes = minutes;
        self
    }

    pub const fn is_synced(&self) -> bool {
        self.sync.is_some()
    }

    /// Anchor the clock: it was `utc_seconds` past midnight UTC at `now`.
    pub fn sync(&mut self, utc_seconds: u32, now: Instant) {
        self.sync = Some(SyncPoint {
            seconds: utc_seconds % SECONDS_PER_DAY,
            at: now,
        });

        #[cfg(feature = "esp32-log")]
        println!("[clock] synced to {}s past midnight UTC", utc_seconds % SECONDS_PER_DAY);
    }

    /// Local time of day at `now`
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_possible_wrap
    )]
    pub fn time_at(&self, now: Instant) -> Option<TimeOfDay> {
        let sync = self.sync?;
        let elapsed = now.saturating_duration_since(sync.at).as_secs() % u64::from(SECONDS_PER_DAY);
        let offset = i64::from(self.utc_offset_minutes) * i64::from(SECONDS_PER_MINUTE);
        let local = (i64::from(sync.seconds) + elapsed as i64 + offset)
            .rem_euclid(i64::from(SECONDS_PER_DAY));

        Some(TimeOfDay::from_seconds(local as u32))
    }
}

impl WallClock for SyncedClock {
    fn time_of_day(&self) -> Option<TimeOfDay> {
        self.time_at(Instant::now())
    }
}

