use core::fmt;

use embassy_time::Duration;

/// Default period between two animation ticks
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_millis(100);

/// Ticks between two clock face updates (one second at the default period)
pub const DEFAULT_CLOCK_DIVIDER: u8 = 10;

/// Configuration for the drip animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DripConfig {
    /// Logical index new drips start from
    pub center: usize,
    /// Probability (0.0-1.0) of seeding a new drip on each tick
    pub chance: f32,
    /// Intensity lost per step outward
    pub fade: u8,
    /// Lowest intensity of a new drip
    pub seed_min: u8,
    /// Highest intensity of a new drip
    pub seed_max: u8,
}

impl Default for DripConfig {
    fn default() -> Self {
        Self {
            center: 0,
            chance: 0.8,
            fade: 5,
            seed_min: 180,
            seed_max: 255,
        }
    }
}

/// Configuration for the ring engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingConfig {
    /// Physical index of logical LED 0
    pub offset: usize,
    pub drip: DripConfig,
    /// Ticks per clock face update
    pub clock_divider: u8,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            offset: 0,
            drip: DripConfig::default(),
            clock_divider: DEFAULT_CLOCK_DIVIDER,
        }
    }
}

impl RingConfig {
    /// Preset for rings wired with the first LED at 6 o'clock.
    pub fn for_bottom_start(len: usize) -> Self {
        Self {
            offset: len / 2,
            ..Self::default()
        }
    }

    /// Check the configuration against a ring of `len` LEDs.
    pub fn validate(&self, len: usize) -> Result<(), ConfigError> {
        if len == 0 {
            return Err(ConfigError::EmptyRing);
        }
        if self.drip.center >= len {
            return Err(ConfigError::CenterOutOfRange {
                center: self.drip.center,
                len,
            });
        }
        if !(0.0..=1.0).contains(&self.drip.chance) {
            return Err(ConfigError::InvalidDripChance);
        }
        if self.drip.seed_min > self.drip.seed_max {
            return Err(ConfigError::InvalidSeedRange {
                min: self.drip.seed_min,
                max: self.drip.seed_max,
            });
        }
        if self.clock_divider == 0 {
            return Err(ConfigError::ZeroClockDivider);
        }
        Ok(())
    }
}

/// Rejected engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The ring has no LEDs
    EmptyRing,
    /// Drip center is not a valid logical index
    CenterOutOfRange { center: usize, len: usize },
    /// Path does not fit into its storage
    PathTooLong { len: usize, capacity: usize },
    /// Drip chance is not a probability
    InvalidDripChance,
    /// Drip seed range is empty
    InvalidSeedRange { min: u8, max: u8 },
    /// Clock face would never update
    ZeroClockDivider,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyRing => write!(f, "ring has no LEDs"),
            Self::CenterOutOfRange { center, len } => {
                write!(f, "center {center} is outside a ring of {len} LEDs")
            }
            Self::PathTooLong { len, capacity } => {
                write!(f, "path of {len} LEDs exceeds capacity {capacity}")
            }
            Self::InvalidDripChance => write!(f, "drip chance must be within 0.0..=1.0"),
            Self::InvalidSeedRange { min, max } => {
                write!(f, "drip seed range {min}..={max} is empty")
            }
            Self::ZeroClockDivider => write!(f, "clock divider must be non-zero"),
        }
    }
}
