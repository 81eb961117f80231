//! Animation modes
//!
//! Exactly one mode is active at a time. The mode is a single value, so a
//! switch is one assignment and no tick can observe two active modes.

use crate::color::{BLUE, GREEN, RED, Rgb};

const MODE_NAME_OFF: &str = "off";
const MODE_NAME_SOLID: &str = "solid";
const MODE_NAME_RED: &str = "red";
const MODE_NAME_GREEN: &str = "green";
const MODE_NAME_BLUE: &str = "blue";
const MODE_NAME_CHASE_RED_GREEN: &str = "chase";
const MODE_NAME_CHASE_PURPLE_GREEN: &str = "purplegreen";
const MODE_NAME_CLOCK: &str = "clock";
const MODE_NAME_HEARTBEAT: &str = "heartbeat";
const MODE_NAME_RAINBOW: &str = "rainbow";
const MODE_NAME_STARS: &str = "stars";
const MODE_NAME_MATRIX_DRIP_GREEN: &str = "matrix";

/// Active animation of the ring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// All LEDs dark
    #[default]
    Off,
    /// Whole ring lit with one color, no animation
    SolidColor(Rgb),
    /// Single pixel running forward, alternating red and green
    ChaseRedGreen,
    /// Purple pixel running forward, green pixel running backward
    ChasePurpleGreen,
    /// Hour, minute and second hands
    Clock,
    /// Whole ring pulsing red
    Heartbeat,
    /// Rotating color wheel
    Rainbow,
    /// One random pixel in a random color per tick
    Stars,
    /// Green drips falling outward from a center LED
    MatrixDripGreen,
}

impl Mode {
    /// Canonical name of the mode
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => MODE_NAME_OFF,
            Self::SolidColor(_) => MODE_NAME_SOLID,
            Self::ChaseRedGreen => MODE_NAME_CHASE_RED_GREEN,
            Self::ChasePurpleGreen => MODE_NAME_CHASE_PURPLE_GREEN,
            Self::Clock => MODE_NAME_CLOCK,
            Self::Heartbeat => MODE_NAME_HEARTBEAT,
            Self::Rainbow => MODE_NAME_RAINBOW,
            Self::Stars => MODE_NAME_STARS,
            Self::MatrixDripGreen => MODE_NAME_MATRIX_DRIP_GREEN,
        }
    }

    /// Parse a control panel name.
    ///
    /// Solid colors are addressed by color name (`red`, `green`, `blue`).
    pub fn parse_from_str(s: &str) -> Option<Self> {
        Some(match s {
            MODE_NAME_OFF => Self::Off,
            MODE_NAME_RED => Self::SolidColor(RED),
            MODE_NAME_GREEN => Self::SolidColor(GREEN),
            MODE_NAME_BLUE => Self::SolidColor(BLUE),
            MODE_NAME_CHASE_RED_GREEN => Self::ChaseRedGreen,
            MODE_NAME_CHASE_PURPLE_GREEN => Self::ChasePurpleGreen,
            MODE_NAME_CLOCK => Self::Clock,
            MODE_NAME_HEARTBEAT => Self::Heartbeat,
            MODE_NAME_RAINBOW => Self::Rainbow,
            MODE_NAME_STARS => Self::Stars,
            MODE_NAME_MATRIX_DRIP_GREEN => Self::MatrixDripGreen,
            _ => return None,
        })
    }

    /// Returns if the mode changes the ring on every tick
    pub const fn is_animated(self) -> bool {
        !matches!(self, Self::Off | Self::SolidColor(_))
    }
}
