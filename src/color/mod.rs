mod wheel;

use smart_leds::RGB8;
pub use wheel::wheel;

pub type Rgb = RGB8;

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
pub const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
pub const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
pub const PURPLE: Rgb = Rgb { r: 128, g: 0, b: 128 };

/// Pure red at the given level
pub const fn red(level: u8) -> Rgb {
    Rgb { r: level, g: 0, b: 0 }
}

/// Pure green at the given level
pub const fn green(level: u8) -> Rgb {
    Rgb { r: 0, g: level, b: 0 }
}
