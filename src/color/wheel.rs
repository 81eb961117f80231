use crate::color::Rgb;

const BAND: u8 = 85;

/// Map a position on a 256-step color wheel to a color.
///
/// The wheel is split into three bands of 85 steps. Within each band one
/// channel ramps up by 3 per step while another ramps down, so the output
/// walks green -> red -> blue -> green as `pos` goes from 0 to 255.
pub const fn wheel(pos: u8) -> Rgb {
    if pos < BAND {
        Rgb {
            r: pos * 3,
            g: 255 - pos * 3,
            b: 0,
        }
    } else if pos < BAND * 2 {
        let pos = pos - BAND;
        Rgb {
            r: 255 - pos * 3,
            g: 0,
            b: pos * 3,
        }
    } else {
        let pos = pos - BAND * 2;
        Rgb {
            r: 0,
            g: pos * 3,
            b: 255 - pos * 3,
        }
    }
}
