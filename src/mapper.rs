//! Logical to physical LED index mapping
//!
//! Logical index 0 is the ring's reference point (12 o'clock). The strip's
//! first physical LED can sit anywhere on the ring, so every logical index is
//! rotated by a fixed offset before it reaches the strip.

/// Rotational mapping between logical and physical LED positions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelMapper {
    offset: usize,
    len: usize,
}

impl PixelMapper {
    /// Create a mapper for a ring of `len` LEDs.
    ///
    /// Offsets larger than the ring wrap around.
    pub const fn new(offset: usize, len: usize) -> Self {
        let offset = if len == 0 { 0 } else { offset % len };
        Self { offset, len }
    }

    /// Rotation applied to every logical index
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Number of LEDs in the ring
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Physical strip index for a logical position.
    #[inline]
    pub const fn map(&self, pos: usize) -> usize {
        if self.len == 0 {
            return 0;
        }
        (pos + self.offset) % self.len
    }
}
