//! Center-out traversal order
//!
//! The drip animation moves intensity away from a center LED, alternating
//! right and left: `center, center+1, center-1, center+2, center-2, ...`.
//! The order is computed once and never changes afterwards.

use heapless::Vec;

use crate::config::ConfigError;

/// Fixed traversal order covering every logical index of the ring exactly once
///
/// `CAP` is the storage capacity; the path itself may be shorter.
#[derive(Debug, Clone)]
pub struct CenterOutPath<const CAP: usize> {
    order: Vec<usize, CAP>,
}

impl<const CAP: usize> CenterOutPath<CAP> {
    /// Build a path covering the whole capacity.
    pub fn new(center: usize) -> Result<Self, ConfigError> {
        Self::with_len(center, CAP)
    }

    /// Build a path over a ring of `len` LEDs starting at `center`.
    pub fn with_len(center: usize, len: usize) -> Result<Self, ConfigError> {
        if len == 0 {
            return Err(ConfigError::EmptyRing);
        }
        if len > CAP {
            return Err(ConfigError::PathTooLong { len, capacity: CAP });
        }
        if center >= len {
            return Err(ConfigError::CenterOutOfRange { center, len });
        }

        let mut order = Vec::new();
        // Each `+step`/`-step` pair adds two fresh indices. The sequence fills
        // up before `step` exceeds `len / 2`, where the two sides would meet.
        let _ = order.push(center);
        let mut step = 1;
        while order.len() < len {
            let _ = order.push((center + step) % len);
            if order.len() < len {
                let _ = order.push((center + len - step) % len);
            }
            step += 1;
        }
        debug_assert!(step <= len / 2 + 1);

        Ok(Self { order })
    }

    /// The starting point of the path
    pub fn center(&self) -> usize {
        self.order[0]
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.order
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.order.iter().copied()
    }
}
