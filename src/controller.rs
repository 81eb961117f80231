//! Shared engine and mode switching
//!
//! The timer tick and the request handler run in different contexts. Both
//! reach the engine through [`SharedRing`], which takes a critical section
//! for every access, so a mode switch never interleaves with a tick.

use core::cell::RefCell;

use critical_section::Mutex;
use rand::RngCore;

use crate::clock::WallClock;
use crate::command::{Command, CommandOutcome};
use crate::engine::AnimationEngine;
use crate::mode::Mode;
use crate::sink::FrameSink;

/// Engine guarded by a critical section
pub struct SharedRing<S, C, R, const N: usize> {
    engine: Mutex<RefCell<AnimationEngine<S, C, R, N>>>,
}

impl<S, C, R, const N: usize> SharedRing<S, C, R, N>
where
    S: FrameSink,
    C: WallClock,
    R: RngCore,
{
    pub const fn new(engine: AnimationEngine<S, C, R, N>) -> Self {
        Self {
            engine: Mutex::new(RefCell::new(engine)),
        }
    }

    /// Run one animation tick. Call this from the periodic timer.
    pub fn tick(&self) {
        self.with(AnimationEngine::tick);
    }

    /// Get a controller handle for the request handler.
    pub const fn controller(&self) -> ModeController<'_, S, C, R, N> {
        ModeController { ring: self }
    }

    /// Run `f` with exclusive access to the engine.
    pub fn with<T>(&self, f: impl FnOnce(&mut AnimationEngine<S, C, R, N>) -> T) -> T {
        critical_section::with(|cs| f(&mut self.engine.borrow(cs).borrow_mut()))
    }
}

/// Handle that switches the mode of a [`SharedRing`]
pub struct ModeController<'a, S, C, R, const N: usize> {
    ring: &'a SharedRing<S, C, R, N>,
}

impl<S, C, R, const N: usize> Clone for ModeController<'_, S, C, R, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, C, R, const N: usize> Copy for ModeController<'_, S, C, R, N> {}

impl<S, C, R, const N: usize> ModeController<'_, S, C, R, N>
where
    S: FrameSink,
    C: WallClock,
    R: RngCore,
{
    /// Switch the active mode and apply its entry reset.
    pub fn set_mode(&self, mode: Mode) {
        self.ring.with(|engine| engine.set_mode(mode));
    }

    /// Currently active mode
    pub fn mode(&self) -> Mode {
        self.ring.with(|engine| engine.mode())
    }

    /// Apply a parsed control command.
    ///
    /// Time sync needs the network, so it is handed back to the caller.
    pub fn handle(&self, command: Command) -> CommandOutcome {
        match command {
            Command::SetMode(mode) => {
                self.set_mode(mode);
                CommandOutcome::ModeChanged(mode)
            }
            Command::SyncTime => CommandOutcome::TimeSyncRequested,
        }
    }
}
