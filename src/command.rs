//! Control commands
//!
//! Maps control panel requests (`GET /rainbow HTTP/1.1`) to commands.
//! Anything that does not name a known command is rejected here, before it
//! can reach the engine.

use crate::mode::Mode;

const COMMAND_SYNC_TIME: &str = "ntp";
const REQUEST_METHOD: &str = "GET";

/// Command accepted by the mode controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Switch to another mode
    SetMode(Mode),
    /// Resynchronize the wall clock
    SyncTime,
}

impl Command {
    /// Parse a request path such as `/clock` or `/red?x=1`.
    pub fn parse_path(path: &str) -> Option<Self> {
        let path = path.split('?').next().unwrap_or_default();
        let name = path.strip_prefix('/')?;
        if name == COMMAND_SYNC_TIME {
            return Some(Self::SyncTime);
        }
        Mode::parse_from_str(name).map(Self::SetMode)
    }

    /// Parse the request line of a raw HTTP request.
    ///
    /// Only `GET` requests carry commands.
    pub fn from_request(request: &[u8]) -> Option<Self> {
        let line_end = request
            .iter()
            .position(|&b| b == b'\r' || b == b'\n')
            .unwrap_or(request.len());
        let line = core::str::from_utf8(&request[..line_end]).ok()?;

        let mut parts = line.split_ascii_whitespace();
        if parts.next()? != REQUEST_METHOD {
            return None;
        }
        Self::parse_path(parts.next()?)
    }
}

/// Result of handling a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The engine now runs this mode
    ModeChanged(Mode),
    /// The caller should resynchronize the wall clock
    TimeSyncRequested,
}
