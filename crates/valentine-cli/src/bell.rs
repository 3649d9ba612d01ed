use std::io::Write;

use valentine_core::{Cue, NotificationSink, ResourceError};

/// Rings the terminal bell once per note of the cue.
///
/// Writes to stderr so the card on stdout is left alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalBell;

impl NotificationSink for TerminalBell {
    fn play(&self, cue: Cue) -> Result<(), ResourceError> {
        let mut err = std::io::stderr().lock();
        let bells = vec![0x07u8; cue.notes()];
        err.write_all(&bells)
            .and_then(|()| err.flush())
            .map_err(|e| ResourceError::unavailable("terminal bell", e.to_string()))
    }
}
