//! Audio/haptic cues.
//!
//! The card tells a sink which cue to play and moves on. A sink that fails is
//! logged at debug level and otherwise ignored.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::error::ResourceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cue {
    /// Short pop when the negative option is chosen.
    Decline,
    /// Bright ding on acceptance.
    Accept,
    /// Four-note arpeggio when the success screen appears.
    Celebrate,
}

impl Cue {
    /// Number of distinct notes in the cue.
    pub fn notes(&self) -> usize {
        match self {
            Cue::Decline | Cue::Accept => 1,
            Cue::Celebrate => 4,
        }
    }
}

pub trait NotificationSink: Send + Sync {
    fn play(&self, cue: Cue) -> Result<(), ResourceError>;
}

/// Plays nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSink;

impl NotificationSink for SilentSink {
    fn play(&self, _cue: Cue) -> Result<(), ResourceError> {
        Ok(())
    }
}

/// Remembers every cue it was asked to play.
#[derive(Debug, Default)]
pub struct RecordingSink {
    played: Mutex<Vec<Cue>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn played(&self) -> Vec<Cue> {
        self.played
            .lock()
            .map(|cues| cues.clone())
            .unwrap_or_default()
    }
}

impl NotificationSink for RecordingSink {
    fn play(&self, cue: Cue) -> Result<(), ResourceError> {
        self.played
            .lock()
            .map_err(|_| ResourceError::unavailable("recording sink", "lock poisoned"))?
            .push(cue);
        Ok(())
    }
}

/// Fire a cue and forget about it.
pub fn fire(sink: &dyn NotificationSink, cue: Cue) {
    if let Err(e) = sink.play(cue) {
        tracing::debug!(?cue, error = %e, "cue dropped");
    }
}
