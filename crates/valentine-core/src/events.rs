use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::card::Phase;
use crate::countdown::TimeRemaining;

/// Every state change on the card produces an Event.
/// The terminal front end renders from them; `--json` modes print them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    DeclineRecorded {
        decline_count: u32,
        scale: f64,
        decline_available: bool,
        at: DateTime<Utc>,
    },
    ProposalAccepted {
        decline_count: u32,
        at: DateTime<Utc>,
    },
    CountdownTick {
        target: DateTime<Utc>,
        remaining: TimeRemaining,
        at: DateTime<Utc>,
    },
    /// Whole session recreated from scratch (the card's "reload").
    SessionReset {
        at: DateTime<Utc>,
    },
    StateSnapshot {
        phase: Phase,
        decline_count: u32,
        scale: f64,
        decline_available: bool,
        glowing: bool,
        at: DateTime<Utc>,
    },
}
