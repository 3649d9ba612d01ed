//! Proposal state machine.
//!
//! The engine is the only thing allowed to change the interaction state. It
//! owns no timers and plays no sounds; callers react to the events it returns.
//!
//! ## State Transitions
//!
//! ```text
//! Proposal --decline--> Proposal (decline_count + 1)
//! Proposal --accept---> Accepted (terminal)
//! ```
//!
//! Anything else is a no-op. The `try_*` variants say why.
//!
//! Events carry the caller's timestamp through the `*_at` commands; the plain
//! variants stamp them with the system time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::growth::{glows, GrowthCurve};
use crate::error::TransitionError;
use crate::events::Event;

/// Decline count at which the negative option disappears by default.
pub const DEFAULT_DECLINE_LIMIT: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Proposal,
    Accepted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Accept,
    Decline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionState {
    pub phase: Phase,
    pub decline_count: u32,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            phase: Phase::Proposal,
            decline_count: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardEngine {
    state: InteractionState,
    growth: GrowthCurve,
    /// `None` keeps the negative option forever.
    decline_limit: Option<u32>,
}

impl CardEngine {
    pub fn new(growth: GrowthCurve, decline_limit: Option<u32>) -> Self {
        Self {
            state: InteractionState::default(),
            growth,
            decline_limit,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn decline_count(&self) -> u32 {
        self.state.decline_count
    }

    pub fn decline_limit(&self) -> Option<u32> {
        self.decline_limit
    }

    pub fn growth(&self) -> GrowthCurve {
        self.growth
    }

    pub fn scale(&self) -> f64 {
        self.growth.scale(self.state.decline_count)
    }

    pub fn decline_available(&self) -> bool {
        self.state.phase == Phase::Proposal && self.state.decline_count < self.effective_limit()
    }

    /// An unbounded engine still stops at `u32::MAX`.
    fn effective_limit(&self) -> u32 {
        self.decline_limit.unwrap_or(u32::MAX)
    }

    pub fn available_actions(&self) -> Vec<Action> {
        match self.state.phase {
            Phase::Accepted => Vec::new(),
            Phase::Proposal if self.decline_available() => vec![Action::Decline, Action::Accept],
            Phase::Proposal => vec![Action::Accept],
        }
    }

    pub fn snapshot(&self) -> Event {
        self.snapshot_at(Utc::now())
    }

    pub fn snapshot_at(&self, at: DateTime<Utc>) -> Event {
        let scale = self.scale();
        Event::StateSnapshot {
            phase: self.state.phase,
            decline_count: self.state.decline_count,
            scale,
            decline_available: self.decline_available(),
            glowing: glows(scale),
            at,
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn try_decline(&mut self, at: DateTime<Utc>) -> Result<Event, TransitionError> {
        if self.state.phase == Phase::Accepted {
            return Err(TransitionError::AlreadyAccepted);
        }
        let limit = self.effective_limit();
        if self.state.decline_count >= limit {
            return Err(TransitionError::DeclineUnavailable { limit });
        }
        self.state.decline_count += 1;
        Ok(Event::DeclineRecorded {
            decline_count: self.state.decline_count,
            scale: self.scale(),
            decline_available: self.decline_available(),
            at,
        })
    }

    pub fn try_accept(&mut self, at: DateTime<Utc>) -> Result<Event, TransitionError> {
        if self.state.phase == Phase::Accepted {
            return Err(TransitionError::AlreadyAccepted);
        }
        self.state.phase = Phase::Accepted;
        tracing::info!(decline_count = self.state.decline_count, "proposal accepted");
        Ok(Event::ProposalAccepted {
            decline_count: self.state.decline_count,
            at,
        })
    }

    /// Record a decline. Returns `None` when declining is not allowed.
    pub fn decline(&mut self) -> Option<Event> {
        self.decline_at(Utc::now())
    }

    pub fn decline_at(&mut self, at: DateTime<Utc>) -> Option<Event> {
        self.try_decline(at)
            .map_err(|e| tracing::debug!(error = %e, "decline ignored"))
            .ok()
    }

    /// Accept the proposal. Returns `None` once already accepted.
    pub fn accept(&mut self) -> Option<Event> {
        self.accept_at(Utc::now())
    }

    pub fn accept_at(&mut self, at: DateTime<Utc>) -> Option<Event> {
        self.try_accept(at)
            .map_err(|e| tracing::debug!(error = %e, "accept ignored"))
            .ok()
    }
}

impl Default for CardEngine {
    fn default() -> Self {
        Self::new(GrowthCurve::default(), Some(DEFAULT_DECLINE_LIMIT))
    }
}
