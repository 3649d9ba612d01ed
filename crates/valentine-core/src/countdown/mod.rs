mod calc;
mod clock;
mod ticker;

pub use calc::{next_occurrence, remaining, AnnualDate, TimeRemaining};
pub use clock::{Clock, ManualClock, SystemClock};
pub use ticker::{CountdownTicker, TICK_PERIOD};

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::events::Event;

/// A countdown whose target was fixed when it started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    date: AnnualDate,
    target: DateTime<Utc>,
}

impl Countdown {
    pub fn starting_at<Tz: TimeZone>(now: &DateTime<Tz>, date: AnnualDate) -> Self {
        let target = next_occurrence(now, date).with_timezone(&Utc);
        Self { date, target }
    }

    /// Start from the clock's local calendar.
    pub fn from_clock(clock: &dyn Clock, date: AnnualDate) -> Self {
        Self::starting_at(&clock.local_now(), date)
    }

    pub fn date(&self) -> AnnualDate {
        self.date
    }

    pub fn target(&self) -> DateTime<Utc> {
        self.target
    }

    pub fn remaining_at(&self, now: DateTime<Utc>) -> TimeRemaining {
        remaining(&self.target, &now)
    }

    pub fn tick(&self, clock: &dyn Clock) -> Event {
        let at = clock.now();
        Event::CountdownTick {
            target: self.target,
            remaining: self.remaining_at(at),
            at,
        }
    }
}
