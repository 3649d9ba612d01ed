//! One viewing of the card.
//!
//! A session owns the state machine, the cue sink and, once the proposal is
//! accepted, the countdown ticker. Resetting or dropping the session releases
//! the ticker.

use std::sync::atomic::AtomicU64;
use std::sync::Arc;
use std::time::Duration;

use crate::card::{CardEngine, Phase};
use crate::countdown::{AnnualDate, Clock, Countdown, CountdownTicker, TICK_PERIOD};
use crate::events::Event;
use crate::notify::{fire, Cue, NotificationSink};

pub struct Session {
    engine: CardEngine,
    date: AnnualDate,
    clock: Arc<dyn Clock>,
    sink: Arc<dyn NotificationSink>,
    tick_period: Duration,
    countdown: Option<Countdown>,
    ticker: Option<CountdownTicker>,
}

impl Session {
    pub fn new(
        engine: CardEngine,
        date: AnnualDate,
        clock: Arc<dyn Clock>,
        sink: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            engine,
            date,
            clock,
            sink,
            tick_period: TICK_PERIOD,
            countdown: None,
            ticker: None,
        }
    }

    pub fn with_tick_period(mut self, period: Duration) -> Self {
        self.tick_period = period;
        self
    }

    pub fn engine(&self) -> &CardEngine {
        &self.engine
    }

    pub fn countdown(&self) -> Option<&Countdown> {
        self.countdown.as_ref()
    }

    pub fn is_counting_down(&self) -> bool {
        self.ticker.as_ref().is_some_and(CountdownTicker::is_running)
    }

    /// Shared count of ticks produced by the running countdown, if any.
    pub fn ticks_emitted(&self) -> Option<Arc<AtomicU64>> {
        self.ticker.as_ref().map(CountdownTicker::emitted)
    }

    pub fn decline(&mut self) -> Option<Event> {
        let event = self.engine.decline_at(self.clock.now())?;
        fire(self.sink.as_ref(), Cue::Decline);
        Some(event)
    }

    /// Accept the proposal and start the countdown.
    ///
    /// Must be called from within a tokio runtime.
    pub fn accept(&mut self) -> Option<Event> {
        let event = self.engine.accept_at(self.clock.now())?;
        fire(self.sink.as_ref(), Cue::Accept);
        fire(self.sink.as_ref(), Cue::Celebrate);

        let countdown = Countdown::from_clock(self.clock.as_ref(), self.date);
        self.ticker = Some(CountdownTicker::start(
            countdown,
            Arc::clone(&self.clock),
            self.tick_period,
        ));
        self.countdown = Some(countdown);
        Some(event)
    }

    /// Throw the whole session away and start over, like reloading the page.
    pub fn reset(&mut self) -> Event {
        self.ticker = None;
        self.countdown = None;
        self.engine = CardEngine::new(self.engine.growth(), self.engine.decline_limit());
        tracing::info!("session reset");
        Event::SessionReset {
            at: self.clock.now(),
        }
    }

    /// Wait for the next countdown tick.
    ///
    /// Never resolves while the proposal is still open, which makes it safe to
    /// use as one arm of a `select!`.
    pub async fn next_tick(&mut self) -> Option<Event> {
        match self.ticker.as_mut() {
            Some(ticker) if self.engine.phase() == Phase::Accepted => ticker.recv().await,
            _ => std::future::pending().await,
        }
    }

    /// End the session, stopping any running ticker.
    pub fn teardown(self) {
        drop(self);
    }
}
