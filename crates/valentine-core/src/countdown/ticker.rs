//! One-second countdown ticker.
//!
//! The ticker is a tokio task owned by a guard. Dropping the guard aborts the
//! task, so no tick can fire after the owning session is gone.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::clock::Clock;
use super::Countdown;
use crate::events::Event;

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

const CHANNEL_CAPACITY: usize = 4;

pub struct CountdownTicker {
    handle: JoinHandle<()>,
    rx: mpsc::Receiver<Event>,
    emitted: Arc<AtomicU64>,
}

impl CountdownTicker {
    /// Spawn the ticker on the current tokio runtime.
    ///
    /// The first tick is emitted immediately, then one per `period`.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn start(countdown: Countdown, clock: Arc<dyn Clock>, period: Duration) -> Self {
        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        let emitted = Arc::new(AtomicU64::new(0));
        let counter = Arc::clone(&emitted);
        let target_at = countdown.target();

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                let event = countdown.tick(clock.as_ref());
                counter.fetch_add(1, Ordering::SeqCst);
                if tx.send(event).await.is_err() {
                    break;
                }
            }
        });
        tracing::debug!(%target_at, "countdown ticker started");

        Self {
            handle,
            rx,
            emitted,
        }
    }

    pub async fn recv(&mut self) -> Option<Event> {
        self.rx.recv().await
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Shared count of ticks produced so far.
    pub fn emitted(&self) -> Arc<AtomicU64> {
        Arc::clone(&self.emitted)
    }
}

impl Drop for CountdownTicker {
    fn drop(&mut self) {
        self.handle.abort();
        tracing::debug!(
            ticks = self.emitted.load(Ordering::SeqCst),
            "countdown ticker stopped"
        );
    }
}
