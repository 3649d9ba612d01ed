//! # Valentine Core Library
//!
//! Logic behind the Valentine proposal card. The card asks one question with
//! two answers; every "no" makes the "yes" bigger, and a "yes" moves on to a
//! celebration screen counting down to the big day.
//!
//! ## Architecture
//!
//! - **Card Engine**: the proposal state machine plus the growth curve that
//!   sizes the affirmative control
//! - **Countdown**: next-occurrence and remaining-time arithmetic over an
//!   injectable [`Clock`], and the one-second ticker that drives it
//! - **Session**: owns one engine, the cue sink and the ticker for the
//!   lifetime of a single viewing
//! - **Storage**: TOML configuration for card variants
//!
//! ## Key Components
//!
//! - [`CardEngine`]: Proposal state machine
//! - [`GrowthCurve`]: Decline count to scale factor
//! - [`Countdown`]: Fixed target with remaining-time breakdown
//! - [`Session`]: Scoped owner of engine, cues and ticker
//! - [`Config`]: Variant configuration

pub mod assets;
pub mod card;
pub mod countdown;
pub mod decor;
pub mod error;
pub mod events;
pub mod notify;
pub mod session;
pub mod storage;

pub use assets::{Artwork, AssetProvider, DirAssets, NoAssets};
pub use card::{Action, CardCopy, CardEngine, GrowthCurve, InteractionState, Phase};
pub use countdown::{
    next_occurrence, remaining, AnnualDate, Clock, Countdown, CountdownTicker, ManualClock,
    SystemClock, TimeRemaining,
};
pub use error::{ConfigError, CoreError, ResourceError, TransitionError, ValidationError};
pub use events::Event;
pub use notify::{Cue, NotificationSink, RecordingSink, SilentSink};
pub use session::Session;
pub use storage::Config;
