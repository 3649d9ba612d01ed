mod copy;
mod engine;
mod growth;

pub use copy::CardCopy;
pub use engine::{Action, CardEngine, InteractionState, Phase, DEFAULT_DECLINE_LIMIT};
pub use growth::{glows, GrowthCurve, GLOW_THRESHOLD};
