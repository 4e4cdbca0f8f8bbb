mod lifecycle;
mod session;
mod step;
pub mod transcript;

pub use lifecycle::{ChallengeEngine, ChallengeEngineOptions};
pub use step::SubmitOutcome;
