pub mod engine;
pub mod matcher;

pub use engine::{transcript, ChallengeEngine, ChallengeEngineOptions, SubmitOutcome};
pub use matcher::{normalize_input, CommandMatcher, SubstringMatcher, TokenMatcher};
