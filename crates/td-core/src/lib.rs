pub mod error;
pub mod types;

pub use error::TermDrillError;
pub use types::*;
