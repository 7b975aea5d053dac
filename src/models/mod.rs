//! Domain value types.

pub mod request;
pub mod types;

pub use request::{ScoreRequest, ScoreResult, ZScoreRequest};
pub use types::{Classification, Indicator, Sex};
