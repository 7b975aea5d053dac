//! WHO growth reference engine: LMS table lookup, z-score computation and
//! clinical classification for length-for-age, weight-for-age and
//! weight-for-length.

pub mod algorithm;
pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod reference;
pub mod utils;

// Re-export the most common types for easier use
pub use config::GrowthConfig;
pub use error::{ErrorCategory, GrowthError, Result};
pub use models::{Classification, Indicator, ScoreRequest, ScoreResult, Sex, ZScoreRequest};
pub use reference::{LmsRow, ReferenceStore, ReferenceTable, TableId};

// Scoring entry points
pub use algorithm::{assess, classify, score, z_score};
