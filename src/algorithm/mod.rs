//! Scoring algorithms
//!
//! This module contains the LMS scoring engine and the request-level
//! assessment that combines validation, reference lookup and scoring.

pub mod assessment;
pub mod lms;

pub use assessment::{assess, assess_validated};
pub use lms::{classify, round_one_decimal, score, z_score};
