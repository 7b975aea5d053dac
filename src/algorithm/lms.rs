//! Cole's LMS transform and WHO z-score classification.
//!
//! The z-score of a measurement `X` against a reference row is
//!
//! ```text
//! z = ((X / M)^L - 1) / (L * S)
//! ```
//!
//! Classification uses the unrounded z. Lower cut-offs are strict (`z < -3`,
//! `z < -2`); the upper edge of the normal band is inclusive (`z <= 2`).

use crate::error::{GrowthError, Result};
use crate::models::{Classification, Indicator, ScoreResult};
use crate::reference::LmsRow;

/// Unrounded z-score of `measurement` against `row`
pub fn z_score(measurement: f64, row: &LmsRow) -> Result<f64> {
    if row.is_degenerate() {
        log::error!("Degenerate reference row encountered: {row:?}");
        return Err(row.degenerate_error());
    }
    if !(measurement.is_finite() && measurement > 0.0) {
        return Err(GrowthError::invalid_value("measurement", measurement));
    }

    Ok(((measurement / row.m).powf(row.l) - 1.0) / (row.l * row.s))
}

/// Round to one decimal place on the exact decimal value of `z`, ties to even
///
/// Float formatting is correctly rounded, so `0.35` (stored just below
/// 0.35) reports `0.3` while the exact tie `0.25` reports `0.2`.
/// Negative zero is reported as `0.0`.
#[must_use]
pub fn round_one_decimal(z: f64) -> f64 {
    format!("{z:.1}").parse::<f64>().unwrap_or(z) + 0.0
}

/// Clinical category for an unrounded z-score
#[must_use]
pub fn classify(indicator: Indicator, z: f64) -> Classification {
    let (severe, moderate, high) = match indicator {
        Indicator::LengthForAge => (
            Classification::SeverelyStunted,
            Classification::ModeratelyStunted,
            Classification::Tall,
        ),
        Indicator::WeightForAge => (
            Classification::SevereUnderweight,
            Classification::Underweight,
            Classification::Overweight,
        ),
        Indicator::WeightForLength => (
            Classification::SevereWasting,
            Classification::Wasting,
            Classification::Overweight,
        ),
    };

    if z < -3.0 {
        severe
    } else if z < -2.0 {
        moderate
    } else if z <= 2.0 {
        Classification::Normal
    } else {
        high
    }
}

/// Score a measurement against a reference row
pub fn score(indicator: Indicator, measurement: f64, row: &LmsRow) -> Result<ScoreResult> {
    let z = z_score(measurement, row)?;
    Ok(ScoreResult {
        z_score: round_one_decimal(z),
        classification: classify(indicator, z),
    })
}

/// Measurement whose z-score against `row` is exactly `z`
///
/// Inverse of the LMS transform: `X = M * (1 + L*S*z)^(1/L)`.
#[must_use]
pub fn measurement_at(z: f64, row: &LmsRow) -> f64 {
    row.m * (1.0 + row.l * row.s * z).powf(1.0 / row.l)
}
