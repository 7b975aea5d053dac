//! Request and result value objects.
//!
//! `ZScoreRequest` mirrors the loosely-typed wire payload. It is turned into a
//! `ScoreRequest` by validation, after which every field the indicator needs
//! is guaranteed to be present and in range.

use serde::{Deserialize, Serialize};

use crate::error::{GrowthError, Result};
use crate::models::types::{Classification, Indicator, Sex};

/// Raw request as received from a caller
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZScoreRequest {
    /// "M" or "F"
    pub sex: String,
    /// "length", "weight" or "wfl"
    pub indicator: String,
    /// Completed years (age-indexed indicators)
    #[serde(default)]
    pub years: Option<i64>,
    /// Additional months (age-indexed indicators)
    #[serde(default)]
    pub months: Option<i64>,
    /// Length in cm
    #[serde(default)]
    pub length: Option<f64>,
    /// Weight in kg
    #[serde(default)]
    pub weight: Option<f64>,
}

/// Validated request, ready for lookup and scoring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreRequest {
    pub sex: Sex,
    pub indicator: Indicator,
    pub age_months: Option<u32>,
    pub length_cm: Option<f64>,
    pub weight_kg: Option<f64>,
}

impl ScoreRequest {
    /// Key used to select the reference row (age in months or length in cm)
    #[must_use]
    pub fn lookup_key(&self) -> f64 {
        match self.indicator {
            Indicator::LengthForAge | Indicator::WeightForAge => {
                f64::from(self.age_months.unwrap_or_default())
            }
            Indicator::WeightForLength => self.length_cm.unwrap_or(f64::NAN),
        }
    }

    /// The measurement being scored
    #[must_use]
    pub fn measurement(&self) -> f64 {
        let value = match self.indicator {
            Indicator::LengthForAge => self.length_cm,
            Indicator::WeightForAge | Indicator::WeightForLength => self.weight_kg,
        };
        value.unwrap_or(f64::NAN)
    }
}

impl TryFrom<&ZScoreRequest> for ScoreRequest {
    type Error = GrowthError;

    fn try_from(raw: &ZScoreRequest) -> Result<Self> {
        let sex: Sex = raw.sex.parse()?;
        let indicator: Indicator = raw.indicator.parse()?;

        let age_months = if indicator.is_age_indexed() {
            let (Some(years), Some(months)) = (raw.years, raw.months) else {
                return Err(GrowthError::MissingAge);
            };
            Some(total_months(years, months)?)
        } else {
            None
        };

        let (length_cm, weight_kg) = match indicator {
            Indicator::LengthForAge => {
                let length = raw.length.ok_or(GrowthError::MissingMeasurement { indicator })?;
                (Some(positive("length", length)?), None)
            }
            Indicator::WeightForAge => {
                let weight = raw.weight.ok_or(GrowthError::MissingMeasurement { indicator })?;
                (None, Some(positive("weight", weight)?))
            }
            Indicator::WeightForLength => {
                let (Some(length), Some(weight)) = (raw.length, raw.weight) else {
                    return Err(GrowthError::MissingMeasurement { indicator });
                };
                (
                    Some(positive("length", length)?),
                    Some(positive("weight", weight)?),
                )
            }
        };

        Ok(Self {
            sex,
            indicator,
            age_months,
            length_cm,
            weight_kg,
        })
    }
}

/// Age in months from completed years plus additional months
fn total_months(years: i64, months: i64) -> Result<u32> {
    if years < 0 {
        return Err(GrowthError::invalid_value("years", years));
    }
    if months < 0 {
        return Err(GrowthError::invalid_value("months", months));
    }
    years
        .checked_mul(12)
        .and_then(|m| m.checked_add(months))
        .and_then(|total| u32::try_from(total).ok())
        .ok_or_else(|| GrowthError::invalid_value("age", format!("{years}y {months}m")))
}

fn positive(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(GrowthError::invalid_value(field, value))
    }
}

/// Outcome of scoring a measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// z-score rounded to one decimal place
    pub z_score: f64,
    pub classification: Classification,
}
