//! Core enumerations shared by the reference store and the scoring engine.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GrowthError;

/// Sex of the child
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Sex {
    pub const ALL: [Self; 2] = [Self::Male, Self::Female];

    /// Single-letter code used on the wire
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
        }
    }
}

impl FromStr for Sex {
    type Err = GrowthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "M" | "MALE" => Ok(Self::Male),
            "F" | "FEMALE" => Ok(Self::Female),
            _ => Err(GrowthError::UnknownSex(s.to_string())),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Anthropometric indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    LengthForAge,
    WeightForAge,
    WeightForLength,
}

impl Indicator {
    pub const ALL: [Self; 3] = [
        Self::LengthForAge,
        Self::WeightForAge,
        Self::WeightForLength,
    ];

    /// Whether rows of this indicator are keyed by age in months
    #[must_use]
    pub const fn is_age_indexed(self) -> bool {
        matches!(self, Self::LengthForAge | Self::WeightForAge)
    }

    /// Human-readable name, e.g. `length-for-age`
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LengthForAge => "length-for-age",
            Self::WeightForAge => "weight-for-age",
            Self::WeightForLength => "weight-for-length",
        }
    }
}

impl FromStr for Indicator {
    type Err = GrowthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "length" | "lfa" | "length_for_age" => Ok(Self::LengthForAge),
            "weight" | "wfa" | "weight_for_age" => Ok(Self::WeightForAge),
            "wfl" | "weight_for_length" => Ok(Self::WeightForLength),
            _ => Err(GrowthError::UnknownIndicator(s.to_string())),
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Clinical category derived from a z-score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    #[serde(rename = "Severely stunted")]
    SeverelyStunted,
    #[serde(rename = "Moderately stunted")]
    ModeratelyStunted,
    #[serde(rename = "Tall")]
    Tall,
    #[serde(rename = "Severe underweight")]
    SevereUnderweight,
    #[serde(rename = "Underweight")]
    Underweight,
    #[serde(rename = "Severe wasting")]
    SevereWasting,
    #[serde(rename = "Wasting")]
    Wasting,
    #[serde(rename = "Normal")]
    Normal,
    #[serde(rename = "Overweight")]
    Overweight,
}

impl Classification {
    /// Label as reported to clinicians
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SeverelyStunted => "Severely stunted",
            Self::ModeratelyStunted => "Moderately stunted",
            Self::Tall => "Tall",
            Self::SevereUnderweight => "Severe underweight",
            Self::Underweight => "Underweight",
            Self::SevereWasting => "Severe wasting",
            Self::Wasting => "Wasting",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
