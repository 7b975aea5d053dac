//! In-memory LMS reference tables.

use std::cmp::Ordering;
use std::fmt;

use itertools::Itertools;

use crate::error::{GrowthError, Result};
use crate::models::{Indicator, Sex};

/// Identity of one of the six reference tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableId {
    pub sex: Sex,
    pub indicator: Indicator,
}

impl TableId {
    #[must_use]
    pub const fn new(sex: Sex, indicator: Indicator) -> Self {
        Self { sex, indicator }
    }

    /// All six tables, boys first
    pub fn all() -> impl Iterator<Item = Self> {
        Sex::ALL
            .into_iter()
            .cartesian_product(Indicator::ALL)
            .map(|(sex, indicator)| Self::new(sex, indicator))
    }

    /// Name of the key column in the published files
    #[must_use]
    pub const fn key_column(self) -> &'static str {
        if self.indicator.is_age_indexed() {
            "Month"
        } else {
            "Length"
        }
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let who = match self.sex {
            Sex::Male => "boys",
            Sex::Female => "girls",
        };
        write!(f, "{who} {}", self.indicator)
    }
}

/// One tabulated row: the key (age in months or length in cm) and its LMS triple
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LmsRow {
    pub key: f64,
    /// Box-Cox power (skewness)
    pub l: f64,
    /// Median
    pub m: f64,
    /// Coefficient of variation
    pub s: f64,
}

impl LmsRow {
    #[must_use]
    pub const fn new(key: f64, l: f64, m: f64, s: f64) -> Self {
        Self { key, l, m, s }
    }

    /// Whether the LMS transform is defined for this row
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !(self.l.is_finite() && self.m.is_finite() && self.s.is_finite())
            || self.m <= 0.0
            || self.l == 0.0
            || self.s == 0.0
    }

    pub(crate) fn degenerate_error(&self) -> GrowthError {
        GrowthError::DegenerateRow {
            key: self.key,
            l: self.l,
            m: self.m,
            s: self.s,
        }
    }
}

/// An immutable reference table with rows sorted by key
#[derive(Debug, Clone)]
pub struct ReferenceTable {
    id: TableId,
    rows: Vec<LmsRow>,
}

impl ReferenceTable {
    /// Build a table, validating every row
    ///
    /// Rows may arrive in any order. Keys must be finite and unique, age keys
    /// must be non-negative whole months, and no row may be degenerate.
    pub fn new(id: TableId, mut rows: Vec<LmsRow>) -> Result<Self> {
        if rows.is_empty() {
            return Err(GrowthError::malformed(id, "no data rows"));
        }

        for row in &rows {
            if !row.key.is_finite() {
                return Err(GrowthError::malformed(
                    id,
                    format!("non-finite {} value", id.key_column()),
                ));
            }
            if id.indicator.is_age_indexed() && (row.key < 0.0 || row.key.fract() != 0.0) {
                return Err(GrowthError::malformed(
                    id,
                    format!("age key {} is not a whole number of months", row.key),
                ));
            }
            if row.is_degenerate() {
                return Err(row.degenerate_error());
            }
        }

        rows.sort_by(|a, b| a.key.total_cmp(&b.key));
        if let Some((a, _)) = rows.iter().tuple_windows().find(|(a, b)| a.key == b.key) {
            return Err(GrowthError::malformed(
                id,
                format!("duplicate {} {}", id.key_column(), a.key),
            ));
        }

        Ok(Self { id, rows })
    }

    #[must_use]
    pub const fn id(&self) -> TableId {
        self.id
    }

    #[must_use]
    pub fn rows(&self) -> &[LmsRow] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Smallest and largest tabulated keys
    #[must_use]
    pub fn key_range(&self) -> (f64, f64) {
        match (self.rows.first(), self.rows.last()) {
            (Some(first), Some(last)) => (first.key, last.key),
            _ => (f64::NAN, f64::NAN),
        }
    }

    /// Row whose key equals `key` exactly, compared as parsed floats
    #[must_use]
    pub fn find(&self, key: f64) -> Option<&LmsRow> {
        if !key.is_finite() {
            return None;
        }
        // -0.0 + 0.0 == +0.0, so a negative-zero query still finds month 0
        let key = key + 0.0;
        self.rows
            .binary_search_by(|row| row.key.partial_cmp(&key).unwrap_or(Ordering::Less))
            .ok()
            .map(|idx| &self.rows[idx])
    }
}
