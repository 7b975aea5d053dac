//! Request-level assessment: validate, look up the reference row, score.

use log::{debug, info};

use crate::algorithm::lms;
use crate::error::{GrowthError, Result};
use crate::models::{Indicator, ScoreRequest, ScoreResult, ZScoreRequest};
use crate::reference::{LmsRow, ReferenceStore};

/// Assess a raw request against the reference store
///
/// Validation failures, lookup misses and data faults are returned as
/// distinct `GrowthError` variants; see [`GrowthError::category`].
pub fn assess(store: &ReferenceStore, raw: &ZScoreRequest) -> Result<ScoreResult> {
    debug!("Assessing request: {raw:?}");
    let request = ScoreRequest::try_from(raw)?;
    assess_validated(store, &request)
}

/// Assess an already-validated request
pub fn assess_validated(store: &ReferenceStore, request: &ScoreRequest) -> Result<ScoreResult> {
    let row = find_row(store, request)?;
    let result = lms::score(request.indicator, request.measurement(), row)?;

    info!(
        "{} {} key={} measurement={} -> z={} ({})",
        request.sex,
        request.indicator,
        request.lookup_key(),
        request.measurement(),
        result.z_score,
        result.classification
    );
    Ok(result)
}

fn find_row<'a>(store: &'a ReferenceStore, request: &ScoreRequest) -> Result<&'a LmsRow> {
    let row = match request.indicator {
        Indicator::LengthForAge | Indicator::WeightForAge => request
            .age_months
            .and_then(|age| store.lookup_by_age(request.sex, request.indicator, age)),
        Indicator::WeightForLength => request
            .length_cm
            .and_then(|length| store.lookup_by_length(request.sex, length)),
    };

    row.ok_or(GrowthError::NoMatch {
        sex: request.sex,
        indicator: request.indicator,
        key: request.lookup_key(),
    })
}
