//! Column extraction from record batches.

use arrow::array::{Array, ArrayRef, AsArray, Float64Array};
use arrow::compute::kernels::cast::cast;
use arrow::datatypes::{DataType, Float64Type, Schema};
use arrow::record_batch::RecordBatch;
use log::debug;

/// Normalise a CSV header for comparison
///
/// Strips surrounding whitespace and a leading UTF-8 byte order mark.
#[must_use]
pub fn normalize_header(name: &str) -> String {
    name.trim_start_matches('\u{feff}').trim().to_lowercase()
}

/// Index of a column, matching the name case-insensitively
#[must_use]
pub fn find_column_index(schema: &Schema, column_name: &str) -> Option<usize> {
    let wanted = normalize_header(column_name);
    schema
        .fields()
        .iter()
        .position(|field| normalize_header(field.name()) == wanted)
}

/// Get a column as `Float64`, casting from whatever type was inferred
///
/// Cells that cannot be interpreted as numbers become nulls; the caller
/// decides whether nulls are acceptable.
///
/// # Returns
///
/// * `Ok(None)` - If the column does not exist
/// * `Ok(Some(array))` - The column as a `Float64Array`
/// * `Err(ArrowError)` - If the cast itself fails
pub fn extract_float64(
    batch: &RecordBatch,
    column_name: &str,
) -> Result<Option<Float64Array>, arrow::error::ArrowError> {
    let Some(idx) = find_column_index(&batch.schema(), column_name) else {
        return Ok(None);
    };

    let column: &ArrayRef = batch.column(idx);
    let converted = if column.data_type() == &DataType::Float64 {
        column.clone()
    } else {
        debug!(
            "Converting column '{column_name}' from {:?} to Float64",
            column.data_type()
        );
        cast(column, &DataType::Float64)?
    };

    Ok(Some(converted.as_primitive::<Float64Type>().clone()))
}

/// Values of a `Float64` column, or the index of the first null
pub fn dense_values(array: &Float64Array) -> Result<Vec<f64>, usize> {
    if let Some(idx) = (0..array.len()).find(|&i| array.is_null(i)) {
        return Err(idx);
    }
    Ok(array.values().to_vec())
}
