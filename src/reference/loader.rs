//! CSV loading for LMS reference tables.
//!
//! Each file is read with the Arrow CSV reader using an inferred schema. The
//! key column and the `L`, `M`, `S` columns are cast to `Float64` once here,
//! so lookups never re-parse data.

use std::fs::File;
use std::io::{Seek, SeekFrom};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use arrow::csv::ReaderBuilder;
use arrow::csv::reader::Format;
use arrow::record_batch::RecordBatch;
use log::{debug, info};

use crate::error::{GrowthError, Result};
use crate::reference::table::{LmsRow, ReferenceTable, TableId};
use crate::utils::arrow::{dense_values, extract_float64};

/// Rows per record batch when reading reference files
const BATCH_SIZE: usize = 1024;

/// Load one reference table from a CSV file with a header row
pub fn load_table(id: TableId, path: &Path) -> Result<ReferenceTable> {
    debug!("Loading {id} table from {}", path.display());
    let start = Instant::now();

    let batches = read_csv(path)?;
    let mut rows = Vec::new();
    for batch in &batches {
        rows.extend(rows_from_batch(id, batch)?);
    }

    let table = ReferenceTable::new(id, rows)?;
    let (first, last) = table.key_range();
    info!(
        "Loaded {id}: {} rows, {} {first}..={last}, from {} in {:?}",
        table.len(),
        id.key_column(),
        path.display(),
        start.elapsed()
    );
    Ok(table)
}

fn read_csv(path: &Path) -> Result<Vec<RecordBatch>> {
    let io_err = |source| GrowthError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(io_err)?;
    let format = Format::default().with_header(true);
    let (schema, _) = format.infer_schema(&mut file, None)?;
    file.seek(SeekFrom::Start(0)).map_err(io_err)?;

    let reader = ReaderBuilder::new(Arc::new(schema))
        .with_header(true)
        .with_batch_size(BATCH_SIZE)
        .build(file)?;

    reader
        .map(|batch| batch.map_err(GrowthError::from))
        .collect()
}

/// Extract LMS rows from one record batch
pub fn rows_from_batch(id: TableId, batch: &RecordBatch) -> Result<Vec<LmsRow>> {
    let keys = required_column(id, batch, id.key_column())?;
    let l = required_column(id, batch, "L")?;
    let m = required_column(id, batch, "M")?;
    let s = required_column(id, batch, "S")?;

    Ok(keys
        .into_iter()
        .zip(l)
        .zip(m)
        .zip(s)
        .map(|(((key, l), m), s)| LmsRow::new(key, l, m, s))
        .collect())
}

fn required_column(id: TableId, batch: &RecordBatch, column: &str) -> Result<Vec<f64>> {
    let array = extract_float64(batch, column)?.ok_or_else(|| GrowthError::MissingColumn {
        table: id,
        column: column.to_string(),
    })?;

    dense_values(&array).map_err(|row| {
        GrowthError::malformed(id, format!("non-numeric or empty {column} value in row {}", row + 1))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Indicator, Sex};
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_age_table_with_extra_columns() {
        let file = write_csv(
            "Month,L,M,S,P3,P97\n0,0.3487,3.3464,0.14602,2.5,4.4\n1,0.2297,4.4709,0.13395,3.4,5.8\n",
        );
        let id = TableId::new(Sex::Male, Indicator::WeightForAge);
        let table = load_table(id, file.path()).unwrap();

        assert_eq!(table.len(), 2);
        let row = table.find(1.0).unwrap();
        assert_eq!(row.l, 0.2297);
        assert_eq!(row.m, 4.4709);
        assert_eq!(row.s, 0.13395);
    }

    #[test]
    fn test_length_keys_compare_numerically() {
        let file = write_csv("Length,L,M,S\n65,-0.3521,7.4327,0.08217\n65.50,-0.3521,7.5718,0.08206\n");
        let id = TableId::new(Sex::Male, Indicator::WeightForLength);
        let table = load_table(id, file.path()).unwrap();

        assert!(table.find(65.0).is_some());
        assert!(table.find(65.5).is_some());
    }

    #[test]
    fn test_missing_key_column() {
        let file = write_csv("Age,L,M,S\n0,1,49.8842,0.03795\n");
        let id = TableId::new(Sex::Female, Indicator::LengthForAge);
        let err = load_table(id, file.path()).unwrap_err();

        assert!(matches!(
            err,
            GrowthError::MissingColumn { ref column, .. } if column == "Month"
        ));
    }

    #[test]
    fn test_missing_lms_column() {
        let file = write_csv("Length,L,M\n65.0,-0.3521,7.4327\n");
        let id = TableId::new(Sex::Female, Indicator::WeightForLength);
        let err = load_table(id, file.path()).unwrap_err();

        assert!(matches!(
            err,
            GrowthError::MissingColumn { ref column, .. } if column == "S"
        ));
    }

    #[test]
    fn test_non_numeric_cell() {
        let file = write_csv("Month,L,M,S\n0,1,49.8842,0.03795\n1,1,abc,0.03557\n");
        let id = TableId::new(Sex::Male, Indicator::LengthForAge);
        let err = load_table(id, file.path()).unwrap_err();

        assert!(matches!(err, GrowthError::MalformedTable { .. }), "{err}");
    }

    #[test]
    fn test_missing_file() {
        let id = TableId::new(Sex::Male, Indicator::LengthForAge);
        let err = load_table(id, Path::new("/nonexistent/who/table.csv")).unwrap_err();
        assert!(matches!(err, GrowthError::Io { .. }));
    }
}
