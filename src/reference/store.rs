//! The reference table store.
//!
//! A `ReferenceStore` owns the six WHO LMS tables. It is built once at
//! startup and never mutated, so a single instance can be shared behind an
//! `Arc` by any number of threads.

use std::time::Instant;

use log::info;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::config::GrowthConfig;
use crate::error::{GrowthError, Result};
use crate::models::{Indicator, Sex};
use crate::reference::loader::load_table;
use crate::reference::table::{LmsRow, ReferenceTable, TableId};

/// Immutable index of reference tables keyed by (sex, indicator)
#[derive(Debug, Clone)]
pub struct ReferenceStore {
    tables: FxHashMap<TableId, ReferenceTable>,
}

impl ReferenceStore {
    /// Load all six tables from the configured data directory
    ///
    /// Tables are read in parallel. Any missing or malformed file fails the
    /// whole load.
    pub fn load(config: &GrowthConfig) -> Result<Self> {
        info!(
            "Loading WHO reference tables from {}",
            config.data_dir.display()
        );
        let start = Instant::now();

        let tables = TableId::all()
            .collect::<Vec<_>>()
            .into_par_iter()
            .map(|id| load_table(id, &config.table_path(id)))
            .collect::<Result<Vec<_>>>()?;

        let store = Self::from_tables(tables)?;
        info!(
            "Loaded {} reference tables ({} rows) in {:?}",
            store.tables.len(),
            store.total_rows(),
            start.elapsed()
        );
        Ok(store)
    }

    /// Build a store from already-constructed tables
    ///
    /// Exactly one table is required for each of the six (sex, indicator)
    /// combinations.
    pub fn from_tables(tables: impl IntoIterator<Item = ReferenceTable>) -> Result<Self> {
        let mut index = FxHashMap::default();
        for table in tables {
            let id = table.id();
            if index.insert(id, table).is_some() {
                return Err(GrowthError::malformed(id, "table supplied more than once"));
            }
        }

        if let Some(missing) = TableId::all().find(|id| !index.contains_key(id)) {
            return Err(GrowthError::malformed(missing, "reference table not loaded"));
        }

        Ok(Self { tables: index })
    }

    /// The table for a (sex, indicator) combination
    #[must_use]
    pub fn table(&self, sex: Sex, indicator: Indicator) -> Option<&ReferenceTable> {
        self.tables.get(&TableId::new(sex, indicator))
    }

    /// Row of an age-indexed table whose month equals `age_months` exactly
    ///
    /// Returns `None` for `WeightForLength`, which is not keyed by age.
    #[must_use]
    pub fn lookup_by_age(&self, sex: Sex, indicator: Indicator, age_months: u32) -> Option<&LmsRow> {
        if !indicator.is_age_indexed() {
            return None;
        }
        self.table(sex, indicator)?.find(f64::from(age_months))
    }

    /// Row of the weight-for-length table whose length equals `length_cm` exactly
    #[must_use]
    pub fn lookup_by_length(&self, sex: Sex, length_cm: f64) -> Option<&LmsRow> {
        self.table(sex, Indicator::WeightForLength)?.find(length_cm)
    }

    /// Number of tables held
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Number of rows across all tables
    #[must_use]
    pub fn total_rows(&self) -> usize {
        self.tables.values().map(ReferenceTable::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_table(id: TableId) -> ReferenceTable {
        let rows = if id.indicator.is_age_indexed() {
            vec![LmsRow::new(0.0, 1.0, 50.0, 0.04), LmsRow::new(1.0, 1.0, 54.0, 0.04)]
        } else {
            vec![LmsRow::new(65.0, -0.35, 7.4, 0.08)]
        };
        ReferenceTable::new(id, rows).unwrap()
    }

    fn tiny_store() -> ReferenceStore {
        ReferenceStore::from_tables(TableId::all().map(tiny_table)).unwrap()
    }

    #[test]
    fn test_store_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReferenceStore>();
    }

    #[test]
    fn test_lookup_by_age() {
        let store = tiny_store();
        let row = store
            .lookup_by_age(Sex::Female, Indicator::LengthForAge, 1)
            .unwrap();
        assert_eq!(row.m, 54.0);
        assert!(store.lookup_by_age(Sex::Female, Indicator::LengthForAge, 2).is_none());
        assert!(store
            .lookup_by_age(Sex::Female, Indicator::WeightForLength, 0)
            .is_none());
    }

    #[test]
    fn test_lookup_by_length() {
        let store = tiny_store();
        assert!(store.lookup_by_length(Sex::Male, 65.0).is_some());
        assert!(store.lookup_by_length(Sex::Male, 65.05).is_none());
    }

    #[test]
    fn test_from_tables_requires_all_six() {
        let five = TableId::all().skip(1).map(tiny_table);
        let err = ReferenceStore::from_tables(five).unwrap_err();
        assert!(err.to_string().contains("boys length-for-age"), "{err}");
    }

    #[test]
    fn test_from_tables_rejects_duplicates() {
        let id = TableId::new(Sex::Male, Indicator::WeightForAge);
        let tables = TableId::all().map(tiny_table).chain(std::iter::once(tiny_table(id)));
        assert!(ReferenceStore::from_tables(tables).is_err());
    }

    #[test]
    fn test_counts() {
        let store = tiny_store();
        assert_eq!(store.len(), 6);
        assert_eq!(store.total_rows(), 4 * 2 + 2);
    }
}
