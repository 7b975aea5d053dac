use std::fs;
use std::path::{Path, PathBuf};

use who_growth::{GrowthConfig, Indicator, ReferenceStore, Sex, TableId};

/// Directory holding the bundled WHO reference tables
#[must_use]
pub fn data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Synthetic weight-for-length tables used in place of the WHO files
///
/// Same layout and `L` values as the published tables, with smoothed `M`
/// and `S` columns. Only valid for exercising lookup and scoring paths.
#[must_use]
pub fn fixture_path(id: TableId) -> PathBuf {
    let group = match id.sex {
        Sex::Male => "boys",
        Sex::Female => "girls",
    };
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(format!("{group}-weight-for-length.csv"))
}

/// Configuration pointing at the bundled tables plus the weight-for-length fixtures
#[must_use]
pub fn test_config() -> GrowthConfig {
    TableId::all()
        .filter(|id| id.indicator == Indicator::WeightForLength)
        .fold(GrowthConfig::default().with_data_dir(data_dir()), |config, id| {
            config.with_table_file(id, fixture_path(id).to_string_lossy())
        })
}

/// Load the test reference store
#[must_use]
pub fn bundled_store() -> ReferenceStore {
    ReferenceStore::load(&test_config()).expect("test reference tables should load")
}

/// Copy the test tables into `dir`, replacing one table's contents
pub fn write_tables_with_override(dir: &Path, replaced: TableId, contents: &str) -> GrowthConfig {
    let source = test_config();
    let config = GrowthConfig::default().with_data_dir(dir);
    for id in TableId::all() {
        let target = config.table_path(id);
        if id == replaced {
            fs::write(&target, contents).unwrap();
        } else {
            fs::copy(source.table_path(id), &target).unwrap();
        }
    }
    config
}
