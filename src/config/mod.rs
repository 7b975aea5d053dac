//! Configuration for the growth reference service.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::models::{Indicator, Sex};
use crate::reference::TableId;

/// Environment variable overriding the reference data directory
pub const DATA_DIR_ENV: &str = "WHO_GROWTH_DATA_DIR";
/// Environment variable overriding the HTTP bind address
pub const BIND_ADDR_ENV: &str = "WHO_GROWTH_BIND";

/// Configuration for loading reference tables and serving requests
#[derive(Debug, Clone)]
pub struct GrowthConfig {
    /// Directory holding the six reference CSV files
    pub data_dir: PathBuf,
    /// File name of each table within `data_dir`
    pub table_files: HashMap<TableId, String>,
    /// Address the HTTP server binds to
    pub bind_addr: String,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        let table_files = TableId::all()
            .map(|id| (id, default_file_name(id)))
            .collect();

        Self {
            data_dir: PathBuf::from("data"),
            table_files,
            bind_addr: "0.0.0.0:8000".to_string(),
        }
    }
}

impl GrowthConfig {
    /// Create a configuration with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `WHO_GROWTH_DATA_DIR` and `WHO_GROWTH_BIND`
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            config.data_dir = PathBuf::from(dir);
        }
        if let Ok(addr) = std::env::var(BIND_ADDR_ENV) {
            config.bind_addr = addr;
        }
        config
    }

    /// Use a different data directory
    #[must_use]
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Use a different file name for one table
    ///
    /// An absolute path replaces the data directory for that table.
    #[must_use]
    pub fn with_table_file(mut self, id: TableId, file_name: impl Into<String>) -> Self {
        self.table_files.insert(id, file_name.into());
        self
    }

    /// Use a different bind address
    #[must_use]
    pub fn with_bind_addr(mut self, addr: impl Into<String>) -> Self {
        self.bind_addr = addr.into();
        self
    }

    /// Full path of a table's CSV file
    #[must_use]
    pub fn table_path(&self, id: TableId) -> PathBuf {
        let file_name = self
            .table_files
            .get(&id)
            .cloned()
            .unwrap_or_else(|| default_file_name(id));
        self.data_dir.join(file_name)
    }
}

/// Published WHO file name, e.g. `WHO-Boys-Length-for-age-Percentiles_LMS.csv`
fn default_file_name(id: TableId) -> String {
    let who = match id.sex {
        Sex::Male => "Boys",
        Sex::Female => "Girls",
    };
    let indicator = match id.indicator {
        Indicator::LengthForAge => "Length-for-age",
        Indicator::WeightForAge => "Weight-for-age",
        Indicator::WeightForLength => "Weight-for-length",
    };
    format!("WHO-{who}-{indicator}-Percentiles_LMS.csv")
}
