//! Arrow data handling utilities
//!
//! Helpers for locating columns in CSV-derived record batches and converting
//! them to numeric arrays.

pub mod extractors;

pub use extractors::{dense_values, extract_float64, find_column_index, normalize_header};
