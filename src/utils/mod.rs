//! Utility modules shared across the crate.

pub mod arrow;
