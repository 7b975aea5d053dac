//! WHO LMS reference tables: row model, CSV loader and the in-memory store.

pub mod loader;
pub mod store;
pub mod table;

pub use loader::load_table;
pub use store::ReferenceStore;
pub use table::{LmsRow, ReferenceTable, TableId};
