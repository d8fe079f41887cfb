//! Core trait definitions
//!
//! Table persistence sits behind a trait so the ranking pipeline does not
//! depend on a particular file format.

use crate::core::data::Table;
use crate::utils::error::AppResult;
use std::path::Path;

/// Storage operations for tabular decision data
///
/// This trait defines the interface for loading an input table and saving
/// the ranked result table.
pub trait TableStorage {
    /// Load a table with a header row
    fn read_table(&self, path: &Path) -> AppResult<Table>;

    /// Save a table, header row first
    fn write_table(&self, path: &Path, table: &Table) -> AppResult<()>;
}
