//! Table loading functionality.
//!
//! This module provides the [`TableLoader`] type for loading the persisted
//! rate tables from JSON files.

use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{TaxError, TaxResult};

use super::types::{ContributionTable, ProgressiveTable};

/// Default location of the bundled contribution (INSS) reference table.
pub const DEFAULT_CONTRIBUTION_TABLE: &str = "tables/inss.json";

/// Default location of the bundled progressive (IRPF) reference table.
pub const DEFAULT_PROGRESSIVE_TABLE: &str = "tables/irpf.json";

/// Loads the persisted rate tables.
///
/// The `TableLoader` reads JSON table files and decodes them into the typed
/// structures of [`crate::config`]. Callers may pass an alternate source path
/// for testing or jurisdictional updates; `None` selects the bundled
/// reference table.
///
/// # Example
///
/// ```no_run
/// use impostos_engine::config::TableLoader;
///
/// let inss = TableLoader::load_contribution_table(None)?;
/// let irpf = TableLoader::load_progressive_table(None)?;
/// # Ok::<(), impostos_engine::error::TaxError>(())
/// ```
#[derive(Debug)]
pub struct TableLoader;

impl TableLoader {
    /// Loads the contribution (INSS) table.
    ///
    /// # Arguments
    ///
    /// * `path` - Alternate table file, or `None` for the bundled default
    ///
    /// # Errors
    ///
    /// Returns `TableNotFound` if the file is missing and `TableParseError`
    /// if its content is not a well-formed table document.
    pub fn load_contribution_table(path: Option<&Path>) -> TaxResult<ContributionTable> {
        let path = path.unwrap_or(Path::new(DEFAULT_CONTRIBUTION_TABLE));
        let table = Self::load_json::<ContributionTable>(path)?;
        debug!(path = %path.display(), "loaded contribution table");
        Ok(table)
    }

    /// Loads the progressive (IRPF) table.
    ///
    /// # Arguments
    ///
    /// * `path` - Alternate table file, or `None` for the bundled default
    ///
    /// # Errors
    ///
    /// Returns `TableNotFound` if the file is missing and `TableParseError`
    /// if its content is not a well-formed table document.
    pub fn load_progressive_table(path: Option<&Path>) -> TaxResult<ProgressiveTable> {
        let path = path.unwrap_or(Path::new(DEFAULT_PROGRESSIVE_TABLE));
        let table = Self::load_json::<ProgressiveTable>(path)?;
        debug!(path = %path.display(), "loaded progressive table");
        Ok(table)
    }

    /// Loads and parses a JSON table file.
    fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> TaxResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| TaxError::TableNotFound {
            path: path_str.clone(),
        })?;

        serde_json::from_str(&content).map_err(|e| TaxError::TableParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}
