//! Table configuration for the withholding engine.
//!
//! This module handles loading the persisted rate tables from JSON files
//! and providing typed, validated access to them.

mod loader;
mod types;

pub use loader::{TableLoader, DEFAULT_CONTRIBUTION_TABLE, DEFAULT_PROGRESSIVE_TABLE};
pub use types::{ContributionTable, Period, ProgressiveTable, TaxBracket};
