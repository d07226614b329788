//! Error types for the withholding engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during table loading and
//! withholding calculation.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the withholding engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use impostos_engine::error::TaxError;
///
/// let error = TaxError::TableNotFound {
///     path: "/missing/inss.json".to_string(),
/// };
/// assert_eq!(error.to_string(), "Table file not found: /missing/inss.json");
/// ```
#[derive(Debug, Error)]
pub enum TaxError {
    /// Table file was not found at the specified path.
    #[error("Table file not found: {path}")]
    TableNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Table file could not be parsed.
    #[error("Failed to parse table file '{path}': {message}")]
    TableParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Reference year was not found in the table.
    #[error("Year {year} not found in the {table} table")]
    YearNotFound {
        /// The reference year that was requested.
        year: i32,
        /// The logical table identifier ("inss" or "irpf").
        table: &'static str,
    },

    /// Contribution rate was not found for the given year.
    #[error("Contribution rate {rate} not found for year {year} in the inss table")]
    RateNotFound {
        /// The reference year.
        year: i32,
        /// The contribution rate that was requested.
        rate: Decimal,
    },

    /// No period in the progressive table covers the reference month.
    #[error("No period covers month {month} of year {year} in the irpf table")]
    PeriodNotFound {
        /// The reference year.
        year: i32,
        /// The reference month (1-12).
        month: u32,
    },

    /// No bracket in the resolved period matches the given base.
    #[error("No bracket matches base {base} in the resolved progressive table")]
    BracketNotFound {
        /// The taxable base that failed to match.
        base: Decimal,
    },
}

/// A type alias for Results that return TaxError.
pub type TaxResult<T> = Result<T, TaxError>;
