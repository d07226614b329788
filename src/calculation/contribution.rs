//! Contribution (INSS) calculation functionality.
//!
//! This module provides the [`ContributionCalculator`], which computes the
//! capped social-security contribution for a gross base. The (year, rate)
//! pair is resolved against the contribution table at construction time, so
//! the calculation itself can never fail.

use chrono::{Datelike, Local};
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::ContributionTable;
use crate::error::TaxResult;

/// Returns the default contribution rate (20%), used when the caller does
/// not specify one.
pub fn default_contribution_rate() -> Decimal {
    Decimal::new(20, 2)
}

/// Computes the capped contribution for a reference year and rate.
///
/// The calculator resolves the maximum-base ceiling for its (year, rate)
/// pair eagerly at construction and is then immutable; [`Self::calculate`]
/// is a pure function of the gross base.
///
/// # Example
///
/// ```no_run
/// use impostos_engine::calculation::ContributionCalculator;
/// use impostos_engine::config::TableLoader;
/// use rust_decimal::Decimal;
///
/// let table = TableLoader::load_contribution_table(None)?;
/// let inss = ContributionCalculator::new(Some(2023), Decimal::new(20, 2), &table)?;
/// assert_eq!(inss.calculate(Decimal::from(1000)), Decimal::from(200));
/// # Ok::<(), impostos_engine::error::TaxError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ContributionCalculator {
    year: i32,
    rate: Decimal,
    ceiling: Decimal,
}

impl ContributionCalculator {
    /// Creates a calculator for a reference year and contribution rate.
    ///
    /// # Arguments
    ///
    /// * `year` - Reference year, or `None` for the current calendar year
    /// * `rate` - Contribution rate as a decimal fraction (e.g. 0.20)
    /// * `table` - The contribution table to resolve the ceiling from
    ///
    /// # Errors
    ///
    /// Returns `YearNotFound` if the year is absent from the table and
    /// `RateNotFound` if the rate is absent for that year. Both indicate a
    /// table authoring problem, surfaced here so `calculate` stays
    /// infallible.
    pub fn new(year: Option<i32>, rate: Decimal, table: &ContributionTable) -> TaxResult<Self> {
        let year = year.unwrap_or_else(|| Local::now().year());
        let ceiling = table.ceiling_for(year, rate)?;
        debug!(year, %rate, %ceiling, "resolved contribution ceiling");
        Ok(Self { year, rate, ceiling })
    }

    /// Creates a calculator with the default 20% rate.
    pub fn with_default_rate(year: Option<i32>, table: &ContributionTable) -> TaxResult<Self> {
        Self::new(year, default_contribution_rate(), table)
    }

    /// Computes the contribution for a gross base.
    ///
    /// Non-positive bases contribute nothing. Bases above the ceiling are
    /// capped at `ceiling * rate`; the capped and uncapped paths diverge
    /// exactly at the ceiling, with no internal rounding. Rounding to cents
    /// is the caller's concern.
    pub fn calculate(&self, base: Decimal) -> Decimal {
        if base <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        if base > self.ceiling {
            return self.ceiling * self.rate;
        }
        base * self.rate
    }

    /// The resolved reference year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The contribution rate.
    pub fn rate(&self) -> Decimal {
        self.rate
    }

    /// The maximum-base ceiling resolved from the table.
    pub fn ceiling(&self) -> Decimal {
        self.ceiling
    }
}
