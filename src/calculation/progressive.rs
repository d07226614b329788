//! Progressive tax (IRPF) calculation functionality.
//!
//! This module provides the [`ProgressiveCalculator`], which resolves the
//! bracket table for a (year, month) reference, computes the taxable base
//! via deduction-method selection, and applies the bracket formula.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::{Period, ProgressiveTable, TaxBracket};
use crate::error::{TaxError, TaxResult};
use crate::models::{DeductionMethod, TaxableBase};

use super::deduction::select_deduction;

/// Computes the progressive income-tax withholding for a reference
/// year/month.
///
/// The matching period is resolved eagerly at construction: the first period
/// in table order whose month interval contains the reference month wins.
/// After construction the bracket list and per-dependent constant are fixed.
///
/// # Example
///
/// ```no_run
/// use impostos_engine::calculation::ProgressiveCalculator;
/// use impostos_engine::config::TableLoader;
/// use rust_decimal::Decimal;
///
/// let table = TableLoader::load_progressive_table(None)?;
/// let mut irpf = ProgressiveCalculator::new(2023, 6, &table)?;
///
/// let inss = Decimal::new(20000, 2);
/// let result = irpf.taxable_base(Decimal::new(300000, 2), inss, 0);
/// let tax = irpf.calculate(result.base, 0)?;
/// # Ok::<(), impostos_engine::error::TaxError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ProgressiveCalculator {
    year: i32,
    month: u32,
    period: Period,
    last_method: Option<DeductionMethod>,
}

impl ProgressiveCalculator {
    /// Creates a calculator for a reference year and month (1-12).
    ///
    /// # Errors
    ///
    /// Returns `YearNotFound` if the year is absent from the table and
    /// `PeriodNotFound` if no period's month interval contains the month.
    /// Both signal a table authoring gap rather than a user input error.
    pub fn new(year: i32, month: u32, table: &ProgressiveTable) -> TaxResult<Self> {
        let periods = table.periods_for(year)?;
        let period = periods
            .iter()
            .find(|p| p.contains_month(month))
            .ok_or(TaxError::PeriodNotFound { year, month })?
            .clone();
        debug!(
            year,
            month,
            month_start = period.month_start,
            "resolved progressive period"
        );
        Ok(Self {
            year,
            month,
            period,
            last_method: None,
        })
    }

    /// Finds the bracket for a taxable base.
    ///
    /// Negative bases are clamped to zero before the scan. Brackets are
    /// matched first-to-last, so a base equal to a shared bound resolves to
    /// the lower bracket.
    ///
    /// # Errors
    ///
    /// Returns `BracketNotFound` if no bracket matches, which indicates a
    /// gap in the bracket table: a well-formed table covers `[0, ∞)`.
    pub fn bracket_for(&self, base: Decimal) -> TaxResult<&TaxBracket> {
        let base = base.max(Decimal::ZERO);
        self.period
            .brackets
            .iter()
            .find(|bracket| bracket.contains(base))
            .ok_or(TaxError::BracketNotFound { base })
    }

    /// Computes the taxable base from gross income.
    ///
    /// The deduction is selected per the favorable-regime rule (see
    /// [`super::select_deduction`]) and subtracted from `gross`; the result
    /// is clamped at zero. The selected method travels with the returned
    /// [`TaxableBase`], and is also recorded for
    /// [`Self::last_deduction_method`].
    pub fn taxable_base(&mut self, gross: Decimal, inss: Decimal, dependents: u32) -> TaxableBase {
        let (deduction, method) =
            select_deduction(self.year, self.month, &self.period, inss, dependents);
        self.last_method = Some(method);
        TaxableBase {
            base: (gross - deduction).max(Decimal::ZERO),
            method,
        }
    }

    /// Computes the tax owed for a taxable base.
    ///
    /// Applies the resolved bracket's formula: `base * rate - deduction`.
    /// `_dependents` is accepted for interface compatibility but does not
    /// enter the formula; the dependent count only affects the earlier
    /// base-reduction step.
    pub fn calculate(&self, base: Decimal, _dependents: u32) -> TaxResult<Decimal> {
        let bracket = self.bracket_for(base)?;
        Ok(base * bracket.rate - bracket.deduction)
    }

    /// The deduction method selected by the most recent
    /// [`Self::taxable_base`] call, or `None` before any call.
    pub fn last_deduction_method(&self) -> Option<DeductionMethod> {
        self.last_method
    }

    /// The reference year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The reference month.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The resolved period for this year/month.
    pub fn period(&self) -> &Period {
        &self.period
    }
}
