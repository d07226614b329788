//! Typed representations of the persisted rate tables.
//!
//! This module contains the strongly-typed table structures that are
//! deserialized from the JSON table files. Field names follow the engine's
//! conventions; the wire format keeps the statutory Portuguese names.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

use crate::error::{TaxError, TaxResult};

/// The contribution (INSS) table.
///
/// Maps a reference year to the maximum-base ceilings published for that
/// year, keyed by contribution rate. Rate keys are `Decimal`, whose equality
/// and hashing are value-based, so a table authored with `"0.20"` resolves a
/// lookup for `0.2` (and vice versa) without any string canonicalization.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct ContributionTable {
    years: HashMap<i32, HashMap<Decimal, Decimal>>,
}

impl ContributionTable {
    /// Resolves the maximum-base ceiling for a (year, rate) pair.
    ///
    /// Absence of either key is a configuration error, never a zero result:
    /// a queried pair that is missing from the table means the table needs
    /// fixing, not that the contribution is free.
    pub fn ceiling_for(&self, year: i32, rate: Decimal) -> TaxResult<Decimal> {
        let rates = self
            .years
            .get(&year)
            .ok_or(TaxError::YearNotFound { year, table: "inss" })?;
        rates
            .get(&rate)
            .copied()
            .ok_or(TaxError::RateNotFound { year, rate })
    }

    /// Returns the years covered by this table.
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.years.keys().copied()
    }
}

/// A single bracket of the progressive (IRPF) table.
///
/// Both bounds are inclusive; `max` is `None` for the unbounded top bracket.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TaxBracket {
    /// Inclusive lower bound of the bracket.
    pub min: Decimal,
    /// Inclusive upper bound, or `None` for the top bracket.
    pub max: Option<Decimal>,
    /// Marginal rate applied to the whole base when this bracket matches.
    #[serde(rename = "aliquota")]
    pub rate: Decimal,
    /// Fixed subtrahend applied when this bracket is selected.
    #[serde(rename = "deducao")]
    pub deduction: Decimal,
}

impl TaxBracket {
    /// Returns true if `base` falls inside this bracket.
    pub fn contains(&self, base: Decimal) -> bool {
        base >= self.min && self.max.is_none_or(|max| base <= max)
    }
}

/// A month range within a tax year over which one bracket table and one
/// per-dependent deduction constant apply.
#[derive(Debug, Clone, Deserialize)]
pub struct Period {
    /// First month (1-12) this period applies to.
    #[serde(rename = "mes_inicio")]
    pub month_start: u32,
    /// Last month this period applies to, or `None` for "through December".
    #[serde(rename = "mes_fim")]
    pub month_end: Option<u32>,
    /// Fixed deduction per declared dependent.
    #[serde(rename = "deducao_por_dependente")]
    pub per_dependent_deduction: Decimal,
    /// Brackets in ascending order of `min`; the last has unbounded `max`.
    #[serde(rename = "aliquotas")]
    pub brackets: Vec<TaxBracket>,
}

impl Period {
    /// Returns true if the reference month falls inside this period.
    pub fn contains_month(&self, month: u32) -> bool {
        month >= self.month_start && self.month_end.is_none_or(|end| month <= end)
    }
}

/// The progressive (IRPF) table: reference year to its ordered period list.
///
/// No overlap or gap validation is performed on the periods; resolution is
/// first-match in table order.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct ProgressiveTable {
    years: HashMap<i32, Vec<Period>>,
}

impl ProgressiveTable {
    /// Returns the ordered period list for a reference year.
    pub fn periods_for(&self, year: i32) -> TaxResult<&[Period]> {
        self.years
            .get(&year)
            .map(Vec::as_slice)
            .ok_or(TaxError::YearNotFound { year, table: "irpf" })
    }

    /// Returns the years covered by this table.
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.years.keys().copied()
    }
}
