//! Core data models for the withholding engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The deduction method selected when computing the IRPF taxable base.
///
/// The serialized form uses the statutory Portuguese tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeductionMethod {
    /// Fixed-percentage deduction capped at 25% of the first bracket's
    /// upper bound (the 2023 reform's "desconto simplificado").
    Simplificada,
    /// Contribution amount plus a fixed amount per declared dependent.
    Tradicional,
}

impl DeductionMethod {
    /// Returns the statutory tag for this method.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeductionMethod::Simplificada => "simplificada",
            DeductionMethod::Tradicional => "tradicional",
        }
    }
}

impl fmt::Display for DeductionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The result of an IRPF taxable-base computation.
///
/// Carries the method alongside the base so callers never have to query the
/// calculator for which deduction was applied after the fact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TaxableBase {
    /// The computed taxable base, clamped at zero.
    pub base: Decimal,
    /// The deduction method that produced it.
    pub method: DeductionMethod,
}
