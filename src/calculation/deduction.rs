//! Deduction-method selection for the IRPF taxable base.
//!
//! From May 2023 onwards the taxpayer may use a simplified deduction instead
//! of the traditional one; the selection rule here reproduces the published
//! simulator's behavior exactly. Note that the rule compares the contribution
//! amount against the simplified cap, never the two candidates' resulting
//! tax, which can diverge from statutory intent for payers with many
//! dependents.

use rust_decimal::Decimal;

use crate::config::Period;
use crate::models::DeductionMethod;

/// Returns the fraction of the first bracket's upper bound that caps the
/// simplified deduction (25%).
pub fn simplified_cap_fraction() -> Decimal {
    Decimal::new(25, 2)
}

/// Returns the simplified-deduction cap for a period: 25% of the first
/// bracket's upper bound.
///
/// A well-formed table always has a bounded first bracket; `None` is only
/// possible for a malformed single-bracket period and disables the
/// simplified path entirely.
pub fn simplified_cap(period: &Period) -> Option<Decimal> {
    period
        .brackets
        .first()
        .and_then(|bracket| bracket.max)
        .map(|max| max * simplified_cap_fraction())
}

/// Computes the simplified deduction: the greater of the 25% cap and the
/// contribution amount.
pub fn simplified_deduction(period: &Period, inss: Decimal) -> Option<Decimal> {
    simplified_cap(period).map(|cap| cap.max(inss))
}

/// Computes the traditional deduction: the contribution amount plus a fixed
/// amount per declared dependent.
pub fn traditional_deduction(period: &Period, inss: Decimal, dependents: u32) -> Decimal {
    inss + Decimal::from(dependents) * period.per_dependent_deduction
}

/// Selects the deduction to subtract from gross income.
///
/// For reference periods from May 2023 onwards, the favorable regime
/// applies: the simplified deduction is selected whenever it does not exceed
/// the 25% cap (equivalently, whenever the contribution amount is at or
/// below the cap); otherwise the traditional deduction is selected. Earlier
/// periods always use the traditional deduction.
pub fn select_deduction(
    year: i32,
    month: u32,
    period: &Period,
    inss: Decimal,
    dependents: u32,
) -> (Decimal, DeductionMethod) {
    if year >= 2023 && month >= 5 {
        if let (Some(cap), Some(simplificada)) =
            (simplified_cap(period), simplified_deduction(period, inss))
        {
            if simplificada <= cap {
                return (simplificada, DeductionMethod::Simplificada);
            }
        }
    }
    (
        traditional_deduction(period, inss, dependents),
        DeductionMethod::Tradicional,
    )
}
