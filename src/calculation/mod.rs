//! Calculation logic for the withholding engine.
//!
//! This module contains the two calculators: the capped contribution levy
//! (INSS) and the progressive income tax (IRPF), plus the deduction-method
//! selection the latter is built on. The calculators share no state; the
//! usual flow is to compute the contribution first and feed it into the
//! progressive calculator's base-reduction step.

mod contribution;
mod deduction;
mod progressive;

pub use contribution::{default_contribution_rate, ContributionCalculator};
pub use deduction::{
    select_deduction, simplified_cap, simplified_cap_fraction, simplified_deduction,
    traditional_deduction,
};
pub use progressive::ProgressiveCalculator;
