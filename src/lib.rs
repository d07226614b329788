//! Brazilian payroll withholding engine.
//!
//! This crate computes two payroll withholdings driven by year/month-keyed
//! rate tables: the capped social-security contribution (INSS) and the
//! progressive income tax (IRPF), including the post-May-2023 choice between
//! the simplified and traditional deductions.
//!
//! Reference simulator: <https://www27.receita.fazenda.gov.br/simulador-irpf/>
//! Table source: <https://www.gov.br/receitafederal/pt-br/assuntos/meu-imposto-de-renda/tabelas>

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
