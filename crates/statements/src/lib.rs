//! # Finpanel Statement Model
//!
//! This crate defines the structured financial-statement records that the rest of the
//! workspace computes on: one `CompanyInfo` per company and an ordered sequence of
//! `StatementYear`s, each holding an income statement, a balance sheet and a cash-flow
//! statement.
//!
//! ## Architectural Principles
//!
//! - **Layer 0 Types:** This crate has no knowledge of indicators, files or configuration.
//!   Every other crate depends on it.
//! - **Absent Is Not Zero:** Every statement cell is an `Option<Decimal>`. Missing keys,
//!   `null`, unparsable text and zero-valued cells all become `None` at the deserialization
//!   boundary (see `cell`), so no formula can mistake an unreported line for a reported zero.
//! - **Typed Accessors:** Formulas never navigate the statement tree by hand. They ask for a
//!   `Field` and get back a plain `Option<Decimal>`.
//!
//! ## Public API
//!
//! - `CompanyStatements`: one company's info plus its ordered statement years.
//! - `StatementYear` / `FiscalYear`: a single fiscal year and its opaque label.
//! - `IncomeStatement`, `BalanceSheet`, `CashFlowStatement`: the three statements.
//! - `Field`: the closed catalogue of line items the indicator formulas read.

// Declare the modules that constitute this crate.
pub mod balance;
pub mod cash_flow;
pub mod cell;
pub mod company;
pub mod fields;
pub mod income;
pub mod year;

// Re-export the core types to provide a clean public API.
pub use balance::{Assets, BalanceSheet, FixedAssets, Liabilities};
pub use cash_flow::CashFlowStatement;
pub use company::{CompanyInfo, CompanyStatements};
pub use fields::Field;
pub use income::IncomeStatement;
pub use year::{FiscalYear, StatementYear};

use serde::{Deserialize, Serialize};

/// A statement group: a reported total plus a typed breakdown of its line items.
///
/// The total is taken as reported. It is never recomputed from the breakdown, since
/// source breakdowns are routinely partial.
///
/// Upstream loader documents spell the two keys `合計` and `内訳`; both spellings are read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "B: Deserialize<'de> + Default"))]
pub struct LineGroup<B> {
    #[serde(with = "cell", alias = "合計")]
    pub total: Option<rust_decimal::Decimal>,
    #[serde(alias = "内訳")]
    pub breakdown: B,
}
