//! # Finpanel Index Engine
//!
//! This crate turns one company's ordered statement years into an ordered sequence of
//! index panels: 29 derived ratios and amounts, grouped into 7 fixed categories.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of files, configuration
//!   or logging setup. It depends only on `statements` (Layer 0).
//! - **Stateless Calculation:** The `IndexEngine` takes statement years as input and produces a
//!   `CompanyIndexSeries` as output. Identical input always yields identical output, and
//!   companies can be computed concurrently in any order.
//! - **Absent, Never Zero:** All arithmetic goes through `arith`. A missing operand or a zero
//!   denominator makes exactly that indicator `None`; nothing in this crate returns an error
//!   or panics on sparse data.
//!
//! ## Public API
//!
//! - `IndexEngine`: assembles panels for a company (or a whole batch, in parallel).
//! - `IndexPanel` and its category structs (`Profitability`, `Growth`, ...).
//! - `CompanyIndexSeries`: company info plus its panels, in input order.
//! - `Indicator`, `IndicatorCategory`, `Unit`: the closed indicator catalogue.

// Declare the modules that constitute this crate.
pub mod arith;
pub mod catalog;
pub mod engine;
pub mod formulas;
pub mod panel;

// Re-export the key components to create a clean, public-facing API.
pub use catalog::{Indicator, IndicatorCategory, Unit};
pub use engine::IndexEngine;
pub use panel::{
    CashFlowIndicators, CompanyIndexSeries, ConstructionIndicators, CostStructure, Efficiency,
    Growth, IndexPanel, Profitability, Safety,
};
