//! Panel assembly.
//!
//! Pairs every statement year with the entry before it and runs the seven category formulas
//! over the pair. Batches fan out over rayon, one company per task.

use crate::formulas;
use crate::panel::{CompanyIndexSeries, IndexPanel};
use rayon::prelude::*;
use statements::{CompanyStatements, StatementYear};

/// A stateless calculator that derives index panels from statement years.
#[derive(Debug, Default, Clone, Copy)]
pub struct IndexEngine {}

impl IndexEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main entry point: one panel per statement year, in input order.
    ///
    /// The "previous year" of each entry is the entry before it in `statements.years`. Labels
    /// are never parsed or re-sorted, so out-of-order input is computed exactly as given.
    pub fn compute(&self, statements: &CompanyStatements) -> CompanyIndexSeries {
        let years = &statements.years;
        if years.is_empty() {
            tracing::warn!(code = statements.code(), "Company has no statement years.");
        }

        let previous_years = std::iter::once(None).chain(years.iter().map(Some));
        let panels: Vec<IndexPanel> = years
            .iter()
            .zip(previous_years)
            .map(|(current, previous)| self.compute_panel(current, previous))
            .collect();

        tracing::debug!(
            code = statements.code(),
            years = panels.len(),
            absent = panels.iter().map(IndexPanel::absent_count).sum::<usize>(),
            "Computed index panels."
        );

        CompanyIndexSeries {
            company: statements.company.clone(),
            panels,
        }
    }

    /// Computes a single panel. `previous` is `None` for the first year of a series.
    pub fn compute_panel(
        &self,
        current: &StatementYear,
        previous: Option<&StatementYear>,
    ) -> IndexPanel {
        IndexPanel {
            year: current.year.clone(),
            profitability: formulas::profitability(current),
            growth: formulas::growth(current, previous),
            cost_structure: formulas::cost_structure(current),
            efficiency: formulas::efficiency(current, previous),
            safety: formulas::safety(current),
            cash_flow: formulas::cash_flow(current, previous),
            construction: formulas::construction(current, previous),
        }
    }

    /// Computes a batch of companies in parallel. Results keep the input order.
    pub fn compute_all(&self, companies: &[CompanyStatements]) -> Vec<CompanyIndexSeries> {
        self.compute_all_with(companies, |_| {})
    }

    /// Like `compute_all`, calling `on_complete` as each company finishes (in completion
    /// order, from worker threads). Used to drive progress reporting.
    pub fn compute_all_with<F>(
        &self,
        companies: &[CompanyStatements],
        on_complete: F,
    ) -> Vec<CompanyIndexSeries>
    where
        F: Fn(&CompanyIndexSeries) + Sync + Send,
    {
        companies
            .par_iter()
            .map(|company| {
                let series = self.compute(company);
                on_complete(&series);
                series
            })
            .collect()
    }
}
