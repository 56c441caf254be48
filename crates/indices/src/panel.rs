use crate::catalog::{Indicator, IndicatorCategory};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use statements::{CompanyInfo, FiscalYear};

/// 1. Profitability. Margins are percentages of revenue; EBITDA is a raw amount.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profitability {
    #[serde(with = "rust_decimal::serde::float_option")]
    pub gross_margin: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub cost_ratio: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub sga_ratio: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub operating_margin: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub ordinary_margin: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub net_margin: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub ebitda: Option<Decimal>,
}

/// 2. Year-over-year growth, in percent. All absent without a preceding year.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Growth {
    #[serde(with = "rust_decimal::serde::float_option")]
    pub revenue_growth: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub operating_income_growth: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub ordinary_income_growth: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub net_income_growth: Option<Decimal>,
}

/// 3. Cost structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostStructure {
    #[serde(with = "rust_decimal::serde::float_option")]
    pub personnel_cost_ratio: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub depreciation_ratio: Option<Decimal>,
    /// Gross profit minus personnel cost.
    #[serde(with = "rust_decimal::serde::float_option")]
    pub value_added: Option<Decimal>,
}

/// 4. Efficiency, on two-point average balances.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Efficiency {
    #[serde(with = "rust_decimal::serde::float_option")]
    pub asset_turnover: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub roa: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub roe: Option<Decimal>,
}

/// 5. Safety and solvency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Safety {
    #[serde(with = "rust_decimal::serde::float_option")]
    pub current_ratio: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub quick_ratio: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub equity_ratio: Option<Decimal>,
    /// Interest-bearing debt over net assets. Trade payables are not debt here.
    #[serde(with = "rust_decimal::serde::float_option")]
    pub debt_to_equity: Option<Decimal>,
}

/// 6. Cash-flow indicators.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CashFlowIndicators {
    #[serde(with = "rust_decimal::serde::float_option")]
    pub operating_cf_margin: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub free_cash_flow: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub operating_cf_to_ebitda: Option<Decimal>,
    /// Change in ending cash since the preceding year.
    #[serde(with = "rust_decimal::serde::float_option")]
    pub cash_change: Option<Decimal>,
}

/// 7. Construction-industry working-capital indicators.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstructionIndicators {
    #[serde(with = "rust_decimal::serde::float_option")]
    pub construction_working_capital: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub net_working_capital: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub receivable_days: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub payable_days: Option<Decimal>,
}

/// The complete set of indicators for one company in one fiscal year.
///
/// Every category is always present; an unresolvable category is all `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexPanel {
    pub year: Option<FiscalYear>,
    pub profitability: Profitability,
    pub growth: Growth,
    pub cost_structure: CostStructure,
    pub efficiency: Efficiency,
    pub safety: Safety,
    pub cash_flow: CashFlowIndicators,
    pub construction: ConstructionIndicators,
}

impl IndexPanel {
    /// Reads a single indicator.
    pub fn get(&self, indicator: Indicator) -> Option<Decimal> {
        use Indicator::*;
        match indicator {
            GrossMargin => self.profitability.gross_margin,
            CostRatio => self.profitability.cost_ratio,
            SgaRatio => self.profitability.sga_ratio,
            OperatingMargin => self.profitability.operating_margin,
            OrdinaryMargin => self.profitability.ordinary_margin,
            NetMargin => self.profitability.net_margin,
            Ebitda => self.profitability.ebitda,
            RevenueGrowth => self.growth.revenue_growth,
            OperatingIncomeGrowth => self.growth.operating_income_growth,
            OrdinaryIncomeGrowth => self.growth.ordinary_income_growth,
            NetIncomeGrowth => self.growth.net_income_growth,
            PersonnelCostRatio => self.cost_structure.personnel_cost_ratio,
            DepreciationRatio => self.cost_structure.depreciation_ratio,
            ValueAdded => self.cost_structure.value_added,
            AssetTurnover => self.efficiency.asset_turnover,
            Roa => self.efficiency.roa,
            Roe => self.efficiency.roe,
            CurrentRatio => self.safety.current_ratio,
            QuickRatio => self.safety.quick_ratio,
            EquityRatio => self.safety.equity_ratio,
            DebtToEquity => self.safety.debt_to_equity,
            OperatingCfMargin => self.cash_flow.operating_cf_margin,
            FreeCashFlow => self.cash_flow.free_cash_flow,
            OperatingCfToEbitda => self.cash_flow.operating_cf_to_ebitda,
            CashChange => self.cash_flow.cash_change,
            ConstructionWorkingCapital => self.construction.construction_working_capital,
            NetWorkingCapital => self.construction.net_working_capital,
            ReceivableDays => self.construction.receivable_days,
            PayableDays => self.construction.payable_days,
        }
    }

    /// All indicators with their values, in catalogue order.
    pub fn values(&self) -> impl Iterator<Item = (Indicator, Option<Decimal>)> + '_ {
        Indicator::ALL
            .into_iter()
            .map(move |indicator| (indicator, self.get(indicator)))
    }

    /// The indicators of one category, in field order.
    pub fn category_values(
        &self,
        category: IndicatorCategory,
    ) -> impl Iterator<Item = (Indicator, Option<Decimal>)> + '_ {
        category
            .indicators()
            .map(move |indicator| (indicator, self.get(indicator)))
    }

    /// How many indicators could not be resolved for this year.
    pub fn absent_count(&self) -> usize {
        self.values().filter(|(_, value)| value.is_none()).count()
    }
}

/// A company's info plus one panel per statement year, in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyIndexSeries {
    pub company: CompanyInfo,
    pub panels: Vec<IndexPanel>,
}

impl CompanyIndexSeries {
    /// Finds the panel for a fiscal-year label.
    pub fn panel(&self, year: &str) -> Option<&IndexPanel> {
        self.panels
            .iter()
            .find(|panel| panel.year.as_ref().is_some_and(|y| y.as_str() == year))
    }
}
