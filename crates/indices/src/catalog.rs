use serde::{Deserialize, Serialize};
use std::fmt;

/// The 7 fixed indicator categories, in panel order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorCategory {
    Profitability,
    Growth,
    CostStructure,
    Efficiency,
    Safety,
    CashFlow,
    Construction,
}

impl IndicatorCategory {
    pub const ALL: [IndicatorCategory; 7] = [
        IndicatorCategory::Profitability,
        IndicatorCategory::Growth,
        IndicatorCategory::CostStructure,
        IndicatorCategory::Efficiency,
        IndicatorCategory::Safety,
        IndicatorCategory::CashFlow,
        IndicatorCategory::Construction,
    ];

    /// The indicators that belong to this category, in field order.
    pub fn indicators(self) -> impl Iterator<Item = Indicator> {
        Indicator::ALL
            .into_iter()
            .filter(move |indicator| indicator.category() == self)
    }

    /// Whether any indicator in this category reads the preceding statement year.
    pub fn uses_previous_year(self) -> bool {
        matches!(
            self,
            IndicatorCategory::Growth
                | IndicatorCategory::Efficiency
                | IndicatorCategory::CashFlow
                | IndicatorCategory::Construction
        )
    }
}

/// How an indicator's value is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    /// A ratio multiplied by 100, rounded to 2 decimal places.
    Percent,
    /// A plain ratio, rounded to 2 decimal places.
    Ratio,
    /// A turnover period in days, rounded to 2 decimal places.
    Days,
    /// A raw currency amount, unrounded.
    Amount,
}

/// Every indicator in an `IndexPanel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    // Profitability
    GrossMargin,
    CostRatio,
    SgaRatio,
    OperatingMargin,
    OrdinaryMargin,
    NetMargin,
    Ebitda,
    // Growth
    RevenueGrowth,
    OperatingIncomeGrowth,
    OrdinaryIncomeGrowth,
    NetIncomeGrowth,
    // Cost structure
    PersonnelCostRatio,
    DepreciationRatio,
    ValueAdded,
    // Efficiency
    AssetTurnover,
    Roa,
    Roe,
    // Safety
    CurrentRatio,
    QuickRatio,
    EquityRatio,
    DebtToEquity,
    // Cash flow
    OperatingCfMargin,
    FreeCashFlow,
    OperatingCfToEbitda,
    CashChange,
    // Construction
    ConstructionWorkingCapital,
    NetWorkingCapital,
    ReceivableDays,
    PayableDays,
}

impl Indicator {
    pub const ALL: [Indicator; 29] = [
        Indicator::GrossMargin,
        Indicator::CostRatio,
        Indicator::SgaRatio,
        Indicator::OperatingMargin,
        Indicator::OrdinaryMargin,
        Indicator::NetMargin,
        Indicator::Ebitda,
        Indicator::RevenueGrowth,
        Indicator::OperatingIncomeGrowth,
        Indicator::OrdinaryIncomeGrowth,
        Indicator::NetIncomeGrowth,
        Indicator::PersonnelCostRatio,
        Indicator::DepreciationRatio,
        Indicator::ValueAdded,
        Indicator::AssetTurnover,
        Indicator::Roa,
        Indicator::Roe,
        Indicator::CurrentRatio,
        Indicator::QuickRatio,
        Indicator::EquityRatio,
        Indicator::DebtToEquity,
        Indicator::OperatingCfMargin,
        Indicator::FreeCashFlow,
        Indicator::OperatingCfToEbitda,
        Indicator::CashChange,
        Indicator::ConstructionWorkingCapital,
        Indicator::NetWorkingCapital,
        Indicator::ReceivableDays,
        Indicator::PayableDays,
    ];

    pub fn category(self) -> IndicatorCategory {
        use Indicator::*;
        match self {
            GrossMargin | CostRatio | SgaRatio | OperatingMargin | OrdinaryMargin | NetMargin
            | Ebitda => IndicatorCategory::Profitability,
            RevenueGrowth | OperatingIncomeGrowth | OrdinaryIncomeGrowth | NetIncomeGrowth => {
                IndicatorCategory::Growth
            }
            PersonnelCostRatio | DepreciationRatio | ValueAdded => IndicatorCategory::CostStructure,
            AssetTurnover | Roa | Roe => IndicatorCategory::Efficiency,
            CurrentRatio | QuickRatio | EquityRatio | DebtToEquity => IndicatorCategory::Safety,
            OperatingCfMargin | FreeCashFlow | OperatingCfToEbitda | CashChange => {
                IndicatorCategory::CashFlow
            }
            ConstructionWorkingCapital | NetWorkingCapital | ReceivableDays | PayableDays => {
                IndicatorCategory::Construction
            }
        }
    }

    pub fn unit(self) -> Unit {
        use Indicator::*;
        match self {
            Ebitda | ValueAdded | FreeCashFlow | CashChange | ConstructionWorkingCapital
            | NetWorkingCapital => Unit::Amount,
            AssetTurnover | DebtToEquity | OperatingCfToEbitda => Unit::Ratio,
            ReceivableDays | PayableDays => Unit::Days,
            _ => Unit::Percent,
        }
    }

    /// The snake_case key used for this indicator in the serialized panel.
    pub fn key(self) -> &'static str {
        use Indicator::*;
        match self {
            GrossMargin => "gross_margin",
            CostRatio => "cost_ratio",
            SgaRatio => "sga_ratio",
            OperatingMargin => "operating_margin",
            OrdinaryMargin => "ordinary_margin",
            NetMargin => "net_margin",
            Ebitda => "ebitda",
            RevenueGrowth => "revenue_growth",
            OperatingIncomeGrowth => "operating_income_growth",
            OrdinaryIncomeGrowth => "ordinary_income_growth",
            NetIncomeGrowth => "net_income_growth",
            PersonnelCostRatio => "personnel_cost_ratio",
            DepreciationRatio => "depreciation_ratio",
            ValueAdded => "value_added",
            AssetTurnover => "asset_turnover",
            Roa => "roa",
            Roe => "roe",
            CurrentRatio => "current_ratio",
            QuickRatio => "quick_ratio",
            EquityRatio => "equity_ratio",
            DebtToEquity => "debt_to_equity",
            OperatingCfMargin => "operating_cf_margin",
            FreeCashFlow => "free_cash_flow",
            OperatingCfToEbitda => "operating_cf_to_ebitda",
            CashChange => "cash_change",
            ConstructionWorkingCapital => "construction_working_capital",
            NetWorkingCapital => "net_working_capital",
            ReceivableDays => "receivable_days",
            PayableDays => "payable_days",
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_owns_at_least_one_indicator() {
        let total: usize = IndicatorCategory::ALL
            .iter()
            .map(|category| {
                let count = category.indicators().count();
                assert!(count > 0, "{category:?} is empty");
                count
            })
            .sum();
        assert_eq!(total, Indicator::ALL.len());
    }

    #[test]
    fn only_cross_year_categories_read_the_previous_year() {
        let cross_year: Vec<_> = IndicatorCategory::ALL
            .into_iter()
            .filter(|category| category.uses_previous_year())
            .collect();
        assert_eq!(
            cross_year,
            vec![
                IndicatorCategory::Growth,
                IndicatorCategory::Efficiency,
                IndicatorCategory::CashFlow,
                IndicatorCategory::Construction,
            ]
        );
    }

    #[test]
    fn keys_match_serde_names() {
        for indicator in Indicator::ALL {
            let json = serde_json::to_string(&indicator).unwrap();
            assert_eq!(json, format!("\"{}\"", indicator.key()));
        }
    }
}
