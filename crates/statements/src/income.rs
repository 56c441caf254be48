use crate::{cell, LineGroup};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The income statement (P&L) for one fiscal year.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IncomeStatement {
    #[serde(alias = "売上高")]
    pub revenue: LineGroup<RevenueBreakdown>,
    #[serde(alias = "売上原価")]
    pub cost_of_sales: LineGroup<CostOfSalesBreakdown>,
    #[serde(alias = "売上総利益")]
    pub gross_profit: LineGroup<GrossProfitBreakdown>,
    /// Selling, general and administrative expenses.
    #[serde(alias = "販売費及び一般管理費")]
    pub sga: LineGroup<SgaBreakdown>,

    #[serde(with = "cell", alias = "営業利益")]
    pub operating_income: Option<Decimal>,
    #[serde(with = "cell", alias = "営業外収益")]
    pub non_operating_income: Option<Decimal>,
    #[serde(with = "cell", alias = "営業外費用")]
    pub non_operating_expenses: Option<Decimal>,
    /// Operating income plus non-operating items (the Japanese GAAP "keijo rieki").
    #[serde(with = "cell", alias = "経常利益")]
    pub ordinary_income: Option<Decimal>,
    #[serde(with = "cell", alias = "特別利益")]
    pub extraordinary_income: Option<Decimal>,
    #[serde(with = "cell", alias = "特別損失")]
    pub extraordinary_loss: Option<Decimal>,
    #[serde(with = "cell", alias = "税金等調整前当期純利益")]
    pub income_before_taxes: Option<Decimal>,
    #[serde(with = "cell", alias = "法人税等")]
    pub income_taxes: Option<Decimal>,
    #[serde(with = "cell", alias = "当期純利益")]
    pub net_income: Option<Decimal>,
    #[serde(with = "cell", alias = "その他・未分類")]
    pub other_unclassified: Option<Decimal>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevenueBreakdown {
    #[serde(with = "cell", alias = "売上高_完成工事高")]
    pub completed_construction: Option<Decimal>,
    #[serde(with = "cell", alias = "売上高_商品売上高")]
    pub merchandise: Option<Decimal>,
    #[serde(with = "cell", alias = "売上高_不動産事業売上高")]
    pub real_estate: Option<Decimal>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostOfSalesBreakdown {
    #[serde(with = "cell", alias = "売上原価_完成工事原価")]
    pub completed_construction: Option<Decimal>,
    #[serde(with = "cell", alias = "売上原価_商品売上原価")]
    pub merchandise: Option<Decimal>,
    #[serde(with = "cell", alias = "売上原価_不動産事業売上原価")]
    pub real_estate: Option<Decimal>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrossProfitBreakdown {
    #[serde(with = "cell", alias = "売上総利益_完成工事総利益")]
    pub completed_construction: Option<Decimal>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SgaBreakdown {
    #[serde(with = "cell", alias = "販売費及び一般管理費_人件費")]
    pub personnel: Option<Decimal>,
    #[serde(with = "cell", alias = "販売費及び一般管理費_広告宣伝費")]
    pub advertising: Option<Decimal>,
    #[serde(with = "cell", alias = "販売費及び一般管理費_研究開発費")]
    pub research_and_development: Option<Decimal>,
    #[serde(with = "cell", alias = "販売費及び一般管理費_減価償却費")]
    pub depreciation: Option<Decimal>,
    #[serde(with = "cell", alias = "販売費及び一般管理費_賃借料")]
    pub rent: Option<Decimal>,
    #[serde(with = "cell", alias = "販売費及び一般管理費_租税公課")]
    pub taxes_and_dues: Option<Decimal>,
    #[serde(with = "cell", alias = "販売費及び一般管理費_その他")]
    pub other: Option<Decimal>,
}
