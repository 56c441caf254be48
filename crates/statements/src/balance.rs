use crate::{cell, LineGroup};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The balance sheet at fiscal year end.
///
/// Deserializes from the flat layout (`assets`, `liabilities`, `net_assets`) and from the
/// upstream loader's layout, which nests liabilities and net assets under `負債・純資産`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "BalanceSheetSource")]
pub struct BalanceSheet {
    pub assets: Assets,
    pub liabilities: Liabilities,
    pub net_assets: LineGroup<NetAssetsBreakdown>,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct BalanceSheetSource {
    #[serde(alias = "資産")]
    assets: Assets,
    liabilities: Option<Liabilities>,
    net_assets: Option<LineGroup<NetAssetsBreakdown>>,
    #[serde(rename = "負債・純資産")]
    liabilities_and_net_assets: Option<LiabilitiesAndNetAssetsSource>,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct LiabilitiesAndNetAssetsSource {
    #[serde(rename = "負債")]
    liabilities: Option<Liabilities>,
    #[serde(rename = "純資産")]
    net_assets: Option<LineGroup<NetAssetsBreakdown>>,
}

impl From<BalanceSheetSource> for BalanceSheet {
    fn from(source: BalanceSheetSource) -> Self {
        let nested = source.liabilities_and_net_assets.unwrap_or_default();
        Self {
            assets: source.assets,
            liabilities: source.liabilities.or(nested.liabilities).unwrap_or_default(),
            net_assets: source.net_assets.or(nested.net_assets).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Assets {
    #[serde(alias = "流動資産")]
    pub current_assets: LineGroup<CurrentAssetsBreakdown>,
    #[serde(alias = "固定資産")]
    pub fixed_assets: FixedAssets,
    #[serde(with = "cell", alias = "総資産")]
    pub total_assets: Option<Decimal>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrentAssetsBreakdown {
    #[serde(with = "cell", alias = "流動資産_現金及び預金")]
    pub cash_and_deposits: Option<Decimal>,
    #[serde(with = "cell", alias = "流動資産_短期有価証券")]
    pub short_term_securities: Option<Decimal>,
    #[serde(with = "cell", alias = "流動資産_受取手形及び売掛金")]
    pub notes_and_accounts_receivable: Option<Decimal>,
    /// Receivables on completed construction contracts.
    #[serde(with = "cell", alias = "流動資産_完成工事未収入金")]
    pub construction_receivables: Option<Decimal>,
    /// Costs on uncompleted construction contracts.
    #[serde(with = "cell", alias = "流動資産_未成工事支出金")]
    pub work_in_progress: Option<Decimal>,
    #[serde(with = "cell", alias = "流動資産_商品及び製品")]
    pub merchandise_and_products: Option<Decimal>,
    #[serde(with = "cell", alias = "流動資産_原材料及び貯蔵品")]
    pub raw_materials_and_supplies: Option<Decimal>,
    #[serde(with = "cell", alias = "流動資産_販売用不動産")]
    pub real_estate_for_sale: Option<Decimal>,
    /// Usually reported as a negative amount.
    #[serde(with = "cell", alias = "流動資産_貸倒引当金")]
    pub allowance_for_doubtful_accounts: Option<Decimal>,
}

/// Fixed assets. Upstream documents wrap the three sub-groups in a `合計`/`内訳` group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "FixedAssetsSource")]
pub struct FixedAssets {
    #[serde(with = "cell")]
    pub total: Option<Decimal>,
    pub tangible: LineGroup<TangibleAssetsBreakdown>,
    pub intangible: LineGroup<IntangibleAssetsBreakdown>,
    pub investments: LineGroup<InvestmentsBreakdown>,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct FixedAssetsSource {
    #[serde(with = "cell", alias = "合計")]
    total: Option<Decimal>,
    tangible: Option<LineGroup<TangibleAssetsBreakdown>>,
    intangible: Option<LineGroup<IntangibleAssetsBreakdown>>,
    investments: Option<LineGroup<InvestmentsBreakdown>>,
    #[serde(rename = "内訳")]
    breakdown: Option<FixedAssetsBreakdownSource>,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct FixedAssetsBreakdownSource {
    #[serde(rename = "有形固定資産")]
    tangible: Option<LineGroup<TangibleAssetsBreakdown>>,
    #[serde(rename = "無形固定資産")]
    intangible: Option<LineGroup<IntangibleAssetsBreakdown>>,
    #[serde(rename = "投資その他の資産")]
    investments: Option<LineGroup<InvestmentsBreakdown>>,
}

impl From<FixedAssetsSource> for FixedAssets {
    fn from(source: FixedAssetsSource) -> Self {
        let nested = source.breakdown.unwrap_or_default();
        Self {
            total: source.total,
            tangible: source.tangible.or(nested.tangible).unwrap_or_default(),
            intangible: source.intangible.or(nested.intangible).unwrap_or_default(),
            investments: source.investments.or(nested.investments).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TangibleAssetsBreakdown {
    #[serde(with = "cell", alias = "有形固定資産_建物及び構築物")]
    pub buildings_and_structures: Option<Decimal>,
    #[serde(with = "cell", alias = "有形固定資産_機械装置及び車両運搬具")]
    pub machinery_and_vehicles: Option<Decimal>,
    #[serde(with = "cell", alias = "有形固定資産_工具器具及び備品")]
    pub tools_and_equipment: Option<Decimal>,
    #[serde(with = "cell", alias = "有形固定資産_土地")]
    pub land: Option<Decimal>,
    #[serde(with = "cell", alias = "有形固定資産_リース資産")]
    pub lease_assets: Option<Decimal>,
    #[serde(with = "cell", alias = "有形固定資産_建設仮勘定")]
    pub construction_in_progress: Option<Decimal>,
    #[serde(with = "cell", alias = "有形固定資産_減価償却累計額")]
    pub accumulated_depreciation: Option<Decimal>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntangibleAssetsBreakdown {
    #[serde(with = "cell", alias = "無形固定資産_のれん")]
    pub goodwill: Option<Decimal>,
    #[serde(with = "cell", alias = "無形固定資産_ソフトウェア")]
    pub software: Option<Decimal>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvestmentsBreakdown {
    #[serde(with = "cell", alias = "投資その他の資産_投資有価証券")]
    pub investment_securities: Option<Decimal>,
    #[serde(with = "cell", alias = "投資その他の資産_投資不動産")]
    pub investment_real_estate: Option<Decimal>,
    #[serde(with = "cell", alias = "投資その他の資産_長期貸付金")]
    pub long_term_loans: Option<Decimal>,
    #[serde(with = "cell", alias = "投資その他の資産_繰延税金資産")]
    pub deferred_tax_assets: Option<Decimal>,
}

/// Liabilities. Upstream documents put `流動負債`/`固定負債` under a `内訳` key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "LiabilitiesSource")]
pub struct Liabilities {
    #[serde(with = "cell")]
    pub total: Option<Decimal>,
    pub current: LineGroup<CurrentLiabilitiesBreakdown>,
    pub fixed: LineGroup<FixedLiabilitiesBreakdown>,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct LiabilitiesSource {
    #[serde(with = "cell", alias = "合計")]
    total: Option<Decimal>,
    current: Option<LineGroup<CurrentLiabilitiesBreakdown>>,
    fixed: Option<LineGroup<FixedLiabilitiesBreakdown>>,
    #[serde(rename = "内訳")]
    breakdown: Option<LiabilitiesBreakdownSource>,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct LiabilitiesBreakdownSource {
    #[serde(rename = "流動負債")]
    current: Option<LineGroup<CurrentLiabilitiesBreakdown>>,
    #[serde(rename = "固定負債")]
    fixed: Option<LineGroup<FixedLiabilitiesBreakdown>>,
}

impl From<LiabilitiesSource> for Liabilities {
    fn from(source: LiabilitiesSource) -> Self {
        let nested = source.breakdown.unwrap_or_default();
        Self {
            total: source.total,
            current: source.current.or(nested.current).unwrap_or_default(),
            fixed: source.fixed.or(nested.fixed).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrentLiabilitiesBreakdown {
    #[serde(with = "cell", alias = "流動負債_短期借入金")]
    pub short_term_borrowings: Option<Decimal>,
    #[serde(with = "cell", alias = "流動負債_1年内返済予定長期借入金")]
    pub current_portion_of_long_term_debt: Option<Decimal>,
    #[serde(with = "cell", alias = "流動負債_支払手形及び買掛金")]
    pub notes_and_accounts_payable: Option<Decimal>,
    /// Payables on construction contracts.
    #[serde(with = "cell", alias = "流動負債_工事未払金")]
    pub construction_payables: Option<Decimal>,
    /// Advances received on uncompleted construction contracts.
    #[serde(with = "cell", alias = "流動負債_未成工事受入金")]
    pub advances_received: Option<Decimal>,
    #[serde(with = "cell", alias = "流動負債_未払法人税等")]
    pub income_taxes_payable: Option<Decimal>,
    #[serde(with = "cell", alias = "流動負債_賞与引当金")]
    pub bonus_reserve: Option<Decimal>,
    #[serde(with = "cell", alias = "流動負債_工事損失引当金")]
    pub construction_loss_reserve: Option<Decimal>,
    #[serde(with = "cell", alias = "流動負債_製品保証引当金")]
    pub warranty_reserve: Option<Decimal>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixedLiabilitiesBreakdown {
    #[serde(with = "cell", alias = "固定負債_社債")]
    pub bonds: Option<Decimal>,
    #[serde(with = "cell", alias = "固定負債_長期借入金")]
    pub long_term_debt: Option<Decimal>,
    #[serde(with = "cell", alias = "固定負債_リース債務")]
    pub lease_obligations: Option<Decimal>,
    #[serde(with = "cell", alias = "固定負債_退職給付に係る負債")]
    pub retirement_benefit_liability: Option<Decimal>,
    #[serde(with = "cell", alias = "固定負債_資産除去債務")]
    pub asset_retirement_obligations: Option<Decimal>,
    #[serde(with = "cell", alias = "固定負債_その他")]
    pub other: Option<Decimal>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetAssetsBreakdown {
    #[serde(with = "cell", alias = "純資産_資本金")]
    pub capital_stock: Option<Decimal>,
    #[serde(with = "cell", alias = "純資産_資本剰余金")]
    pub capital_surplus: Option<Decimal>,
    #[serde(with = "cell", alias = "純資産_利益剰余金")]
    pub retained_earnings: Option<Decimal>,
    #[serde(with = "cell", alias = "純資産_自己株式")]
    pub treasury_stock: Option<Decimal>,
    #[serde(with = "cell", alias = "純資産_その他の包括利益累計額")]
    pub accumulated_other_comprehensive_income: Option<Decimal>,
    #[serde(with = "cell", alias = "純資産_非支配株主持分")]
    pub non_controlling_interests: Option<Decimal>,
}
