//! The field accessor layer.
//!
//! Every line item an indicator formula reads is named here, once. A lookup walks the typed
//! statement tree and returns `None` as soon as any level is unreported, so formulas only
//! ever deal with flat `Option<Decimal>` inputs.

use crate::year::StatementYear;
use rust_decimal::Decimal;
use std::fmt;

/// A statement line item read by the indicator formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    // --- Income statement ---
    Revenue,
    CostOfSales,
    GrossProfit,
    SellingGeneralAdmin,
    PersonnelCost,
    Depreciation,
    OperatingIncome,
    OrdinaryIncome,
    NetIncome,

    // --- Balance sheet ---
    TotalAssets,
    CurrentAssets,
    Cash,
    TradeReceivables,
    ConstructionReceivables,
    WorkInProgress,
    CurrentLiabilities,
    ShortTermBorrowings,
    CurrentPortionOfLongTermDebt,
    ConstructionPayables,
    AdvancesReceived,
    LongTermDebt,
    NetAssets,

    // --- Cash-flow statement ---
    OperatingCashFlow,
    InvestingCashFlow,
    FinancingCashFlow,
    EndingCash,
}

impl Field {
    pub const ALL: [Field; 26] = [
        Field::Revenue,
        Field::CostOfSales,
        Field::GrossProfit,
        Field::SellingGeneralAdmin,
        Field::PersonnelCost,
        Field::Depreciation,
        Field::OperatingIncome,
        Field::OrdinaryIncome,
        Field::NetIncome,
        Field::TotalAssets,
        Field::CurrentAssets,
        Field::Cash,
        Field::TradeReceivables,
        Field::ConstructionReceivables,
        Field::WorkInProgress,
        Field::CurrentLiabilities,
        Field::ShortTermBorrowings,
        Field::CurrentPortionOfLongTermDebt,
        Field::ConstructionPayables,
        Field::AdvancesReceived,
        Field::LongTermDebt,
        Field::NetAssets,
        Field::OperatingCashFlow,
        Field::InvestingCashFlow,
        Field::FinancingCashFlow,
        Field::EndingCash,
    ];

    /// The group/line-item path of this field in the serialized statement document.
    pub fn path(self) -> &'static [&'static str] {
        match self {
            Field::Revenue => &["income_statement", "revenue", "total"],
            Field::CostOfSales => &["income_statement", "cost_of_sales", "total"],
            Field::GrossProfit => &["income_statement", "gross_profit", "total"],
            Field::SellingGeneralAdmin => &["income_statement", "sga", "total"],
            Field::PersonnelCost => &["income_statement", "sga", "breakdown", "personnel"],
            Field::Depreciation => &["income_statement", "sga", "breakdown", "depreciation"],
            Field::OperatingIncome => &["income_statement", "operating_income"],
            Field::OrdinaryIncome => &["income_statement", "ordinary_income"],
            Field::NetIncome => &["income_statement", "net_income"],
            Field::TotalAssets => &["balance_sheet", "assets", "total_assets"],
            Field::CurrentAssets => &["balance_sheet", "assets", "current_assets", "total"],
            Field::Cash => &[
                "balance_sheet",
                "assets",
                "current_assets",
                "breakdown",
                "cash_and_deposits",
            ],
            Field::TradeReceivables => &[
                "balance_sheet",
                "assets",
                "current_assets",
                "breakdown",
                "notes_and_accounts_receivable",
            ],
            Field::ConstructionReceivables => &[
                "balance_sheet",
                "assets",
                "current_assets",
                "breakdown",
                "construction_receivables",
            ],
            Field::WorkInProgress => &[
                "balance_sheet",
                "assets",
                "current_assets",
                "breakdown",
                "work_in_progress",
            ],
            Field::CurrentLiabilities => &["balance_sheet", "liabilities", "current", "total"],
            Field::ShortTermBorrowings => &[
                "balance_sheet",
                "liabilities",
                "current",
                "breakdown",
                "short_term_borrowings",
            ],
            Field::CurrentPortionOfLongTermDebt => &[
                "balance_sheet",
                "liabilities",
                "current",
                "breakdown",
                "current_portion_of_long_term_debt",
            ],
            Field::ConstructionPayables => &[
                "balance_sheet",
                "liabilities",
                "current",
                "breakdown",
                "construction_payables",
            ],
            Field::AdvancesReceived => &[
                "balance_sheet",
                "liabilities",
                "current",
                "breakdown",
                "advances_received",
            ],
            Field::LongTermDebt => &[
                "balance_sheet",
                "liabilities",
                "fixed",
                "breakdown",
                "long_term_debt",
            ],
            Field::NetAssets => &["balance_sheet", "net_assets", "total"],
            Field::OperatingCashFlow => &["cash_flow", "operating"],
            Field::InvestingCashFlow => &["cash_flow", "investing"],
            Field::FinancingCashFlow => &["cash_flow", "financing"],
            Field::EndingCash => &["cash_flow", "ending_cash"],
        }
    }

    /// The same location in an upstream loader document, which uses the source's native
    /// labels and nests liabilities and net assets under `負債・純資産`.
    pub fn source_path(self) -> &'static [&'static str] {
        match self {
            Field::Revenue => &["損益計算書", "売上高", "合計"],
            Field::CostOfSales => &["損益計算書", "売上原価", "合計"],
            Field::GrossProfit => &["損益計算書", "売上総利益", "合計"],
            Field::SellingGeneralAdmin => &["損益計算書", "販売費及び一般管理費", "合計"],
            Field::PersonnelCost => &["損益計算書", "販売費及び一般管理費", "内訳", "販売費及び一般管理費_人件費"],
            Field::Depreciation => &["損益計算書", "販売費及び一般管理費", "内訳", "販売費及び一般管理費_減価償却費"],
            Field::OperatingIncome => &["損益計算書", "営業利益"],
            Field::OrdinaryIncome => &["損益計算書", "経常利益"],
            Field::NetIncome => &["損益計算書", "当期純利益"],
            Field::TotalAssets => &["貸借対照表", "資産", "総資産"],
            Field::CurrentAssets => &["貸借対照表", "資産", "流動資産", "合計"],
            Field::Cash => &["貸借対照表", "資産", "流動資産", "内訳", "流動資産_現金及び預金"],
            Field::TradeReceivables => &["貸借対照表", "資産", "流動資産", "内訳", "流動資産_受取手形及び売掛金"],
            Field::ConstructionReceivables => &["貸借対照表", "資産", "流動資産", "内訳", "流動資産_完成工事未収入金"],
            Field::WorkInProgress => &["貸借対照表", "資産", "流動資産", "内訳", "流動資産_未成工事支出金"],
            Field::CurrentLiabilities => &["貸借対照表", "負債・純資産", "負債", "内訳", "流動負債", "合計"],
            Field::ShortTermBorrowings => &[
                "貸借対照表",
                "負債・純資産",
                "負債",
                "内訳",
                "流動負債",
                "内訳",
                "流動負債_短期借入金",
            ],
            Field::CurrentPortionOfLongTermDebt => &[
                "貸借対照表",
                "負債・純資産",
                "負債",
                "内訳",
                "流動負債",
                "内訳",
                "流動負債_1年内返済予定長期借入金",
            ],
            Field::ConstructionPayables => &[
                "貸借対照表",
                "負債・純資産",
                "負債",
                "内訳",
                "流動負債",
                "内訳",
                "流動負債_工事未払金",
            ],
            Field::AdvancesReceived => &[
                "貸借対照表",
                "負債・純資産",
                "負債",
                "内訳",
                "流動負債",
                "内訳",
                "流動負債_未成工事受入金",
            ],
            Field::LongTermDebt => &["貸借対照表", "負債・純資産", "負債", "内訳", "固定負債", "内訳", "固定負債_長期借入金"],
            Field::NetAssets => &["貸借対照表", "負債・純資産", "純資産", "合計"],
            Field::OperatingCashFlow => &["キャッシュ・フロー計算書", "営業活動によるキャッシュ・フロー"],
            Field::InvestingCashFlow => &["キャッシュ・フロー計算書", "投資活動によるキャッシュ・フロー"],
            Field::FinancingCashFlow => &["キャッシュ・フロー計算書", "財務活動によるキャッシュ・フロー"],
            Field::EndingCash => &["キャッシュ・フロー計算書", "現金及び現金同等物期末残高"],
        }
    }

    /// Resolves a group/line-item path back to its field. Both `path()` and
    /// `source_path()` spellings are accepted.
    pub fn from_path<S: AsRef<str>>(path: &[S]) -> Option<Field> {
        let matches = |known: &[&str]| {
            known.len() == path.len() && known.iter().zip(path).all(|(a, b)| *a == b.as_ref())
        };
        Field::ALL
            .into_iter()
            .find(|field| matches(field.path()) || matches(field.source_path()))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path().join(" / "))
    }
}

impl StatementYear {
    /// Reads a single line item. Returns `None` if it is unreported at any level.
    pub fn get(&self, field: Field) -> Option<Decimal> {
        let pl = &self.income_statement;
        let bs = &self.balance_sheet;
        let cf = &self.cash_flow;

        match field {
            Field::Revenue => pl.revenue.total,
            Field::CostOfSales => pl.cost_of_sales.total,
            Field::GrossProfit => pl.gross_profit.total,
            Field::SellingGeneralAdmin => pl.sga.total,
            Field::PersonnelCost => pl.sga.breakdown.personnel,
            Field::Depreciation => pl.sga.breakdown.depreciation,
            Field::OperatingIncome => pl.operating_income,
            Field::OrdinaryIncome => pl.ordinary_income,
            Field::NetIncome => pl.net_income,
            Field::TotalAssets => bs.assets.total_assets,
            Field::CurrentAssets => bs.assets.current_assets.total,
            Field::Cash => bs.assets.current_assets.breakdown.cash_and_deposits,
            Field::TradeReceivables => {
                bs.assets.current_assets.breakdown.notes_and_accounts_receivable
            }
            Field::ConstructionReceivables => {
                bs.assets.current_assets.breakdown.construction_receivables
            }
            Field::WorkInProgress => bs.assets.current_assets.breakdown.work_in_progress,
            Field::CurrentLiabilities => bs.liabilities.current.total,
            Field::ShortTermBorrowings => bs.liabilities.current.breakdown.short_term_borrowings,
            Field::CurrentPortionOfLongTermDebt => {
                bs.liabilities.current.breakdown.current_portion_of_long_term_debt
            }
            Field::ConstructionPayables => bs.liabilities.current.breakdown.construction_payables,
            Field::AdvancesReceived => bs.liabilities.current.breakdown.advances_received,
            Field::LongTermDebt => bs.liabilities.fixed.breakdown.long_term_debt,
            Field::NetAssets => bs.net_assets.total,
            Field::OperatingCashFlow => cf.operating,
            Field::InvestingCashFlow => cf.investing,
            Field::FinancingCashFlow => cf.financing,
            Field::EndingCash => cf.ending_cash,
        }
    }

    /// Navigates by group/line-item path. Unknown paths resolve to `None`, like any other
    /// unreported line.
    pub fn lookup<S: AsRef<str>>(&self, path: &[S]) -> Option<Decimal> {
        Field::from_path(path).and_then(|field| self.get(field))
    }

    /// Sets a single line item. Used to build statement years programmatically.
    pub fn set(&mut self, field: Field, value: Option<Decimal>) -> &mut Self {
        let pl = &mut self.income_statement;
        let bs = &mut self.balance_sheet;
        let cf = &mut self.cash_flow;

        let slot = match field {
            Field::Revenue => &mut pl.revenue.total,
            Field::CostOfSales => &mut pl.cost_of_sales.total,
            Field::GrossProfit => &mut pl.gross_profit.total,
            Field::SellingGeneralAdmin => &mut pl.sga.total,
            Field::PersonnelCost => &mut pl.sga.breakdown.personnel,
            Field::Depreciation => &mut pl.sga.breakdown.depreciation,
            Field::OperatingIncome => &mut pl.operating_income,
            Field::OrdinaryIncome => &mut pl.ordinary_income,
            Field::NetIncome => &mut pl.net_income,
            Field::TotalAssets => &mut bs.assets.total_assets,
            Field::CurrentAssets => &mut bs.assets.current_assets.total,
            Field::Cash => &mut bs.assets.current_assets.breakdown.cash_and_deposits,
            Field::TradeReceivables => {
                &mut bs.assets.current_assets.breakdown.notes_and_accounts_receivable
            }
            Field::ConstructionReceivables => {
                &mut bs.assets.current_assets.breakdown.construction_receivables
            }
            Field::WorkInProgress => &mut bs.assets.current_assets.breakdown.work_in_progress,
            Field::CurrentLiabilities => &mut bs.liabilities.current.total,
            Field::ShortTermBorrowings => {
                &mut bs.liabilities.current.breakdown.short_term_borrowings
            }
            Field::CurrentPortionOfLongTermDebt => {
                &mut bs.liabilities.current.breakdown.current_portion_of_long_term_debt
            }
            Field::ConstructionPayables => {
                &mut bs.liabilities.current.breakdown.construction_payables
            }
            Field::AdvancesReceived => &mut bs.liabilities.current.breakdown.advances_received,
            Field::LongTermDebt => &mut bs.liabilities.fixed.breakdown.long_term_debt,
            Field::NetAssets => &mut bs.net_assets.total,
            Field::OperatingCashFlow => &mut cf.operating,
            Field::InvestingCashFlow => &mut cf.investing,
            Field::FinancingCashFlow => &mut cf.financing,
            Field::EndingCash => &mut cf.ending_cash,
        };
        *slot = value;
        self
    }

    /// Builder-style `set` for a present value.
    pub fn with(mut self, field: Field, value: Decimal) -> Self {
        self.set(field, Some(value));
        self
    }
}
