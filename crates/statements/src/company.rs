use crate::cell;
use crate::year::StatementYear;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Static company metadata, one per company.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyInfo {
    /// The listing/securities code that identifies the company.
    #[serde(with = "cell::text", alias = "コード")]
    pub code: Option<String>,
    #[serde(with = "cell::text", alias = "本社所在地")]
    pub headquarters: Option<String>,
    /// Market and product segment, e.g. "Prime (domestic stocks)".
    #[serde(with = "cell::text", alias = "市場・商品区分")]
    pub market_segment: Option<String>,
    /// Consolidated employee count.
    #[serde(with = "cell::number", alias = "従業員数（連結）")]
    pub employees: Option<Decimal>,
    /// Capital in units of 100 million yen.
    #[serde(with = "cell::number", alias = "資本金（億円）")]
    pub capital: Option<Decimal>,
    #[serde(with = "cell::text", alias = "業種分類")]
    pub industry: Option<String>,
}

/// One company's metadata and its statement years, in source order.
///
/// The order of `years` is the order the loader produced. It is never re-sorted: the
/// "previous year" of any entry is simply the entry before it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyStatements {
    #[serde(alias = "企業情報")]
    pub company: CompanyInfo,
    #[serde(alias = "財務データ")]
    pub years: Vec<StatementYear>,
}

impl CompanyStatements {
    pub fn new(company: CompanyInfo, years: Vec<StatementYear>) -> Self {
        Self { company, years }
    }

    /// The company code, or `"unknown"` when the source carried none.
    pub fn code(&self) -> &str {
        self.company.code.as_deref().unwrap_or("unknown")
    }
}
