use crate::cell;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The four headline facts of the cash-flow statement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CashFlowStatement {
    #[serde(with = "cell", alias = "営業活動によるキャッシュ・フロー")]
    pub operating: Option<Decimal>,
    /// Usually negative for a company that is investing.
    #[serde(with = "cell", alias = "投資活動によるキャッシュ・フロー")]
    pub investing: Option<Decimal>,
    #[serde(with = "cell", alias = "財務活動によるキャッシュ・フロー")]
    pub financing: Option<Decimal>,
    /// Cash and cash equivalents at the end of the period.
    #[serde(with = "cell", alias = "現金及び現金同等物期末残高")]
    pub ending_cash: Option<Decimal>,
}
