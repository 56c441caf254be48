use crate::balance::BalanceSheet;
use crate::cash_flow::CashFlowStatement;
use crate::income::IncomeStatement;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// An opaque fiscal-year label, used only for display and as the key of an index panel.
///
/// The label is never parsed into a year and never used for sorting. Sources emit it as an
/// integer (`2023`), a float (`2023.0`) or a string (`"2023/3"`); all are kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct FiscalYear(String);

impl FiscalYear {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FiscalYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FiscalYear {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<i32> for FiscalYear {
    fn from(year: i32) -> Self {
        Self(year.to_string())
    }
}

impl From<i64> for FiscalYear {
    fn from(year: i64) -> Self {
        Self(year.to_string())
    }
}

impl<'de> Deserialize<'de> for FiscalYear {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct LabelVisitor;

        impl Visitor<'_> for LabelVisitor {
            type Value = FiscalYear;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a fiscal-year label (integer, float or string)")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<FiscalYear, E> {
                Ok(FiscalYear(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<FiscalYear, E> {
                Ok(FiscalYear(v.to_string()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<FiscalYear, E> {
                // `2023.0` is the same label as `2023`.
                if v.fract() == 0.0 && v.abs() < 1e15 {
                    Ok(FiscalYear(format!("{}", v as i64)))
                } else {
                    Ok(FiscalYear(v.to_string()))
                }
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<FiscalYear, E> {
                Ok(FiscalYear(v.trim().to_string()))
            }
        }

        deserializer.deserialize_any(LabelVisitor)
    }
}

/// One fiscal year's statements for one company.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatementYear {
    #[serde(alias = "YEAR")]
    pub year: Option<FiscalYear>,
    #[serde(alias = "損益計算書")]
    pub income_statement: IncomeStatement,
    #[serde(alias = "貸借対照表")]
    pub balance_sheet: BalanceSheet,
    #[serde(alias = "キャッシュ・フロー計算書")]
    pub cash_flow: CashFlowStatement,
}

impl StatementYear {
    /// An empty statement year carrying only its label. Every field is absent.
    pub fn labelled(year: impl Into<FiscalYear>) -> Self {
        Self {
            year: Some(year.into()),
            ..Self::default()
        }
    }
}
