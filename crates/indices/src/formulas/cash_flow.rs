use super::{ebitda, previous_value};
use crate::arith::{percentage, round, safe_add, safe_div, safe_sub};
use crate::panel::CashFlowIndicators;
use statements::{Field, StatementYear};

pub fn cash_flow(current: &StatementYear, previous: Option<&StatementYear>) -> CashFlowIndicators {
    let operating = current.get(Field::OperatingCashFlow);

    CashFlowIndicators {
        operating_cf_margin: percentage(safe_div(operating, current.get(Field::Revenue))),
        free_cash_flow: safe_add([operating, current.get(Field::InvestingCashFlow)]),
        operating_cf_to_ebitda: round(safe_div(operating, ebitda(current)), 2),
        // Absent in the first year: there is no opening balance to compare against.
        cash_change: safe_sub(
            current.get(Field::EndingCash),
            previous_value(previous, Field::EndingCash),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formulas::fixtures::year;
    use rust_decimal_macros::dec;

    #[test]
    fn single_year_cash_flow_indicators() {
        let fy = year(
            2023,
            &[
                (Field::Revenue, dec!(1000)),
                (Field::OperatingIncome, dec!(80)),
                (Field::Depreciation, dec!(20)),
                (Field::OperatingCashFlow, dec!(120)),
                (Field::InvestingCashFlow, dec!(-45)),
                (Field::EndingCash, dec!(300)),
            ],
        );
        let c = cash_flow(&fy, None);
        assert_eq!(c.operating_cf_margin, Some(dec!(12.00)));
        assert_eq!(c.free_cash_flow, Some(dec!(75)));
        assert_eq!(c.operating_cf_to_ebitda, Some(dec!(1.20)));
        assert_eq!(c.cash_change, None);
    }

    #[test]
    fn cash_change_needs_both_balances() {
        let prev = year(2022, &[(Field::EndingCash, dec!(250))]);
        let cur = year(2023, &[(Field::EndingCash, dec!(300))]);
        assert_eq!(cash_flow(&cur, Some(&prev)).cash_change, Some(dec!(50)));

        let prev_without_cash = year(2022, &[(Field::Revenue, dec!(900))]);
        assert_eq!(cash_flow(&cur, Some(&prev_without_cash)).cash_change, None);
    }

    #[test]
    fn free_cash_flow_survives_missing_investing_line() {
        let fy = year(2023, &[(Field::OperatingCashFlow, dec!(120))]);
        assert_eq!(cash_flow(&fy, None).free_cash_flow, Some(dec!(120)));
    }
}
