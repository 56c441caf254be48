use super::previous_value;
use crate::arith::{average, percentage, round, safe_div};
use crate::panel::Efficiency;
use statements::{Field, StatementYear};

/// Turnover and returns on two-point average balances. Without a preceding year the
/// averages degrade to the current balance.
pub fn efficiency(current: &StatementYear, previous: Option<&StatementYear>) -> Efficiency {
    let revenue = current.get(Field::Revenue);
    let net_income = current.get(Field::NetIncome);
    let avg_assets = average(
        current.get(Field::TotalAssets),
        previous_value(previous, Field::TotalAssets),
    );
    let avg_equity = average(
        current.get(Field::NetAssets),
        previous_value(previous, Field::NetAssets),
    );

    Efficiency {
        asset_turnover: round(safe_div(revenue, avg_assets), 2),
        roa: percentage(safe_div(net_income, avg_assets)),
        roe: percentage(safe_div(net_income, avg_equity)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formulas::fixtures::year;
    use rust_decimal_macros::dec;

    #[test]
    fn first_year_uses_current_balances_alone() {
        let fy = year(
            2023,
            &[
                (Field::Revenue, dec!(1500)),
                (Field::NetIncome, dec!(50)),
                (Field::TotalAssets, dec!(1000)),
                (Field::NetAssets, dec!(400)),
            ],
        );
        let e = efficiency(&fy, None);
        assert_eq!(e.asset_turnover, Some(dec!(1.50)));
        assert_eq!(e.roa, Some(dec!(5.00)));
        assert_eq!(e.roe, Some(dec!(12.50)));
    }

    #[test]
    fn later_years_average_opening_and_closing_balances() {
        let prev = year(
            2022,
            &[(Field::TotalAssets, dec!(800)), (Field::NetAssets, dec!(300))],
        );
        let cur = year(
            2023,
            &[
                (Field::Revenue, dec!(1800)),
                (Field::NetIncome, dec!(45)),
                (Field::TotalAssets, dec!(1000)),
                (Field::NetAssets, dec!(300)),
            ],
        );
        let e = efficiency(&cur, Some(&prev));
        assert_eq!(e.asset_turnover, Some(dec!(2.00)));
        assert_eq!(e.roa, Some(dec!(5.00)));
        assert_eq!(e.roe, Some(dec!(15.00)));
    }

    #[test]
    fn previous_balance_fills_in_for_missing_current() {
        let prev = year(2022, &[(Field::TotalAssets, dec!(500))]);
        let cur = year(2023, &[(Field::Revenue, dec!(1000))]);
        assert_eq!(efficiency(&cur, Some(&prev)).asset_turnover, Some(dec!(2.00)));
    }
}
