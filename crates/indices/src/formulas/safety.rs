use crate::arith::{percentage, round, safe_add, safe_div};
use crate::panel::Safety;
use statements::{Field, StatementYear};

/// Liquidity and solvency at year end.
pub fn safety(year: &StatementYear) -> Safety {
    let current_liabilities = year.get(Field::CurrentLiabilities);
    let net_assets = year.get(Field::NetAssets);

    // Inventory and work in progress are excluded from quick assets.
    let quick_assets = safe_add([
        year.get(Field::Cash),
        year.get(Field::TradeReceivables),
        year.get(Field::ConstructionReceivables),
    ]);

    // Trade and construction payables are operating liabilities, not debt.
    let interest_bearing_debt = safe_add([
        year.get(Field::ShortTermBorrowings),
        year.get(Field::CurrentPortionOfLongTermDebt),
        year.get(Field::LongTermDebt),
    ]);

    Safety {
        current_ratio: percentage(safe_div(year.get(Field::CurrentAssets), current_liabilities)),
        quick_ratio: percentage(safe_div(quick_assets, current_liabilities)),
        equity_ratio: percentage(safe_div(net_assets, year.get(Field::TotalAssets))),
        debt_to_equity: round(safe_div(interest_bearing_debt, net_assets), 2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formulas::fixtures::year;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn balance_sheet() -> StatementYear {
        year(
            2023,
            &[
                (Field::CurrentAssets, dec!(500)),
                (Field::CurrentLiabilities, dec!(400)),
                (Field::Cash, dec!(100)),
                (Field::TradeReceivables, dec!(60)),
                (Field::ConstructionReceivables, dec!(40)),
                (Field::WorkInProgress, dec!(250)),
                (Field::ConstructionPayables, dec!(300)),
                (Field::ShortTermBorrowings, dec!(50)),
                (Field::LongTermDebt, dec!(150)),
                (Field::NetAssets, dec!(400)),
                (Field::TotalAssets, dec!(1000)),
            ],
        )
    }

    #[test]
    fn ratios_at_year_end() {
        let s = safety(&balance_sheet());
        assert_eq!(s.current_ratio, Some(dec!(125.00)));
        assert_eq!(s.quick_ratio, Some(dec!(50.00)));
        assert_eq!(s.equity_ratio, Some(dec!(40.00)));
        assert_eq!(s.debt_to_equity, Some(dec!(0.50)));
    }

    #[test]
    fn zero_current_liabilities_is_absent_not_infinite() {
        let fy = year(
            2023,
            &[(Field::CurrentAssets, dec!(500)), (Field::CurrentLiabilities, Decimal::ZERO)],
        );
        let s = safety(&fy);
        assert_eq!(s.current_ratio, None);
        assert_eq!(s.quick_ratio, None);
    }

    #[test]
    fn no_interest_bearing_debt_at_all_is_absent() {
        let mut fy = balance_sheet();
        fy.set(Field::ShortTermBorrowings, None)
            .set(Field::LongTermDebt, None);
        assert_eq!(safety(&fy).debt_to_equity, None);
    }
}
