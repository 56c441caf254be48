use crate::arith::{percentage, safe_div, safe_sub};
use crate::panel::CostStructure;
use statements::{Field, StatementYear};

pub fn cost_structure(year: &StatementYear) -> CostStructure {
    let revenue = year.get(Field::Revenue);
    let personnel = year.get(Field::PersonnelCost);

    CostStructure {
        personnel_cost_ratio: percentage(safe_div(personnel, revenue)),
        depreciation_ratio: percentage(safe_div(year.get(Field::Depreciation), revenue)),
        value_added: safe_sub(year.get(Field::GrossProfit), personnel),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formulas::fixtures::year;
    use rust_decimal_macros::dec;

    #[test]
    fn ratios_and_value_added() {
        let fy = year(
            2023,
            &[
                (Field::Revenue, dec!(2000)),
                (Field::GrossProfit, dec!(500)),
                (Field::PersonnelCost, dec!(180)),
                (Field::Depreciation, dec!(30)),
            ],
        );
        let c = cost_structure(&fy);
        assert_eq!(c.personnel_cost_ratio, Some(dec!(9.00)));
        assert_eq!(c.depreciation_ratio, Some(dec!(1.50)));
        assert_eq!(c.value_added, Some(dec!(320)));
    }

    #[test]
    fn value_added_is_strict() {
        let fy = year(2023, &[(Field::GrossProfit, dec!(500))]);
        assert_eq!(cost_structure(&fy).value_added, None);
    }
}
