use super::ebitda;
use crate::arith::{percentage, safe_div};
use crate::panel::Profitability;
use statements::{Field, StatementYear};

/// Revenue-denominated margins and EBITDA for a single year.
pub fn profitability(year: &StatementYear) -> Profitability {
    let revenue = year.get(Field::Revenue);
    let margin = |field: Field| percentage(safe_div(year.get(field), revenue));

    Profitability {
        gross_margin: margin(Field::GrossProfit),
        cost_ratio: margin(Field::CostOfSales),
        sga_ratio: margin(Field::SellingGeneralAdmin),
        operating_margin: margin(Field::OperatingIncome),
        ordinary_margin: margin(Field::OrdinaryIncome),
        net_margin: margin(Field::NetIncome),
        ebitda: ebitda(year),
    }
}
