use super::previous_value;
use crate::arith::{percentage, safe_abs, safe_div, safe_sub};
use crate::panel::Growth;
use rust_decimal::Decimal;
use statements::{Field, StatementYear};

/// Year-over-year growth. Entirely absent when there is no preceding year.
pub fn growth(current: &StatementYear, previous: Option<&StatementYear>) -> Growth {
    if previous.is_none() {
        return Growth::default();
    }
    let rate = |field: Field| yoy(current.get(field), previous_value(previous, field));

    Growth {
        revenue_growth: rate(Field::Revenue),
        operating_income_growth: rate(Field::OperatingIncome),
        ordinary_income_growth: rate(Field::OrdinaryIncome),
        net_income_growth: rate(Field::NetIncome),
    }
}

/// `(current - previous) / |previous|`, in percent.
///
/// The absolute denominator keeps the sign meaningful when the previous value is a loss:
/// -100 -> 50 is +150%, not -150%.
fn yoy(current: Option<Decimal>, previous: Option<Decimal>) -> Option<Decimal> {
    percentage(safe_div(safe_sub(current, previous), safe_abs(previous)))
}
