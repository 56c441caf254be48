//! The indicator formulas, one module per category.
//!
//! Each function is pure: it reads the current `StatementYear` (and, where a category needs
//! it, the array-adjacent preceding one) through the `Field` accessor layer and returns a
//! fully-shaped category struct.

mod cash_flow;
mod construction;
mod cost_structure;
mod efficiency;
mod growth;
mod profitability;
mod safety;

pub use cash_flow::cash_flow;
pub use construction::construction;
pub use cost_structure::cost_structure;
pub use efficiency::efficiency;
pub use growth::growth;
pub use profitability::profitability;
pub use safety::safety;

use crate::arith::safe_add;
use rust_decimal::Decimal;
use statements::{Field, StatementYear};

/// Operating income plus SG&A depreciation. A missing depreciation line is a no-op.
pub(crate) fn ebitda(year: &StatementYear) -> Option<Decimal> {
    safe_add([year.get(Field::OperatingIncome), year.get(Field::Depreciation)])
}

/// Reads a field from the preceding year, if there is one.
pub(crate) fn previous_value(previous: Option<&StatementYear>, field: Field) -> Option<Decimal> {
    previous.and_then(|year| year.get(field))
}
