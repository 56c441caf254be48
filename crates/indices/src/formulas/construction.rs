use super::previous_value;
use crate::arith::{average, round, safe_add, safe_div, safe_sub, scale};
use crate::panel::ConstructionIndicators;
use rust_decimal::Decimal;
use statements::{Field, StatementYear};

const DAYS_PER_YEAR: Decimal = Decimal::from_parts(365, 0, 0, false, 0);

/// Working-capital indicators built from construction-contract balances.
pub fn construction(
    current: &StatementYear,
    previous: Option<&StatementYear>,
) -> ConstructionIndicators {
    // (construction receivables + WIP) - (construction payables + advances received)
    let construction_working_capital = safe_sub(
        safe_add([
            current.get(Field::ConstructionReceivables),
            current.get(Field::WorkInProgress),
        ]),
        safe_add([
            current.get(Field::ConstructionPayables),
            current.get(Field::AdvancesReceived),
        ]),
    );

    // (current assets - cash) - (current liabilities - short-term borrowings)
    let net_working_capital = safe_sub(
        safe_sub(current.get(Field::CurrentAssets), current.get(Field::Cash)),
        safe_sub(
            current.get(Field::CurrentLiabilities),
            current.get(Field::ShortTermBorrowings),
        ),
    );

    let avg_receivables = average(receivables(current), previous.and_then(receivables));
    let avg_payables = average(
        current.get(Field::ConstructionPayables),
        previous_value(previous, Field::ConstructionPayables),
    );

    ConstructionIndicators {
        construction_working_capital,
        net_working_capital,
        receivable_days: turnover_days(avg_receivables, current.get(Field::Revenue)),
        payable_days: turnover_days(avg_payables, current.get(Field::CostOfSales)),
    }
}

/// Trade receivables plus receivables on completed construction.
fn receivables(year: &StatementYear) -> Option<Decimal> {
    safe_add([
        year.get(Field::TradeReceivables),
        year.get(Field::ConstructionReceivables),
    ])
}

fn turnover_days(balance: Option<Decimal>, flow: Option<Decimal>) -> Option<Decimal> {
    round(scale(safe_div(balance, flow), DAYS_PER_YEAR), 2)
}
