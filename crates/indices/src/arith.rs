//! Null-safe arithmetic on `Option<Decimal>`.
//!
//! `None` means "absent", never zero. Every operation is checked: a `Decimal` overflow yields
//! `None` rather than a panic. Rounding belongs at the presentation boundary only
//! (`percentage`, `round`), never between intermediate terms.

use rust_decimal::Decimal;

/// `a / b`. Absent if either operand is absent or `b` is zero.
pub fn safe_div(a: Option<Decimal>, b: Option<Decimal>) -> Option<Decimal> {
    let (a, b) = (a?, b?);
    if b.is_zero() {
        return None;
    }
    a.checked_div(b)
}

/// `a - b`. Strict: absent if either operand is absent.
pub fn safe_sub(a: Option<Decimal>, b: Option<Decimal>) -> Option<Decimal> {
    a?.checked_sub(b?)
}

/// Sum of the present operands. Absent only if every operand is absent.
///
/// Used for totals such as EBITDA, which should not vanish because one minor line is
/// unreported.
pub fn safe_add<I>(values: I) -> Option<Decimal>
where
    I: IntoIterator<Item = Option<Decimal>>,
{
    let mut total: Option<Decimal> = None;
    for value in values.into_iter().flatten() {
        total = Some(match total {
            Some(sum) => sum.checked_add(value)?,
            None => value,
        });
    }
    total
}

/// Two-point mean of a balance-sheet stock. Degrades to whichever value is present.
pub fn average(current: Option<Decimal>, previous: Option<Decimal>) -> Option<Decimal> {
    match (current, previous) {
        (Some(c), Some(p)) => c.checked_add(p)?.checked_div(Decimal::TWO),
        (Some(c), None) => Some(c),
        (None, Some(p)) => Some(p),
        (None, None) => None,
    }
}

pub fn safe_abs(value: Option<Decimal>) -> Option<Decimal> {
    value.map(|v| v.abs())
}

/// `value * factor`, unrounded.
pub fn scale(value: Option<Decimal>, factor: Decimal) -> Option<Decimal> {
    value?.checked_mul(factor)
}

/// A ratio expressed as a percentage, rounded to 2 decimal places.
pub fn percentage(value: Option<Decimal>) -> Option<Decimal> {
    round(scale(value, Decimal::ONE_HUNDRED), 2)
}

/// Banker's rounding to `dp` decimal places.
pub fn round(value: Option<Decimal>, dp: u32) -> Option<Decimal> {
    value.map(|v| v.round_dp(dp))
}
