//! Checked decimal arithmetic.
//!
//! `Decimal` operators panic on overflow; request amounts are unbounded so
//! every calculation step goes through these instead.

use rust_decimal::Decimal;

use super::error::CalculationError;

pub(crate) fn mul(a: Decimal, b: Decimal) -> Result<Decimal, CalculationError> {
    a.checked_mul(b).ok_or(CalculationError::Overflow)
}

pub(crate) fn div(a: Decimal, b: Decimal) -> Result<Decimal, CalculationError> {
    if b.is_zero() {
        return Err(CalculationError::DivisionByZero);
    }
    a.checked_div(b).ok_or(CalculationError::Overflow)
}

pub(crate) fn sub(a: Decimal, b: Decimal) -> Result<Decimal, CalculationError> {
    a.checked_sub(b).ok_or(CalculationError::Overflow)
}

pub(crate) fn add(a: Decimal, b: Decimal) -> Result<Decimal, CalculationError> {
    a.checked_add(b).ok_or(CalculationError::Overflow)
}
