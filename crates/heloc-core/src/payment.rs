//! Fixed periodic payment calculator.
//!
//! Implements the closed-form level-payment annuity formula plus the
//! zero-rate and interest-only special cases. This is the strict entry
//! point: out-of-range inputs are rejected with `InvalidInput` naming
//! the offending field.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::HelocError;
use crate::types::{Money, Rate, Years, DEFAULT_PAYMENTS_PER_YEAR};
use crate::HelocResult;

/// Upper bound (exclusive) for the annual rate in percent.
const MAX_RATE_PCT: Decimal = dec!(100);

const PERCENT: Decimal = dec!(100);

fn default_payments_per_year() -> u32 {
    DEFAULT_PAYMENTS_PER_YEAR
}

/// Parameters for the strict payment calculator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentInput {
    pub principal: Money,
    pub annual_rate_pct: Rate,
    pub term_years: Years,
    #[serde(default = "default_payments_per_year")]
    pub payments_per_year: u32,
    #[serde(default)]
    pub interest_only: bool,
}

/// Rate per payment period as a decimal fraction (0.085/12 style).
pub fn periodic_rate(annual_rate_pct: Rate, payments_per_year: u32) -> Rate {
    annual_rate_pct / PERCENT / Decimal::from(payments_per_year)
}

/// Number of whole payment periods implied by the term.
pub fn period_count(term_years: Years, payments_per_year: u32) -> HelocResult<u32> {
    let n = (term_years * Decimal::from(payments_per_year)).round();
    match n.to_u32() {
        Some(n) if n > 0 => Ok(n),
        _ => Err(HelocError::InvalidInput {
            field: "term_years".into(),
            reason: "Term must resolve to at least one payment period".into(),
        }),
    }
}

/// Compute (1 + i)^n via iterative multiplication (avoids Decimal::powd drift).
pub(crate) fn compound(periodic: Rate, n: u32) -> Decimal {
    let factor = Decimal::ONE + periodic;
    let mut result = Decimal::ONE;
    for _ in 0..n {
        result *= factor;
    }
    result
}

pub(crate) fn validate_terms(
    principal: Money,
    annual_rate_pct: Rate,
    term_years: Years,
    payments_per_year: u32,
) -> HelocResult<()> {
    if principal <= Decimal::ZERO {
        return Err(HelocError::InvalidInput {
            field: "principal".into(),
            reason: "Principal must be positive".into(),
        });
    }
    if annual_rate_pct < Decimal::ZERO || annual_rate_pct >= MAX_RATE_PCT {
        return Err(HelocError::InvalidInput {
            field: "annual_rate_pct".into(),
            reason: "Annual rate must lie in [0, 100) percent".into(),
        });
    }
    if term_years <= Decimal::ZERO {
        return Err(HelocError::InvalidInput {
            field: "term_years".into(),
            reason: "Term must be positive".into(),
        });
    }
    if payments_per_year == 0 {
        return Err(HelocError::InvalidInput {
            field: "payments_per_year".into(),
            reason: "At least one payment per year is required".into(),
        });
    }
    Ok(())
}

/// Periodic payment for the given terms, unrounded.
///
/// Interest-only terms pay accrued interest each period. A zero rate
/// degenerates to straight-line repayment. Otherwise the standard
/// annuity formula `P * i * (1+i)^n / ((1+i)^n - 1)` applies, with the
/// denominator guarded so a vanishing `(1+i)^n - 1` falls back to the
/// straight-line branch instead of dividing by zero.
pub fn compute_payment(input: &PaymentInput) -> HelocResult<Money> {
    validate_terms(
        input.principal,
        input.annual_rate_pct,
        input.term_years,
        input.payments_per_year,
    )?;
    let n = period_count(input.term_years, input.payments_per_year)?;
    let i = periodic_rate(input.annual_rate_pct, input.payments_per_year);

    if input.interest_only {
        return Ok(input.principal * i);
    }
    if i.is_zero() {
        return Ok(input.principal / Decimal::from(n));
    }

    let factor = compound(i, n);
    let denominator = factor - Decimal::ONE;
    if denominator <= Decimal::ZERO {
        return Ok(input.principal / Decimal::from(n));
    }
    Ok(input.principal * i * factor / denominator)
}
