//! Amortization schedule generator.
//!
//! Turns loan terms plus an optional sequence of draw events into a
//! period-by-period cash-flow schedule. One engine serves both the strict
//! path (`generate_schedule`, fails fast on bad input) and the best-effort
//! preview path (`preview_schedule`, degrades to an empty schedule so a
//! caller always has something to render).
//!
//! Draws are applied before interest accrues for the period they land in,
//! so a draw increases the interest base starting that same period. Money
//! columns are rounded to 2 dp per period; the resulting drift over long
//! schedules is accepted and bounded by the per-period rounding unit.

use std::collections::BTreeMap;
use std::time::Instant;

use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::HelocError;
use crate::payment::{compute_payment, period_count, periodic_rate, PaymentInput};
use crate::types::{
    round_money, with_metadata, ComputationOutput, DrawEvent, LoanTerms, Money, Period,
};
use crate::HelocResult;

/// A generated schedule plus the headline figures needed to present it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleOutput {
    pub periods: Vec<Period>,
    /// Base periodic payment (rounded), before any final-period clamp.
    pub periodic_payment: Money,
    /// Resolved schedule anchor date.
    pub start_date: NaiveDate,
    /// Nominal period count implied by the term; the schedule may be
    /// shorter when the balance retires early.
    pub n_periods: u32,
}

#[derive(Serialize)]
struct ScheduleAssumptions<'a> {
    terms: &'a LoanTerms,
    draws: &'a [DrawEvent],
}

/// Generate a schedule, strict path.
///
/// Validation failures (non-positive principal, out-of-range rate,
/// degenerate term, malformed draws) surface as `InvalidInput`.
pub fn generate_schedule(
    terms: &LoanTerms,
    draws: &[DrawEvent],
    as_of: NaiveDate,
) -> HelocResult<ComputationOutput<ScheduleOutput>> {
    let start = Instant::now();
    let output = build_schedule(terms, draws, as_of)?;

    let mut warnings = Vec::new();
    if let Some(last) = output.periods.last() {
        if last.balance > Decimal::ZERO {
            warnings.push(format!(
                "Schedule ends with an outstanding balance of {}",
                last.balance
            ));
        }
    }

    let methodology = if terms.interest_only {
        "Interest-Only Amortization with Final Balloon"
    } else {
        "Level-Payment Amortization"
    };
    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        methodology,
        &ScheduleAssumptions { terms, draws },
        warnings,
        elapsed,
        output,
    ))
}

/// Generate a schedule, best-effort path.
///
/// Degenerate or invalid inputs yield an empty schedule with the failure
/// recorded as a warning, never an error. This keeps a default view
/// renderable while the user is still mid-edit.
pub fn preview_schedule(
    terms: &LoanTerms,
    draws: &[DrawEvent],
    as_of: NaiveDate,
) -> ComputationOutput<ScheduleOutput> {
    let start = Instant::now();
    let (output, warnings) = match build_schedule(terms, draws, as_of) {
        Ok(output) => (output, Vec::new()),
        Err(e) => (
            ScheduleOutput {
                periods: Vec::new(),
                periodic_payment: Decimal::ZERO,
                start_date: terms.start_date.unwrap_or(as_of),
                n_periods: 0,
            },
            vec![format!("Preview degraded to an empty schedule: {e}")],
        ),
    };

    let elapsed = start.elapsed().as_micros() as u64;
    with_metadata(
        "Level-Payment Amortization (preview)",
        &ScheduleAssumptions { terms, draws },
        warnings,
        elapsed,
        output,
    )
}

/// The bare engine: validated terms and draws in, ordered periods out.
pub fn build_schedule(
    terms: &LoanTerms,
    draws: &[DrawEvent],
    as_of: NaiveDate,
) -> HelocResult<ScheduleOutput> {
    let n = period_count(terms.term_years, terms.payments_per_year)?;
    let raw_payment = compute_payment(&PaymentInput {
        principal: terms.principal,
        annual_rate_pct: terms.annual_rate_pct,
        term_years: terms.term_years,
        payments_per_year: terms.payments_per_year,
        interest_only: terms.interest_only,
    })?;
    let draw_totals = collect_draws(draws, n)?;

    let i = periodic_rate(terms.annual_rate_pct, terms.payments_per_year);
    let payment = round_money(raw_payment);
    let start_date = terms.start_date.unwrap_or(as_of);

    let mut periods: Vec<Period> = Vec::with_capacity(n as usize);
    let mut balance = round_money(terms.principal);

    for period in 1..=n {
        let draw_amt = draw_totals
            .get(&(period - 1))
            .copied()
            .unwrap_or(Decimal::ZERO);
        balance += draw_amt;

        let interest = round_money(balance * i);
        let (payment_amt, principal_paid) = if terms.interest_only {
            if period == n {
                // Balloon: the whole remaining balance comes due.
                (round_money(interest + balance), balance)
            } else {
                (interest, Decimal::ZERO)
            }
        } else {
            let due = payment - interest;
            if due > balance {
                // Final period, or a payment that would overshoot.
                (round_money(interest + balance), balance)
            } else {
                (payment, due)
            }
        };

        balance = round_money((balance - principal_paid).max(Decimal::ZERO));
        periods.push(Period {
            period,
            date: period_date(start_date, period)?,
            draw: draw_amt,
            payment: payment_amt,
            principal: round_money(principal_paid),
            interest,
            balance,
        });

        // The schedule stops the instant the balance retires.
        if balance.is_zero() {
            break;
        }
    }

    Ok(ScheduleOutput {
        periods,
        periodic_payment: payment,
        start_date,
        n_periods: n,
    })
}

/// Sum draw amounts per target period, rejecting malformed events.
fn collect_draws(draws: &[DrawEvent], n_periods: u32) -> HelocResult<BTreeMap<u32, Money>> {
    let mut totals: BTreeMap<u32, Money> = BTreeMap::new();
    for draw in draws {
        if draw.amount < Decimal::ZERO {
            return Err(HelocError::InvalidInput {
                field: "draws".into(),
                reason: format!(
                    "Draw amount at period index {} must be non-negative",
                    draw.period_index
                ),
            });
        }
        if draw.period_index >= n_periods {
            return Err(HelocError::InvalidInput {
                field: "draws".into(),
                reason: format!(
                    "Draw at period index {} falls outside the {}-period schedule",
                    draw.period_index, n_periods
                ),
            });
        }
        *totals.entry(draw.period_index).or_insert(Decimal::ZERO) += draw.amount;
    }
    for amount in totals.values_mut() {
        *amount = round_money(*amount);
    }
    Ok(totals)
}

fn period_date(start_date: NaiveDate, period: u32) -> HelocResult<NaiveDate> {
    start_date
        .checked_add_months(Months::new(period - 1))
        .ok_or_else(|| {
            HelocError::DateError(format!(
                "Schedule date overflows the calendar at period {period}"
            ))
        })
}
