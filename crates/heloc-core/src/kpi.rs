//! Headline metrics reduced from a generated schedule.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Money, Period};

/// Read-only projection of a schedule into its headline numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KpiSummary {
    /// Payment of period one; zero for an empty schedule.
    pub monthly_payment: Money,
    pub total_interest: Money,
    /// Everything that moved through the line: payments plus draws.
    pub total_paid: Money,
    /// Balance of the final emitted period.
    pub remaining_balance: Money,
    /// Date of the first period still carrying a balance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_payment_due: Option<NaiveDate>,
}

/// Reduce a schedule to its KPI summary. O(n), pure.
pub fn summarize(periods: &[Period]) -> KpiSummary {
    let mut summary = KpiSummary::default();
    let Some(first) = periods.first() else {
        return summary;
    };

    summary.monthly_payment = first.payment;
    for p in periods {
        summary.total_interest += p.interest;
        summary.total_paid += p.payment + p.draw;
        if summary.next_payment_due.is_none() && p.balance > Decimal::ZERO {
            summary.next_payment_due = Some(p.date);
        }
    }
    summary.remaining_balance = periods.last().map(|p| p.balance).unwrap_or_default();
    summary
}
