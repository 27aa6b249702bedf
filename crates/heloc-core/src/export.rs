//! Schedule and summary exports: delimited text and a short report block.

use chrono::NaiveDate;

use crate::error::HelocError;
use crate::types::{round_money, Money, Period, Rate};
use crate::HelocResult;

const SCHEDULE_HEADER: [&str; 7] = [
    "period",
    "date",
    "draw",
    "payment",
    "principal",
    "interest",
    "balance",
];

/// Render a schedule as CSV with a header row and ISO dates.
pub fn schedule_to_csv(periods: &[Period]) -> HelocResult<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    if periods.is_empty() {
        wtr.write_record(SCHEDULE_HEADER)?;
    }
    for period in periods {
        wtr.serialize(period)?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| HelocError::SerializationError(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| HelocError::SerializationError(e.to_string()))
}

/// Inputs for the short human-readable summary block.
#[derive(Debug, Clone)]
pub struct ReportInput {
    pub as_of: NaiveDate,
    pub principal: Money,
    pub annual_rate_pct: Rate,
    pub monthly_payment: Money,
    pub total_interest: Money,
}

/// The downloadable one-paragraph TXT summary.
pub fn short_report(input: &ReportInput) -> String {
    let mut rate = input.annual_rate_pct;
    rate.rescale(2);
    format!(
        "HELOC Summary as of {}\n\
         - Borrowed: {}\n\
         - APR: {}%\n\
         - Monthly payment: {}\n\
         - Total interest: {}\n",
        input.as_of,
        format_usd(input.principal),
        rate,
        format_usd(input.monthly_payment),
        format_usd(input.total_interest),
    )
}

/// Fixed two-decimal USD formatting with thousands separators.
pub fn format_usd(amount: Money) -> String {
    let mut value = round_money(amount);
    value.rescale(2);
    let text = value.abs().to_string();
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.iter().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*ch);
    }

    let sign = if value.is_sign_negative() && !value.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}${grouped}.{frac_part}")
}
