//! Full HELOC analysis: schedule, KPIs, fees, loan-to-value, and the
//! alternative-rate comparison, computed from one input set.
//!
//! Fee fields are additive display values only; they never enter the
//! amortization math.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::HelocError;
use crate::kpi::{summarize, KpiSummary};
use crate::schedule::build_schedule;
use crate::types::{with_metadata, ComputationOutput, DrawEvent, LoanTerms, Money, Period, Rate};
use crate::HelocResult;

/// Combined LTV above which lenders typically balk.
const LTV_WARNING_THRESHOLD: Decimal = dec!(0.8);

/// Up-front and recurring fees quoted alongside the line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeeSchedule {
    #[serde(default)]
    pub application: Money,
    #[serde(default)]
    pub appraisal: Money,
    #[serde(default)]
    pub origination: Money,
    #[serde(default)]
    pub annual: Money,
    #[serde(default)]
    pub closing: Money,
}

impl FeeSchedule {
    pub fn total(&self) -> Money {
        self.application + self.appraisal + self.origination + self.annual + self.closing
    }
}

/// Everything the calculator form submits in one request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelocAnalysisInput {
    pub terms: LoanTerms,
    #[serde(default)]
    pub draws: Vec<DrawEvent>,
    #[serde(default)]
    pub fees: FeeSchedule,
    /// Collateral value; zero means LTV is reported as zero.
    #[serde(default)]
    pub home_value: Money,
    /// Balance already secured against the home.
    #[serde(default)]
    pub existing_loan: Money,
    /// Rate to compare against, e.g. a credit-card APR.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative_rate_pct: Option<Rate>,
}

/// Side-by-side figures for the alternative rate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateComparison {
    pub annual_rate_pct: Rate,
    pub monthly_payment: Money,
    pub total_interest: Money,
    /// Alternative minus primary.
    pub payment_delta: Money,
    pub interest_delta: Money,
}

/// The analysis result the presentation layer renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelocAnalysisOutput {
    pub kpis: KpiSummary,
    pub schedule: Vec<Period>,
    /// Borrowed amount plus the existing loan balance.
    pub estimated_loan: Money,
    /// (borrowed + existing) / home_value, 4 dp; zero when unsecured.
    pub loan_to_value: Decimal,
    pub fees: FeeSchedule,
    pub total_fees: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<RateComparison>,
}

fn validate_analysis(input: &HelocAnalysisInput) -> HelocResult<()> {
    if input.home_value < Decimal::ZERO {
        return Err(HelocError::InvalidInput {
            field: "home_value".into(),
            reason: "Home value cannot be negative".into(),
        });
    }
    if input.existing_loan < Decimal::ZERO {
        return Err(HelocError::InvalidInput {
            field: "existing_loan".into(),
            reason: "Existing loan balance cannot be negative".into(),
        });
    }
    for (name, amount) in [
        ("fees.application", input.fees.application),
        ("fees.appraisal", input.fees.appraisal),
        ("fees.origination", input.fees.origination),
        ("fees.annual", input.fees.annual),
        ("fees.closing", input.fees.closing),
    ] {
        if amount < Decimal::ZERO {
            return Err(HelocError::InvalidInput {
                field: name.into(),
                reason: "Fees cannot be negative".into(),
            });
        }
    }
    Ok(())
}

/// Run the full analysis. Strict: any invalid field is an error.
pub fn analyze_heloc(
    input: &HelocAnalysisInput,
    as_of: NaiveDate,
) -> HelocResult<ComputationOutput<HelocAnalysisOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();
    validate_analysis(input)?;

    let primary = build_schedule(&input.terms, &input.draws, as_of)?;
    let kpis = summarize(&primary.periods);

    let estimated_loan = input.terms.principal + input.existing_loan;
    let loan_to_value = if input.home_value.is_zero() {
        warnings.push("Home value is zero; loan-to-value reported as 0".into());
        Decimal::ZERO
    } else {
        (estimated_loan / input.home_value).round_dp(4)
    };
    if loan_to_value > LTV_WARNING_THRESHOLD {
        warnings.push(format!(
            "Combined loan-to-value {loan_to_value} exceeds the typical 0.8 lending ceiling"
        ));
    }

    let comparison = match input.alternative_rate_pct {
        Some(alt_rate) => {
            let alt_terms = LoanTerms {
                annual_rate_pct: alt_rate,
                ..input.terms.clone()
            };
            let alt = build_schedule(&alt_terms, &input.draws, as_of)?;
            let alt_kpis = summarize(&alt.periods);
            Some(RateComparison {
                annual_rate_pct: alt_rate,
                monthly_payment: alt_kpis.monthly_payment,
                total_interest: alt_kpis.total_interest,
                payment_delta: alt_kpis.monthly_payment - kpis.monthly_payment,
                interest_delta: alt_kpis.total_interest - kpis.total_interest,
            })
        }
        None => None,
    };

    let output = HelocAnalysisOutput {
        kpis,
        schedule: primary.periods,
        estimated_loan,
        loan_to_value,
        total_fees: input.fees.total(),
        fees: input.fees.clone(),
        comparison,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "HELOC Analysis (amortization, LTV, rate comparison)",
        input,
        warnings,
        elapsed,
        output,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    fn standard_input() -> HelocAnalysisInput {
        HelocAnalysisInput {
            terms: LoanTerms::new(dec!(50_000), dec!(8.5), dec!(10)),
            draws: Vec::new(),
            fees: FeeSchedule::default(),
            home_value: dec!(400_000),
            existing_loan: dec!(200_000),
            alternative_rate_pct: Some(dec!(28.0)),
        }
    }

    #[test]
    fn test_ltv_and_estimated_loan() {
        let out = analyze_heloc(&standard_input(), as_of()).unwrap();
        assert_eq!(out.result.estimated_loan, dec!(250_000));
        assert_eq!(out.result.loan_to_value, dec!(0.625));
    }

    #[test]
    fn test_zero_home_value_guards_division() {
        let input = HelocAnalysisInput {
            home_value: dec!(0),
            ..standard_input()
        };
        let out = analyze_heloc(&input, as_of()).unwrap();
        assert_eq!(out.result.loan_to_value, Decimal::ZERO);
        assert!(out
            .warnings
            .iter()
            .any(|w| w.contains("loan-to-value")));
    }

    #[test]
    fn test_high_ltv_warns() {
        let input = HelocAnalysisInput {
            home_value: dec!(260_000),
            ..standard_input()
        };
        let out = analyze_heloc(&input, as_of()).unwrap();
        assert!(out.result.loan_to_value > dec!(0.9));
        assert!(out.warnings.iter().any(|w| w.contains("ceiling")));
    }

    #[test]
    fn test_fees_are_display_only() {
        let mut input = standard_input();
        input.fees = FeeSchedule {
            application: dec!(100),
            appraisal: dec!(350),
            origination: dec!(500),
            annual: dec!(75),
            closing: dec!(1_200),
        };
        let with_fees = analyze_heloc(&input, as_of()).unwrap();
        let without = analyze_heloc(&standard_input(), as_of()).unwrap();

        assert_eq!(with_fees.result.total_fees, dec!(2_225));
        // The amortization math must not move.
        assert_eq!(with_fees.result.kpis, without.result.kpis);
        assert_eq!(with_fees.result.schedule, without.result.schedule);
    }

    #[test]
    fn test_comparison_deltas() {
        let out = analyze_heloc(&standard_input(), as_of()).unwrap();
        let cmp = out.result.comparison.expect("comparison requested");
        assert_eq!(cmp.annual_rate_pct, dec!(28.0));
        // A 28% alternative costs strictly more per month and in total.
        assert!(cmp.payment_delta > Decimal::ZERO);
        assert!(cmp.interest_delta > Decimal::ZERO);
        assert_eq!(
            cmp.monthly_payment,
            out.result.kpis.monthly_payment + cmp.payment_delta
        );
    }

    #[test]
    fn test_rejects_negative_fee() {
        let mut input = standard_input();
        input.fees.appraisal = dec!(-1);
        let err = analyze_heloc(&input, as_of()).unwrap_err();
        assert!(
            matches!(err, HelocError::InvalidInput { ref field, .. } if field == "fees.appraisal")
        );
    }

    #[test]
    fn test_rejects_negative_home_value() {
        let input = HelocAnalysisInput {
            home_value: dec!(-5),
            ..standard_input()
        };
        let err = analyze_heloc(&input, as_of()).unwrap_err();
        assert!(matches!(err, HelocError::InvalidInput { ref field, .. } if field == "home_value"));
    }
}
