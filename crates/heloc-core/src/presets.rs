//! Static preset catalog used to prefill the calculator.

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{LoanTerms, Rate};

/// A named, read-only parameter set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    pub description: String,
    pub terms: LoanTerms,
    /// Comparison rate to prefill alongside the primary terms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternative_rate_pct: Option<Rate>,
}

/// The built-in presets, in display order.
pub fn list_presets() -> Vec<Preset> {
    vec![
        Preset {
            name: "Standard 10-year".into(),
            description: "Typical mid-size line repaid over a decade".into(),
            terms: LoanTerms::new(dec!(50_000), dec!(8.5), dec!(10)),
            alternative_rate_pct: None,
        },
        Preset {
            name: "Short term".into(),
            description: "Smaller balance on an aggressive 5-year payoff".into(),
            terms: LoanTerms::new(dec!(25_000), dec!(7.9), dec!(5)),
            alternative_rate_pct: None,
        },
        Preset {
            name: "Long term".into(),
            description: "Larger line stretched over 20 years".into(),
            terms: LoanTerms::new(dec!(100_000), dec!(8.2), dec!(20)),
            alternative_rate_pct: None,
        },
        Preset {
            name: "Variable-rate comparison".into(),
            description: "Current rate against a credit-card-level alternative".into(),
            terms: LoanTerms::new(dec!(50_000), dec!(8.5), dec!(10)),
            alternative_rate_pct: Some(dec!(28.0)),
        },
        Preset {
            name: "Interest-only".into(),
            description: "Interest-only phase with the principal due at maturity".into(),
            terms: LoanTerms {
                interest_only: true,
                ..LoanTerms::new(dec!(50_000), dec!(5.0), dec!(10))
            },
            alternative_rate_pct: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payment::{compute_payment, PaymentInput};

    #[test]
    fn test_catalog_is_stable_and_named() {
        let presets = list_presets();
        assert_eq!(presets.len(), 5);
        let names: Vec<&str> = presets.iter().map(|p| p.name.as_str()).collect();
        assert!(names.contains(&"Short term"));
        assert!(names.contains(&"Variable-rate comparison"));
        assert!(names.contains(&"Interest-only"));
    }

    #[test]
    fn test_every_preset_computes_a_payment() {
        for preset in list_presets() {
            let input = PaymentInput {
                principal: preset.terms.principal,
                annual_rate_pct: preset.terms.annual_rate_pct,
                term_years: preset.terms.term_years,
                payments_per_year: preset.terms.payments_per_year,
                interest_only: preset.terms.interest_only,
            };
            assert!(
                compute_payment(&input).is_ok(),
                "preset '{}' must be valid",
                preset.name
            );
        }
    }
}
