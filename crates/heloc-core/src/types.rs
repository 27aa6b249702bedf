use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Annual rates expressed in percent (8.5 = 8.5%). Never as decimals.
pub type Rate = Decimal;

/// Year fractions or counts
pub type Years = Decimal;

/// Payments per year when the caller does not say otherwise.
pub const DEFAULT_PAYMENTS_PER_YEAR: u32 = 12;

fn default_payments_per_year() -> u32 {
    DEFAULT_PAYMENTS_PER_YEAR
}

/// Round a money amount to display precision (2 dp, half away from zero).
pub fn round_money(amount: Money) -> Money {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Immutable loan parameters for one calculation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Amount borrowed at the start of the schedule.
    pub principal: Money,
    /// Annual percentage rate in percent, valid range [0, 100).
    pub annual_rate_pct: Rate,
    /// Repayment term in years. Fractional terms are allowed.
    pub term_years: Years,
    #[serde(default = "default_payments_per_year")]
    pub payments_per_year: u32,
    /// Interest-only phase with the principal due as a final balloon.
    #[serde(default)]
    pub interest_only: bool,
    /// Anchor for the date column. None resolves to the caller-supplied
    /// as-of date at generation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
}

impl LoanTerms {
    /// Level-pay terms with the default monthly cadence.
    pub fn new(principal: Money, annual_rate_pct: Rate, term_years: Years) -> Self {
        LoanTerms {
            principal,
            annual_rate_pct,
            term_years,
            payments_per_year: DEFAULT_PAYMENTS_PER_YEAR,
            interest_only: false,
            start_date: None,
        }
    }
}

/// An additional amount borrowed against the line mid-term.
///
/// Multiple events may target the same period; their amounts are summed.
/// Ordering of the input sequence is irrelevant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawEvent {
    /// 0-based period offset from the schedule start.
    pub period_index: u32,
    pub amount: Money,
}

/// One row of an amortization schedule.
///
/// All money fields are rounded to 2 dp. `balance` is the outstanding
/// balance after this period's draw and payment have been applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Period {
    /// 1-based period number.
    pub period: u32,
    /// Start date plus (period - 1) calendar months.
    pub date: NaiveDate,
    pub draw: Money,
    pub payment: Money,
    pub principal: Money,
    pub interest: Money,
    pub balance: Money,
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
