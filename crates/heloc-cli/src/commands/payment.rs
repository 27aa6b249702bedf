use clap::Args;
use rust_decimal::Decimal;
use serde_json::{json, Value};

use heloc_core::payment::{self, PaymentInput};
use heloc_core::types::round_money;

use crate::input;

/// Arguments for the strict payment calculator
#[derive(Args)]
pub struct PaymentArgs {
    /// Amount borrowed (USD)
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual percentage rate in percent (8.5 = 8.5%)
    #[arg(long)]
    pub apr: Option<Decimal>,

    /// Repayment term in years
    #[arg(long)]
    pub term_years: Option<Decimal>,

    /// Payment periods per year
    #[arg(long, default_value = "12")]
    pub payments_per_year: u32,

    /// Interest-only phase (principal due as a final balloon)
    #[arg(long)]
    pub interest_only: bool,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_payment(args: PaymentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let payment_input: PaymentInput = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        PaymentInput {
            principal: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            annual_rate_pct: args.apr.ok_or("--apr is required (or provide --input)")?,
            term_years: args
                .term_years
                .ok_or("--term-years is required (or provide --input)")?,
            payments_per_year: args.payments_per_year,
            interest_only: args.interest_only,
        }
    };

    let payment = payment::compute_payment(&payment_input)?;
    Ok(json!({
        "result": {
            "monthly_payment": round_money(payment),
        }
    }))
}
