use chrono::Local;
use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use heloc_core::analysis::{self, FeeSchedule, HelocAnalysisInput};

use crate::commands::schedule::{resolve_request, TermArgs};
use crate::input;

/// Arguments for the full HELOC analysis
#[derive(Args)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub terms: TermArgs,

    /// Appraised home value (USD)
    #[arg(long, default_value = "0")]
    pub home_value: Decimal,

    /// Existing loan balance secured against the home (USD)
    #[arg(long, default_value = "0")]
    pub existing_loan: Decimal,

    /// Alternative APR to compare against, in percent
    #[arg(long)]
    pub alt_apr: Option<Decimal>,

    /// Application fee (USD)
    #[arg(long, default_value = "0")]
    pub application_fee: Decimal,

    /// Appraisal fee (USD)
    #[arg(long, default_value = "0")]
    pub appraisal_fee: Decimal,

    /// Origination fee (USD)
    #[arg(long, default_value = "0")]
    pub origination_fee: Decimal,

    /// Annual fee (USD)
    #[arg(long, default_value = "0")]
    pub annual_fee: Decimal,

    /// Closing costs (USD)
    #[arg(long, default_value = "0")]
    pub closing_costs: Decimal,
}

pub fn run_analyze(args: AnalyzeArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let analysis_input: HelocAnalysisInput = if let Some(ref path) = args.terms.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        let request = resolve_request(&args.terms)?;
        HelocAnalysisInput {
            terms: request.terms,
            draws: request.draws,
            fees: FeeSchedule {
                application: args.application_fee,
                appraisal: args.appraisal_fee,
                origination: args.origination_fee,
                annual: args.annual_fee,
                closing: args.closing_costs,
            },
            home_value: args.home_value,
            existing_loan: args.existing_loan,
            alternative_rate_pct: args.alt_apr,
        }
    };

    let today = Local::now().date_naive();
    let output = analysis::analyze_heloc(&analysis_input, today)?;
    Ok(serde_json::to_value(output)?)
}
