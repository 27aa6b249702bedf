use chrono::Local;
use clap::Args;
use serde_json::Value;

use heloc_core::export::{short_report, ReportInput};
use heloc_core::kpi;
use heloc_core::schedule;

use crate::commands::schedule::{resolve_request, TermArgs};

/// Arguments for the short text report
#[derive(Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub terms: TermArgs,
}

pub fn run_report(args: ReportArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let request = resolve_request(&args.terms)?;
    let today = Local::now().date_naive();

    let output = schedule::generate_schedule(&request.terms, &request.draws, today)?;
    let kpis = kpi::summarize(&output.result.periods);

    let report = short_report(&ReportInput {
        as_of: today,
        principal: request.terms.principal,
        annual_rate_pct: request.terms.annual_rate_pct,
        monthly_payment: kpis.monthly_payment,
        total_interest: kpis.total_interest,
    });
    Ok(Value::String(report))
}
