use chrono::Local;
use clap::Args;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{json, Value};

use heloc_core::kpi;
use heloc_core::schedule;
use heloc_core::types::{DrawEvent, LoanTerms};

use crate::input;

/// Loan terms shared by the schedule-producing commands
#[derive(Args)]
pub struct TermArgs {
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

    /// Schedule anchor date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub start_date: Option<String>,

    /// Mid-term draw as MONTH:AMOUNT (repeatable, months are 1-based)
    #[arg(long = "draw")]
    pub draws: Vec<String>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for schedule generation
#[derive(Args)]
pub struct ScheduleArgs {
    #[command(flatten)]
    pub terms: TermArgs,

    /// Best-effort mode: degrade invalid input to an empty schedule
    #[arg(long)]
    pub preview: bool,

    /// Only include the first N periods in the output
    #[arg(long)]
    pub limit: Option<usize>,
}

/// Arguments for the KPI summary
#[derive(Args)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub terms: TermArgs,
}

/// JSON-file shape for schedule-producing commands.
#[derive(Deserialize)]
pub struct ScheduleRequest {
    pub terms: LoanTerms,
    #[serde(default)]
    pub draws: Vec<DrawEvent>,
}

/// Resolve a request from file, stdin, or flags (in that priority order).
pub fn resolve_request(args: &TermArgs) -> Result<ScheduleRequest, Box<dyn std::error::Error>> {
    if let Some(ref path) = args.input {
        return Ok(input::read_json(path)?);
    }
    if let Some(data) = input::read_stdin()? {
        return Ok(serde_json::from_value(data)?);
    }

    let start_date = match args.start_date {
        Some(ref raw) => Some(input::parse_date(raw)?),
        None => None,
    };
    Ok(ScheduleRequest {
        terms: LoanTerms {
            principal: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            annual_rate_pct: args.apr.ok_or("--apr is required (or provide --input)")?,
            term_years: args
                .term_years
                .ok_or("--term-years is required (or provide --input)")?,
            payments_per_year: args.payments_per_year,
            interest_only: args.interest_only,
            start_date,
        },
        draws: input::parse_draws(&args.draws)?,
    })
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let request = resolve_request(&args.terms)?;
    let today = Local::now().date_naive();

    let mut output = if args.preview {
        schedule::preview_schedule(&request.terms, &request.draws, today)
    } else {
        schedule::generate_schedule(&request.terms, &request.draws, today)?
    };

    if let Some(limit) = args.limit {
        output.result.periods.truncate(limit);
    }
    Ok(serde_json::to_value(output)?)
}

pub fn run_summary(args: SummaryArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let request = resolve_request(&args.terms)?;
    let today = Local::now().date_naive();

    let output = schedule::generate_schedule(&request.terms, &request.draws, today)?;
    let kpis = kpi::summarize(&output.result.periods);
    Ok(json!({
        "result": kpis,
        "methodology": "KPI Summary over Amortization Schedule",
        "warnings": output.warnings,
    }))
}
