mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::analyze::AnalyzeArgs;
use commands::payment::PaymentArgs;
use commands::presets::PresetsArgs;
use commands::report::ReportArgs;
use commands::schedule::{ScheduleArgs, SummaryArgs};

/// HELOC payment and amortization calculations
#[derive(Parser)]
#[command(
    name = "heloc",
    version,
    about = "HELOC payment and amortization calculator",
    long_about = "A CLI for home-equity line of credit calculations with decimal \
                  precision. Computes fixed payments, month-by-month amortization \
                  schedules with mid-term draws and interest-only phases, KPI \
                  summaries, loan-to-value, and alternative-rate comparisons."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the fixed periodic payment (strict validation)
    Payment(PaymentArgs),
    /// Generate the full amortization schedule
    Schedule(ScheduleArgs),
    /// Reduce a schedule to its headline KPI block
    Summary(SummaryArgs),
    /// Full analysis: schedule, KPIs, fees, LTV, alternative APR
    Analyze(AnalyzeArgs),
    /// List the built-in parameter presets
    Presets(PresetsArgs),
    /// Produce the short plain-text summary report
    Report(ReportArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Payment(args) => commands::payment::run_payment(args),
        Commands::Schedule(args) => commands::schedule::run_schedule(args),
        Commands::Summary(args) => commands::schedule::run_summary(args),
        Commands::Analyze(args) => commands::analyze::run_analyze(args),
        Commands::Presets(args) => commands::presets::run_presets(args),
        Commands::Report(args) => commands::report::run_report(args),
        Commands::Version => {
            println!("heloc {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
