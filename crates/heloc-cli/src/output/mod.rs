pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::Value;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// The period rows inside an output value, if any.
///
/// Schedule-shaped results carry them as `result.periods` (engine
/// envelope) or `result.schedule` (analysis output).
pub fn period_rows(value: &Value) -> Option<&Vec<Value>> {
    let result = value.as_object()?.get("result")?.as_object()?;
    for key in ["periods", "schedule"] {
        if let Some(Value::Array(rows)) = result.get(key) {
            if !rows.is_empty() {
                return Some(rows);
            }
        }
    }
    None
}
