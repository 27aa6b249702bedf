use serde_json::Value;

/// Print just the key answer value from the output.
///
/// Heuristic: look for well-known result fields in order of priority,
/// then fall back to the first scalar field in the result object.
pub fn print_minimal(value: &Value) {
    // Try to extract the "result" envelope
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    // Priority list of key output fields
    let priority_keys = [
        "monthly_payment",
        "total_interest",
        "loan_to_value",
        "remaining_balance",
        "periodic_payment",
        "total_paid",
    ];

    if let Value::Object(map) = result_obj {
        // Nested KPI block first (summary/analysis outputs)
        let kpi_obj = match map.get("kpis") {
            Some(Value::Object(kpis)) => kpis,
            _ => map,
        };
        for key in &priority_keys {
            if let Some(val) = kpi_obj.get(*key) {
                if !val.is_null() {
                    println!("{}", format_minimal(val));
                    return;
                }
            }
        }

        // Fall back to first scalar field
        for (key, val) in map {
            if !val.is_array() && !val.is_object() && !val.is_null() {
                println!("{}: {}", key, format_minimal(val));
                return;
            }
        }
    }

    // Not an object, just print directly
    println!("{}", format_minimal(result_obj));
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
