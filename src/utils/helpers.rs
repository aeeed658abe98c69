use crate::models::StatusReport;

/// Renders `Latency: {ms} ms | Output Size: {kb} KB`, with `--` for a missing value.
pub fn format_metrics(report: &StatusReport) -> String {
    format!(
        "Latency: {} ms | Output Size: {} KB",
        format_number(report.latency_ms),
        format_number(report.output_size_kb)
    )
}

fn format_number(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "--".to_string(),
    }
}
