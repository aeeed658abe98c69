use serde::{Deserialize, Serialize};

/// Health payload returned by the status endpoint.
///
/// Consumed once per poll and dropped after rendering. Fields the endpoint
/// adds beyond these are ignored.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StatusReport {
    pub system_status: String,
    pub silent_failure: bool,
    pub explanation: String,
    // Only the extended endpoint reports these.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_size_kb: Option<f64>,
}
