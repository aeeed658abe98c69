use reqwest::{Client, Url};
use tracing::{debug, info};

use crate::error::PollError;
use crate::models::StatusReport;

/// GETs the status endpoint once and decodes the body as a [`StatusReport`].
///
/// The body is read as bytes before decoding so that a malformed payload is
/// reported as [`PollError::Parse`] and not folded into a transport error.
pub async fn fetch_status_report(client: &Client, endpoint: &Url) -> Result<StatusReport, PollError> {
    let url = endpoint.as_str();
    let transport = |source| PollError::Transport {
        url: url.to_string(),
        source,
    };

    let response = client
        .get(endpoint.clone())
        .send()
        .await
        .map_err(transport)?
        .error_for_status()
        .map_err(transport)?;

    let status_code = response.status().as_u16();
    let body = response.bytes().await.map_err(transport)?;

    debug!(url, status_code, body_len = body.len(), "Status response received");

    let report: StatusReport = serde_json::from_slice(&body).map_err(|source| PollError::Parse {
        url: url.to_string(),
        source,
    })?;

    info!(
        url,
        system_status = report.system_status.as_str(),
        silent_failure = report.silent_failure,
        "Status report decoded"
    );

    Ok(report)
}
