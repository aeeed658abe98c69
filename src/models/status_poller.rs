use reqwest::Client;
use tracing::error;

use crate::clients::status_endpoint::fetch_status_report;
use crate::display::{AlertColor, StatusDisplay};
use crate::error::PollError;
use crate::models::poller_config::{FailurePolicy, PollerConfig, WARNING_MARKER};
use crate::models::StatusReport;
use crate::utils::format_metrics;

/// Polls one status endpoint and renders each report onto a [`StatusDisplay`].
///
/// A single `reqwest::Client` is kept for the poller's lifetime so repeated
/// checks reuse pooled connections.
#[derive(Clone, Debug)]
pub struct StatusPoller {
    pub(crate) client: Client,
    pub(crate) config: PollerConfig,
}

impl StatusPoller {
    pub fn new(config: PollerConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: PollerConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &PollerConfig {
        &self.config
    }

    /// Fetches the current report and renders it.
    ///
    /// On failure the display is left exactly as it was. Under
    /// [`FailurePolicy::LogAndContinue`] the error is also logged here; either
    /// way it is returned so the caller can react.
    pub async fn check_system<D>(&self, display: &mut D) -> Result<StatusReport, PollError>
    where
        D: StatusDisplay + ?Sized,
    {
        match fetch_status_report(&self.client, &self.config.endpoint).await {
            Ok(report) => {
                self.render(&report, display);
                Ok(report)
            }
            Err(err) => {
                if self.config.failure_policy == FailurePolicy::LogAndContinue {
                    error!(url = err.url(), kind = %err.kind(), "Error: {}", err);
                }
                Err(err)
            }
        }
    }

    /// Writes `report` to the display regions this poller's variant owns.
    pub fn render<D>(&self, report: &StatusReport, display: &mut D)
    where
        D: StatusDisplay + ?Sized,
    {
        let variant = self.config.variant;

        display.set_status(&report.system_status);

        if variant.renders_metrics() {
            display.set_metrics(&format_metrics(report));
        }

        if report.silent_failure {
            display.set_alert(WARNING_MARKER, AlertColor::Red);
        } else {
            display.set_alert(variant.clear_marker(), AlertColor::Green);
        }

        display.set_explanation(&report.explanation);
    }
}
