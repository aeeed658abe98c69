use std::time::Duration;

use tokio::time::{MissedTickBehavior, interval};
use tracing::{info, warn};

use crate::{
    display::StatusDisplay,
    error::{ConfigError, PollError},
    models::{poller_config::FailurePolicy, status_poller::StatusPoller},
};

/// Outcome of a bounded [`StatusPoller::poll_every`] run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PollSummary {
    pub polls: usize,
    pub failures: usize,
}

/// Time between scheduled checks. Never zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PollPeriod(Duration);

impl PollPeriod {
    pub fn new(period: Duration) -> Result<Self, ConfigError> {
        if period.is_zero() {
            return Err(ConfigError::ZeroInterval);
        }
        Ok(Self(period))
    }

    pub fn from_secs(secs: u64) -> Result<Self, ConfigError> {
        Self::new(Duration::from_secs(secs))
    }

    pub fn as_duration(self) -> Duration {
        self.0
    }
}

impl StatusPoller {
    /// Runs `check_system` now and then once per `period`.
    ///
    /// Checks never overlap: a tick that comes due while a request is still in
    /// flight is skipped. With `max_polls = None` this only returns on a
    /// propagated failure.
    pub async fn poll_every<D>(
        &self,
        display: &mut D,
        period: PollPeriod,
        max_polls: Option<usize>,
    ) -> Result<PollSummary, PollError>
    where
        D: StatusDisplay + ?Sized,
    {
        let period = period.as_duration();
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut summary = PollSummary::default();

        info!(
            url = self.config.endpoint.as_str(),
            variant = %self.config.variant,
            ?period,
            "Starting status polling"
        );

        while max_polls.is_none_or(|max| summary.polls < max) {
            ticker.tick().await;
            summary.polls += 1;

            if let Err(err) = self.check_system(display).await {
                summary.failures += 1;
                match self.config.failure_policy {
                    FailurePolicy::LogAndContinue => continue,
                    FailurePolicy::Propagate => {
                        warn!(polls = summary.polls, kind = %err.kind(), "Stopping status polling");
                        return Err(err);
                    }
                }
            }
        }

        Ok(summary)
    }
}
