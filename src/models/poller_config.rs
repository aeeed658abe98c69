use std::str::FromStr;

use reqwest::Url;

use crate::error::ConfigError;

/// Endpoint both variants target unless configured otherwise.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/status";

pub const WARNING_MARKER: &str = "⚠️ Silent Failure Detected";

/// Which flavour of status page is being driven.
///
/// `Basic` renders status, alert and explanation and swallows failures after
/// logging them. `Extended` also renders the metrics line and hands failures
/// back to the caller untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Basic,
    Extended,
}

/// What `check_system` does with a failed poll beyond returning it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Log the failure at error level.
    LogAndContinue,
    /// Leave reporting to the caller.
    Propagate,
}

impl Variant {
    pub fn renders_metrics(self) -> bool {
        matches!(self, Variant::Extended)
    }

    pub fn clear_marker(self) -> &'static str {
        match self {
            Variant::Basic => "No Issues Detected",
            Variant::Extended => "No issues detected (Within Baseline)",
        }
    }

    pub fn failure_policy(self) -> FailurePolicy {
        match self {
            Variant::Basic => FailurePolicy::LogAndContinue,
            Variant::Extended => FailurePolicy::Propagate,
        }
    }
}

impl FromStr for Variant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "basic" => Ok(Variant::Basic),
            "extended" => Ok(Variant::Extended),
            _ => Err(ConfigError::UnknownVariant(s.to_string())),
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Basic => write!(f, "basic"),
            Variant::Extended => write!(f, "extended"),
        }
    }
}

impl FromStr for FailurePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "log" | "log-and-continue" => Ok(FailurePolicy::LogAndContinue),
            "propagate" => Ok(FailurePolicy::Propagate),
            _ => Err(ConfigError::UnknownFailurePolicy(s.to_string())),
        }
    }
}

/// Settings for a [`StatusPoller`](crate::StatusPoller).
///
/// Start from [`PollerConfig::for_variant`] and override what differs:
///
/// ```
/// # use rusty_status_poller::{ConfigError, PollerConfig, Variant};
/// # fn main() -> Result<(), ConfigError> {
/// let config = PollerConfig::for_variant(Variant::Extended)
///     .with_endpoint("https://status.example.com/status")?;
/// assert!(config.variant.renders_metrics());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PollerConfig {
    pub endpoint: Url,
    pub variant: Variant,
    pub failure_policy: FailurePolicy,
}

impl PollerConfig {
    pub fn for_variant(variant: Variant) -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL"),
            variant,
            failure_policy: variant.failure_policy(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Result<Self, ConfigError> {
        self.endpoint = parse_endpoint(endpoint)?;
        Ok(self)
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self::for_variant(Variant::default())
    }
}

fn parse_endpoint(endpoint: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(endpoint.trim()).map_err(|e| ConfigError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::UnsupportedScheme(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_defaults() {
        let basic = PollerConfig::for_variant(Variant::Basic);
        assert_eq!(basic.endpoint.as_str(), DEFAULT_ENDPOINT);
        assert_eq!(basic.failure_policy, FailurePolicy::LogAndContinue);
        assert!(!basic.variant.renders_metrics());

        let extended = PollerConfig::for_variant(Variant::Extended);
        assert_eq!(extended.failure_policy, FailurePolicy::Propagate);
        assert!(extended.variant.renders_metrics());
    }

    #[test]
    fn clear_marker_wording_differs() {
        assert_eq!(Variant::Basic.clear_marker(), "No Issues Detected");
        assert_eq!(
            Variant::Extended.clear_marker(),
            "No issues detected (Within Baseline)"
        );
    }

    #[test]
    fn parses_variant_names() {
        assert_eq!(" Extended ".parse::<Variant>(), Ok(Variant::Extended));
        assert_eq!("basic".parse::<Variant>(), Ok(Variant::Basic));
        assert_eq!(
            "fancy".parse::<Variant>(),
            Err(ConfigError::UnknownVariant("fancy".into()))
        );
        assert_eq!(Variant::Extended.to_string(), "extended");
    }

    #[test]
    fn parses_failure_policy() {
        assert_eq!("log".parse::<FailurePolicy>(), Ok(FailurePolicy::LogAndContinue));
        assert_eq!("PROPAGATE".parse::<FailurePolicy>(), Ok(FailurePolicy::Propagate));
        assert!("retry".parse::<FailurePolicy>().is_err());
    }

    #[test]
    fn endpoint_override_is_validated() {
        let config = PollerConfig::default()
            .with_endpoint("https://status.example.com/status")
            .unwrap();
        assert_eq!(config.endpoint.host_str(), Some("status.example.com"));

        assert!(matches!(
            PollerConfig::default().with_endpoint("not a url"),
            Err(ConfigError::InvalidEndpoint { .. })
        ));
        assert_eq!(
            PollerConfig::default().with_endpoint("ftp://example.com/status"),
            Err(ConfigError::UnsupportedScheme("ftp".into()))
        );
    }

    #[test]
    fn policy_can_be_overridden() {
        let config = PollerConfig::for_variant(Variant::Extended)
            .with_failure_policy(FailurePolicy::LogAndContinue);
        assert_eq!(config.failure_policy, FailurePolicy::LogAndContinue);
        assert_eq!(config.variant, Variant::Extended);
    }
}
