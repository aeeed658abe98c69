pub mod poller_config;
pub mod status_poller;
pub mod status_report;

pub use poller_config::{FailurePolicy, PollerConfig, Variant};
pub use status_poller::StatusPoller;
pub use status_report::StatusReport;
