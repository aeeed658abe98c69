pub mod base;
pub mod status_endpoint;

pub use base::{PollPeriod, PollSummary};
pub use status_endpoint::fetch_status_report;
