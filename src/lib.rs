//! Polls a remote "system status" endpoint and renders each report onto an
//! injected [`StatusDisplay`].
//!
//! ```no_run
//! # use rusty_status_poller::{MemoryDisplay, PollError, PollerConfig, StatusPoller, Variant};
//! # async fn check() -> Result<(), PollError> {
//! let poller = StatusPoller::new(PollerConfig::for_variant(Variant::Extended));
//! let mut display = MemoryDisplay::default();
//! poller.check_system(&mut display).await?;
//! # Ok(())
//! # }
//! ```

pub mod clients;
pub mod display;
pub mod error;
pub mod models;
pub mod utils;

pub use clients::{PollPeriod, PollSummary};
pub use display::{AlertColor, MemoryDisplay, StatusDisplay, TerminalDisplay};
pub use error::{ConfigError, FailureKind, PollError};
pub use models::{FailurePolicy, PollerConfig, StatusPoller, StatusReport, Variant};
pub use utils::init_tracing;
