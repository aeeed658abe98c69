use std::io;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use rusty_status_poller::{
    FailurePolicy, PollPeriod, PollerConfig, StatusPoller, TerminalDisplay, Variant, init_tracing,
};

/// Periodically check a system status endpoint and print what it reports.
#[derive(Debug, Parser)]
#[command(name = "status-poller", version)]
struct Args {
    /// Status endpoint URL. Defaults to http://localhost:5000/status.
    #[arg(long, env = "STATUS_POLLER_ENDPOINT")]
    endpoint: Option<String>,

    /// `basic` (status, alert, explanation) or `extended` (adds metrics).
    #[arg(long, env = "STATUS_POLLER_VARIANT", default_value = "basic")]
    variant: Variant,

    /// Override the variant's failure handling: `log` or `propagate`.
    #[arg(long)]
    on_failure: Option<FailurePolicy>,

    /// Seconds between checks.
    #[arg(long, default_value_t = 5)]
    interval_secs: u64,

    /// Stop after this many checks. Polls until Ctrl-C when omitted.
    #[arg(long, conflicts_with = "once")]
    count: Option<usize>,

    /// Check once and exit.
    #[arg(long)]
    once: bool,

    /// Log filter directives, e.g. `debug` or `rusty_status_poller=trace`.
    #[arg(long)]
    log_filter: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.log_filter.as_deref());

    let mut config = PollerConfig::for_variant(args.variant);
    if let Some(endpoint) = args.endpoint.as_deref() {
        config = config.with_endpoint(endpoint)?;
    }
    if let Some(policy) = args.on_failure {
        config = config.with_failure_policy(policy);
    }
    let period = PollPeriod::from_secs(args.interval_secs)?;
    let max_polls = if args.once { Some(1) } else { args.count };

    let poller = StatusPoller::new(config);
    let mut display = TerminalDisplay::new(io::stdout());

    tokio::select! {
        result = poller.poll_every(&mut display, period, max_polls) => {
            let summary = result.context("status polling stopped")?;
            info!(polls = summary.polls, failures = summary.failures, "Status polling finished");
        }
        signal = tokio::signal::ctrl_c() => {
            signal.context("failed to listen for Ctrl-C")?;
            info!("Interrupted, stopping status polling");
        }
    }

    Ok(())
}
