use once_cell::sync::OnceCell;
use tracing_subscriber::{EnvFilter, fmt};

static TRACING_INIT: OnceCell<()> = OnceCell::new();

/// Installs the global stderr subscriber once; later calls are no-ops.
///
/// `filter` uses `EnvFilter` directive syntax. Without one, `RUST_LOG` is
/// consulted and then `info`.
pub fn init_tracing(filter: Option<&str>) {
    TRACING_INIT.get_or_init(|| {
        let filter = match filter {
            Some(directives) => EnvFilter::new(directives),
            None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        };
        // stderr keeps stdout free for the rendered status lines.
        let subscriber = fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish();

        if tracing::subscriber::set_global_default(subscriber).is_err() {
            tracing::debug!("global tracing subscriber already set");
        }
    });
}
