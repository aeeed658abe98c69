pub mod helpers;
pub mod logger;

pub use helpers::format_metrics;
pub use logger::init_tracing;
