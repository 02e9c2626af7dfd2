use tracing_subscriber::Layer;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const CRATE_TARGET: &str = "addin_installer";

pub fn level_for(verbosity: u8) -> LevelFilter {
    if cfg!(feature = "verbose-logging") {
        return LevelFilter::TRACE;
    }

    match verbosity {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Installs the stderr subscriber. Only this crate's events are shown.
pub fn init_logging(verbosity: u8) {
    let filter = Targets::new().with_target(CRATE_TARGET, level_for(verbosity));

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter);

    if tracing_subscriber::registry().with(layer).try_init().is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
