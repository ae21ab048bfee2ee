use crate::Result;
use std::sync::{Mutex, PoisonError};
use tracing::subscriber::set_global_default;
use tracing_log::LogTracer;
use tracing_subscriber::{fmt, prelude::*, EnvFilter, Registry};

static INSTALLED: Mutex<Installed> = Mutex::new(Installed {
    logger: false,
    subscriber: false,
});

struct Installed {
    logger: bool,
    subscriber: bool,
}

/// Logs to stdout, filtered by `RUST_LOG` (default `info`).
pub fn init_telemetry() -> Result<()> {
    install(|| {
        let fmt_layer = fmt::layer();
        let filter_layer = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new("info"))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let subscriber = Registry::default().with(filter_layer).with(fmt_layer);
        set_global_default(subscriber)?;
        Ok(())
    })
}

/// Swallows every log line, ours and the routers', so nothing is written
/// while a benchmark is timing.
pub fn init_quiet() -> Result<()> {
    install(|| {
        let fmt_layer = fmt::layer().with_writer(std::io::sink);
        let filter_layer = EnvFilter::new("off");

        let subscriber = Registry::default().with(filter_layer).with(fmt_layer);
        set_global_default(subscriber)?;
        Ok(())
    })
}

// First caller wins; later calls are no-ops. A step that failed is retried
// on the next call.
fn install(init: impl FnOnce() -> Result<()>) -> Result<()> {
    let mut installed = INSTALLED.lock().unwrap_or_else(PoisonError::into_inner);

    if !installed.logger {
        LogTracer::init()?;
        installed.logger = true;
    }

    if !installed.subscriber {
        init()?;
        installed.subscriber = true;
    }

    Ok(())
}
