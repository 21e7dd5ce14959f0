//! Opt-in JSON tracing for field debugging of the keyboard extension.

#[cfg(feature = "trace")]
use std::path::Path;
#[cfg(feature = "trace")]
use std::sync::Once;

#[cfg(feature = "trace")]
use tracing_appender::rolling::{RollingFileAppender, Rotation};
#[cfg(feature = "trace")]
use tracing_subscriber::fmt::format::FmtSpan;
#[cfg(feature = "trace")]
use tracing_subscriber::EnvFilter;

#[cfg(feature = "trace")]
const DEFAULT_FILTER: &str = "keyswipe_engine=debug,keyswipe_session=debug,keyswipe_core=debug";

/// Extensions get a small disk quota.
#[cfg(feature = "trace")]
const KEEP_DAYS: usize = 3;

#[cfg(feature = "trace")]
static INIT: Once = Once::new();

/// Route engine spans and events to daily `keyswipe-trace.*.jsonl` files in
/// `log_dir`. Only the first call has an effect.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) {
    INIT.call_once(|| {
        let appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix("keyswipe-trace")
            .filename_suffix("jsonl")
            .max_log_files(KEEP_DAYS)
            .build(log_dir);
        let Ok(appender) = appender else {
            // nowhere to report it; stay silent
            return;
        };
        let (non_blocking, guard) = tracing_appender::non_blocking(appender);
        std::mem::forget(guard);

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        tracing_subscriber::fmt()
            .json()
            .with_writer(non_blocking)
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_env_filter(filter)
            .init();
    });
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &std::path::Path) {}
