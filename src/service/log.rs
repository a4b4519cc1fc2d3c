use std::io;

use tracing::warn;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::OffsetTime;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::LogConfig;

const FALLBACK_TIME_FORMAT: &str = "[year]-[month]-[day] [hour]:[minute]:[second]";

/// Logs go to stderr; stdout is reserved for the greeting lines.
///
/// Must be called before the runtime spawns any thread, the local offset
/// lookup fails otherwise.
pub fn init_logger(config: &LogConfig) -> WorkerGuard {
    let local_offset = time::UtcOffset::current_local_offset();

    // the subscriber lives for the whole process
    let format: &'static str = Box::leak(config.time_format.clone().into_boxed_str());
    let (time_format, format_err) = match time::format_description::parse(format) {
        Ok(f) => (f, None),
        Err(e) => (
            time::format_description::parse(FALLBACK_TIME_FORMAT)
                .unwrap_or_default(),
            Some(e),
        ),
    };

    let (s, s_guard) = tracing_appender::non_blocking(io::stderr());

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(s.with_max_level(config.max_level.as_tracing_level()));

    let (offset, offset_err) = match local_offset {
        Ok(ofs) => (ofs, None),
        Err(e) => (time::UtcOffset::UTC, Some(e)),
    };

    let timer = OffsetTime::new(offset, time_format);

    tracing_subscriber::registry()
        .with(stderr_layer.with_timer(timer))
        .init();

    if let Some(e) = offset_err {
        warn!("Failed to get local time offset: {}, using UTC", e);
    }

    if let Some(e) = format_err {
        warn!(
            "Invalid log time format '{}': {}, using '{}'",
            config.time_format, e, FALLBACK_TIME_FORMAT
        );
    }

    s_guard
}
