use tracing_subscriber::fmt::time::OffsetTime;
use tracing_subscriber::fmt::MakeWriter;

/// Installs a global `tracing` subscriber writing to `writer`. Events are printed without their
/// target, with source location and a UTC wall-clock timer.
///
/// The library never installs a subscriber on its own. Returns an error if a global subscriber
/// has already been set.
pub fn setup_log<W>(writer: W) -> anyhow::Result<()>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let timer = OffsetTime::new(
        time::UtcOffset::UTC,
        time::macros::format_description!("[hour]:[minute]:[second].[subsecond digits:6]"),
    );
    tracing_subscriber::fmt()
        .event_format(
            tracing_subscriber::fmt::format()
                .with_target(false)
                .with_source_location(true)
                .with_timer(timer),
        )
        .with_writer(writer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}

/// Logs to stderr; safe to call from every test.
#[cfg(test)]
pub(crate) fn setup_test_log() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        // Another test harness may have installed a subscriber already; that is fine.
        let _ = setup_log(std::io::stderr);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use tracing::warn;

    #[test]
    fn setup_log_only_once() {
        setup_test_log();
        warn!("logged from setup_log_only_once()");
        assert!(setup_log(io::stderr).is_err());
    }
}
