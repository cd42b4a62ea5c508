use chrono::Local;
use tracing::{Event, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// Console line format: `<emoji> LEVEL [HH:MM:SS]: message`.
/// Events from other crates get their target appended so transport noise is attributable.
pub struct ConsoleFormatter;

impl<S, N> FormatEvent<S, N> for ConsoleFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();
        let timestamp = Local::now().format("%H:%M:%S");
        let (emoji, level_str) = level_label(metadata.level());

        write!(writer, "{} {} [{}]: ", emoji, level_str, timestamp)?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        if !metadata.target().starts_with(env!("CARGO_CRATE_NAME")) {
            write!(writer, " ({})", metadata.target())?;
        }

        writeln!(writer)
    }
}

fn level_label(level: &tracing::Level) -> (&'static str, &'static str) {
    match *level {
        tracing::Level::TRACE => ("🔬", "TRACE"),
        tracing::Level::DEBUG => ("🐛", "DEBUG"),
        tracing::Level::INFO => ("ℹ️ ", "INFO"),
        tracing::Level::WARN => ("⚠️ ", "WARN"),
        tracing::Level::ERROR => ("❌", "ERROR"),
    }
}

/// Default filter directive. `RUST_LOG` takes precedence when set.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "debtsimpl=debug,warn"
    } else {
        "debtsimpl=info,warn"
    }
}

/// Install the global subscriber. Safe to call more than once; later calls are ignored.
pub fn init_tracing(verbose: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let _ = tracing_subscriber::fmt()
        .event_format(ConsoleFormatter)
        .with_env_filter(filter)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_labels() {
        assert_eq!(level_label(&tracing::Level::ERROR), ("❌", "ERROR"));
        assert_eq!(level_label(&tracing::Level::INFO).1, "INFO");
    }

    #[test]
    fn test_default_filter_directives_parse() {
        for verbose in [true, false] {
            assert!(EnvFilter::try_new(default_filter(verbose)).is_ok());
        }
        assert!(default_filter(true).contains("debtsimpl=debug"));
    }
}
