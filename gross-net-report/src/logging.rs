use chrono::Local;
use std::io::{self, IsTerminal};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    EnvFilter,
    fmt::{
        FmtContext,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
};

/// One line per event: timestamp, level, source location, fields.
///
/// Source paths are printed relative to the crate's `src/` directory.
struct RunLineFormat;

impl RunLineFormat {
    fn level_colour(level: Level) -> &'static str {
        match level {
            Level::ERROR => "\x1b[1;31m",
            Level::WARN => "\x1b[1;33m",
            Level::INFO => "\x1b[1;32m",
            Level::DEBUG => "\x1b[1;34m",
            Level::TRACE => "\x1b[1;35m",
        }
    }
}

impl<S, N> FormatEvent<S, N> for RunLineFormat
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
        let meta = event.metadata();
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let location = meta
            .file()
            .zip(meta.line())
            .map(|(file, line)| (file.strip_prefix("src/").unwrap_or(file), line));

        if writer.has_ansi_escapes() {
            write!(
                writer,
                "\x1b[2m{timestamp}\x1b[0m {}{:>5}\x1b[0m ",
                Self::level_colour(*meta.level()),
                meta.level()
            )?;
            if let Some((file, line)) = location {
                write!(writer, "\x1b[36m{file}:{line}\x1b[0m ")?;
            }
        } else {
            write!(writer, "{timestamp} {:>5} ", meta.level())?;
            if let Some((file, line)) = location {
                write!(writer, "{file}:{line} ")?;
            }
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

fn make_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initializes logging. Call once at startup.
///
/// - Output goes to stderr; stdout carries the CSV echo.
/// - Colored when stderr is a terminal, plain otherwise.
/// - Level: INFO by default, or overridden by the RUST_LOG env var.
///
/// Calling it again is a no-op.
pub fn init_default_logging() {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .event_format(RunLineFormat)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr);

    let _ = tracing_subscriber::registry()
        .with(make_filter())
        .with(stderr_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_initialization_is_harmless() {
        init_default_logging();
        init_default_logging();
        tracing::info!("logging initialized twice");
    }

    #[test]
    fn every_level_has_a_colour() {
        for level in [
            Level::ERROR,
            Level::WARN,
            Level::INFO,
            Level::DEBUG,
            Level::TRACE,
        ] {
            assert!(RunLineFormat::level_colour(level).starts_with("\x1b["));
        }
    }
}
