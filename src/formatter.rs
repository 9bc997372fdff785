//! Custom tracing formatter with a level-generation counter

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use time::macros::format_description;
use time::{format_description::FormatItem, OffsetDateTime};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, FormattedFields};
use tracing_subscriber::registry::LookupSpan;

/// Global atomic counter of generated levels
static LEVEL_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Maximum value for level counter display (8-bit hex)
const LEVEL_DISPLAY_MASK: u64 = 0xFF;

const TIMESTAMP_FORMAT: &[FormatItem<'static>] = format_description!("[hour]:[minute]:[second].[subsecond digits:5]");

/// A custom formatter that prefixes each line with a timestamp and the current level number
///
/// Re-implementation of the Full formatter; the level number makes it easy to tell which
/// generated maze a query log line belongs to.
pub struct CustomFormatter;

impl<S, N> FormatEvent<S, N> for CustomFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(&self, ctx: &FmtContext<'_, S, N>, mut writer: Writer<'_>, event: &Event<'_>) -> fmt::Result {
        let meta = event.metadata();

        // 1) Timestamp (dimmed when ANSI)
        let now = OffsetDateTime::now_utc();
        let formatted_time = now.format(&TIMESTAMP_FORMAT).map_err(|e| {
            eprintln!("Failed to format timestamp: {}", e);
            fmt::Error
        })?;
        write_dimmed(&mut writer, formatted_time)?;
        writer.write_char(' ')?;

        // 2) Level counter, dim when ANSI
        let level = level_count() & LEVEL_DISPLAY_MASK;
        if writer.has_ansi_escapes() {
            write!(writer, "\x1b[2mL{:02X}\x1b[0m ", level)?;
        } else {
            write!(writer, "L{:02X} ", level)?;
        }

        // 3) Colored 5-char verbosity
        write_colored_level(&mut writer, meta.level())?;
        writer.write_char(' ')?;

        // 4) Span scope chain
        if let Some(scope) = ctx.event_scope() {
            let mut saw_any = false;
            for span in scope.from_root() {
                write_bold(&mut writer, span.metadata().name())?;
                saw_any = true;
                let ext = span.extensions();
                if let Some(fields) = &ext.get::<FormattedFields<N>>() {
                    if !fields.is_empty() {
                        write_bold(&mut writer, "{")?;
                        write!(writer, "{}", fields)?;
                        write_bold(&mut writer, "}")?;
                    }
                }
                writer.write_char(':')?;
            }
            if saw_any {
                writer.write_char(' ')?;
            }
        }

        // 5) Target
        write_dimmed(&mut writer, format_args!("{}:", meta.target()))?;
        writer.write_char(' ')?;

        // 6) Event fields
        ctx.format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

fn write_colored_level(writer: &mut Writer<'_>, level: &Level) -> fmt::Result {
    if writer.has_ansi_escapes() {
        let (color, text) = match *level {
            Level::TRACE => ("\x1b[35m", "TRACE"),
            Level::DEBUG => ("\x1b[34m", "DEBUG"),
            Level::INFO => ("\x1b[32m", " INFO"),
            Level::WARN => ("\x1b[33m", " WARN"),
            Level::ERROR => ("\x1b[31m", "ERROR"),
        };
        write!(writer, "{}{}\x1b[0m", color, text)
    } else {
        write!(writer, "{:>5}", level.as_str())
    }
}

fn write_dimmed(writer: &mut Writer<'_>, s: impl fmt::Display) -> fmt::Result {
    if writer.has_ansi_escapes() {
        write!(writer, "\x1b[2m{}\x1b[0m", s)
    } else {
        write!(writer, "{}", s)
    }
}

fn write_bold(writer: &mut Writer<'_>, s: impl fmt::Display) -> fmt::Result {
    if writer.has_ansi_escapes() {
        write!(writer, "\x1b[1m{}\x1b[0m", s)
    } else {
        write!(writer, "{}", s)
    }
}

/// Increment the global level counter by 1
///
/// Called once per successfully generated world.
pub fn increment_level() {
    LEVEL_COUNTER.fetch_add(1, Ordering::Relaxed);
}

/// Get the number of levels generated so far
pub fn level_count() -> u64 {
    LEVEL_COUNTER.load(Ordering::Relaxed)
}
