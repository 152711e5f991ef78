use core::fmt;
use std::fs::OpenOptions;
use std::sync::Once;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::fmt::format::{self, FormatEvent, FormatFields};
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, fmt as tracingfmt};

/// Formats events as "LEVEL slot [crate/module] file:line: message", with the
/// optional `slot` field pulled out of the message into its own column.
struct AlignedFormatter;

/// Visitor to extract the slot field value
struct SlotVisitor {
    slot: Option<String>,
}

impl tracing::field::Visit for SlotVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
        if field.name() == "slot" {
            self.slot = Some(format!("{:?}", value));
        }
    }
}

impl<S, N> FormatEvent<S, N> for AlignedFormatter
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: format::Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> fmt::Result {
        let metadata = event.metadata();

        let mut visitor = SlotVisitor { slot: None };
        event.record(&mut visitor);
        let has_slot = visitor.slot.is_some();
        let slot_str = visitor.slot.unwrap_or_else(|| "   ".to_string());

        let (color_level, color_reset) = match *metadata.level() {
            tracing::Level::ERROR => ("\x1b[31m", "\x1b[0m"),
            tracing::Level::WARN => ("\x1b[33m", "\x1b[0m"),
            tracing::Level::INFO => ("\x1b[32m", "\x1b[0m"),
            tracing::Level::DEBUG => ("\x1b[34m", "\x1b[0m"),
            tracing::Level::TRACE => ("\x1b[35m", "\x1b[0m"),
        };

        // "crates/dmr-pdus/src/flc/motorola.rs" becomes "TS1 [pdus/flc] motorola.rs"
        let file_path = metadata.file().unwrap_or("unknown");
        let formatted_path = if let Some(src_idx) = file_path.find("/src/") {
            let before_src = &file_path[..src_idx];
            let after_src = &file_path[src_idx + 5..];

            let crate_name = if let Some(dmr_idx) = before_src.rfind("dmr-") {
                &before_src[dmr_idx + 4..]
            } else {
                before_src.rsplit('/').next().unwrap_or("unknown")
            };

            if let Some(last_slash) = after_src.rfind('/') {
                let module_path = &after_src[..last_slash];
                let filename = &after_src[last_slash + 1..];
                let first_module = module_path.split('/').next().unwrap_or("");
                format!("{} [{}/{}] {}", slot_str, crate_name, first_module, filename)
            } else {
                format!("{} [{}] {}", slot_str, crate_name, after_src)
            }
        } else {
            file_path.to_string()
        };

        let location = format!(
            "{}{:<5}{} {}:{}:",
            color_level,
            metadata.level(),
            color_reset,
            formatted_path,
            metadata.line().unwrap_or(0)
        );

        let mut message_buf = String::new();
        let message_writer = format::Writer::new(&mut message_buf);
        ctx.field_format().format_fields(message_writer, event)?;

        // The slot already has its own column
        if has_slot {
            if let Some(slot_idx) = message_buf.find("slot=") {
                if let Some(space_idx) = message_buf[slot_idx..].find(' ') {
                    message_buf.replace_range(slot_idx..slot_idx + space_idx + 1, "");
                } else {
                    message_buf.truncate(slot_idx);
                }
            }
        }

        write!(writer, "{:<width$} {}", location, message_buf, width = 60)?;
        writeln!(writer)
    }
}

static INIT_LOG: Once = Once::new();

/// Sets up logging with maximum verbosity (trace level)
/// Mainly for unit tests
pub fn setup_logging_verbose() {
    setup_logging(EnvFilter::new("trace"), None);
}

/// Sets up default logging to stdout and optionally, a verbose log file
/// Returns a guard, that needs to be kept alive for logging to file to work
pub fn setup_logging_default(verbose_logfile: Option<String>) -> Option<WorkerGuard> {
    let logfile_and_filter = verbose_logfile.map(|file| (file, get_default_logfile_filter()));
    setup_logging(get_default_stdout_filter(), logfile_and_filter)
}

pub fn get_default_stdout_filter() -> EnvFilter {
    // RUST_LOG overrides the built-in defaults
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    EnvFilter::new("info")
        .add_directive("dmr_core=warn".parse().expect("static directive"))
        .add_directive("dmr_pdus=info".parse().expect("static directive"))
}

fn get_default_logfile_filter() -> EnvFilter {
    EnvFilter::new("debug")
}

/// Sets up logging to stdout and optionally, a verbose log file
/// If an output file is requested, returns Some<WorkerGuard>. Keep this value alive
/// or logging to file may cease working. If no output file is provided, returns None.
fn setup_logging(stdout_filter: EnvFilter, outfile: Option<(String, EnvFilter)>) -> Option<WorkerGuard> {
    if let Some((outfile, outfile_filter)) = outfile {
        let file = match OpenOptions::new().create(true).append(true).open(&outfile) {
            Ok(f) => f,
            Err(e) => {
                eprintln!("Failed to open log file {}: {}, logging to stdout only", outfile, e);
                return setup_logging(stdout_filter, None);
            }
        };
        let (file_writer, guard) = tracing_appender::non_blocking(file);

        INIT_LOG.call_once(|| {
            let file_layer = tracingfmt::layer()
                .event_format(AlignedFormatter)
                .with_writer(file_writer)
                .with_ansi(false);
            let stdout_layer = tracingfmt::layer().event_format(AlignedFormatter);

            tracing_subscriber::registry()
                .with(file_layer.with_filter(outfile_filter))
                .with(stdout_layer.with_filter(stdout_filter))
                .init();
        });

        Some(guard)
    } else {
        INIT_LOG.call_once(|| {
            let stdout_layer = tracingfmt::layer().event_format(AlignedFormatter);

            tracing_subscriber::registry()
                .with(stdout_layer.with_filter(stdout_filter))
                .init();
        });
        None
    }
}
