use std::io::Write;
use std::time::Instant;

use anstyle::{AnsiColor, Color, Style};
use log::{Level, Log, Metadata, Record};
use parking_lot::Mutex;

use crate::messages::style::Styler;
use crate::theme;

struct CbfLogger {
    file: Option<Mutex<std::fs::File>>,
    filter: log::LevelFilter,
    styler: Styler,
    start: Instant,
}

impl Log for CbfLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.filter
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let level = self
            .styler
            .apply(level_style(record.level()), &record.level().to_string());
        eprintln!("[{level}] {}", record.args());

        if let Some(ref file) = self.file {
            let elapsed = self.start.elapsed().as_secs_f64();
            let _ = writeln!(
                file.lock(),
                "[{elapsed:.3}s] [{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        if let Some(ref file) = self.file {
            let _ = file.lock().flush();
        }
    }
}

/// Initialize the global logger. Must be called once before any logging.
///
/// The level filter is read from `RUST_LOG` and defaults to `info`.
///
/// # Panics
///
/// Panics if called more than once.
pub fn init(log_file: Option<std::fs::File>) {
    let filter = std::env::var("RUST_LOG")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(log::LevelFilter::Info);

    let logger = CbfLogger {
        file: log_file.map(Mutex::new),
        filter,
        styler: Styler::detect(),
        start: Instant::now(),
    };

    log::set_boxed_logger(Box::new(logger)).expect("logger already initialized");
    log::set_max_level(filter);
}

/// Terminal style for a log level.
#[must_use]
pub fn level_style(level: Level) -> Style {
    match level {
        Level::Error => theme::ERROR,
        Level::Warn => Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))),
        Level::Info => Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))),
        Level::Debug | Level::Trace => theme::DIM,
    }
}
