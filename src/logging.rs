use std::env;
use log::{self, LevelFilter, Metadata, Record};

struct SimpleLogger;

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} {} - {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: SimpleLogger = SimpleLogger;

/// Install the stderr logger. The level comes from `level` when given,
/// otherwise from the `BROADSIDE_LOG` environment variable, defaulting to
/// `info`.
pub fn init_logging(level: Option<LevelFilter>) {
    let level = level
        .or_else(|| env::var("BROADSIDE_LOG").ok().and_then(|lvl| lvl.parse().ok()))
        .unwrap_or(LevelFilter::Info);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
