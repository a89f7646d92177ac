use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable holding the log level (`error`, `warn`, `info`, `debug`, `trace` or `off`).
const LOG_LEVEL_VARIABLE: &str = "IRQPOLICY_LOG";

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] ({}) {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

pub fn init() {
    let level = level_from(std::env::var(LOG_LEVEL_VARIABLE).ok().as_deref());
    // a logger can only be installed once per process; a second call keeps the first one
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn level_from(value: Option<&str>) -> LevelFilter {
    match value {
        Some(text) => text.trim().parse().unwrap_or(LevelFilter::Warn),
        None => LevelFilter::Warn,
    }
}
