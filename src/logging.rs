use log::{self, Level, LevelFilter, Log, Metadata, Record};

const LOG_ENV: &str = "TRACEGEN_LOG";

/// Installs the stderr logger. Stdout carries the trace, so nothing is logged there.
///
/// `verbosity` is the number of `-v` flags; with none, `TRACEGEN_LOG` decides.
pub fn init(verbosity: u8) {
    static LOGGER: SimpleLogger = SimpleLogger;
    log::set_logger(&LOGGER).ok();
    let env = std::env::var(LOG_ENV).ok();
    log::set_max_level(level_for(verbosity, env.as_deref()));
}

fn level_for(verbosity: u8, env: Option<&str>) -> LevelFilter {
    match verbosity {
        0 => match env {
            Some("off") => LevelFilter::Off,
            Some("error") => LevelFilter::Error,
            Some("info") => LevelFilter::Info,
            Some("debug") => LevelFilter::Debug,
            Some("trace") => LevelFilter::Trace,
            _ => LevelFilter::Warn,
        },
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

struct SimpleLogger;

impl Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        eprintln!("[{:>5}] {}", level_tag(record.level()), record.args());
    }

    fn flush(&self) {}
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_beat_env() {
        assert_eq!(level_for(0, None), LevelFilter::Warn);
        assert_eq!(level_for(0, Some("debug")), LevelFilter::Debug);
        assert_eq!(level_for(0, Some("off")), LevelFilter::Off);
        assert_eq!(level_for(0, Some("loud")), LevelFilter::Warn);
        assert_eq!(level_for(1, Some("error")), LevelFilter::Info);
        assert_eq!(level_for(2, None), LevelFilter::Debug);
        assert_eq!(level_for(5, None), LevelFilter::Trace);
    }
}
