//! `log` backend for the demos. Records go to stderr so stdout carries only program output.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "\u{1B}[{}m[{:>5} {}] {}\u{1B}[0m",
                ansi_color(record.level()),
                record.level(),
                record.target(),
                record.args(),
            );
        }
    }

    fn flush(&self) {}
}

fn ansi_color(level: Level) -> u8 {
    match level {
        Level::Error => 31,
        Level::Warn => 93,
        Level::Info => 34,
        Level::Debug => 32,
        Level::Trace => 90,
    }
}

/// `LOG` accepts any level name `log` understands, case-insensitively.
fn max_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(LevelFilter::Off)
}

/// Installs the logger with its level taken from the `LOG` environment variable.
pub fn init() -> Result<(), SetLoggerError> {
    static LOGGER: StderrLogger = StderrLogger;
    log::set_logger(&LOGGER)?;
    log::set_max_level(max_level(std::env::var("LOG").ok().as_deref()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels() {
        assert_eq!(max_level(Some("DEBUG")), LevelFilter::Debug);
        assert_eq!(max_level(Some("trace")), LevelFilter::Trace);
        assert_eq!(max_level(Some("off")), LevelFilter::Off);
        assert_eq!(max_level(Some("loud")), LevelFilter::Off);
        assert_eq!(max_level(None), LevelFilter::Off);
    }

    #[test]
    fn installs_once() {
        // the logger is process-global; no other test installs it
        assert!(init().is_ok());
        assert!(init().is_err());
        let err: anyhow::Error = init().unwrap_err().into();
        assert!(!err.to_string().is_empty());
    }
}
