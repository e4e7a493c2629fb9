use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
}

pub struct Logger {
    prefix: Option<String>,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    fn format_line(&self, level: LogLevel, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let level_marker = match level {
            LogLevel::Info => "",
            LogLevel::Warn => "[WARN]",
        };
        match self.prefix {
            Some(ref prefix) => format!("[{}][{}]{} {}", timestamp, prefix, level_marker, message),
            None => format!("[{}]{} {}", timestamp, level_marker, message),
        }
    }

    pub fn log(&self, level: LogLevel, message: &str) {
        let line = self.format_line(level, message);
        match level {
            LogLevel::Info => println!("{}", line),
            LogLevel::Warn => eprintln!("{}", line),
        }
    }
}

pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

/// Messages logged before `init_logger` go to stderr without formatting,
/// so engine code stays usable from tests and benches.
pub fn log(level: LogLevel, message: &str) {
    match LOGGER.get() {
        Some(logger) => logger.log(level, message),
        None if level == LogLevel::Warn => eprintln!("{}", message),
        None => {}
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::LogLevel::Info, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::LogLevel::Warn, &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_contains_prefix_and_message() {
        let logger = Logger::new(Some("Snake".to_string()));
        let line = logger.format_line(LogLevel::Info, "food eaten");

        assert!(line.contains("[Snake]"));
        assert!(line.ends_with(" food eaten"));
        assert!(!line.contains("WARN"));
    }

    #[test]
    fn test_warn_line_is_marked() {
        let logger = Logger::new(None);
        let line = logger.format_line(LogLevel::Warn, "disk full");

        assert!(line.contains("[WARN] disk full"));
    }
}
