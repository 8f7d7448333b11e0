//! Logging utilities
//!
//! A dual-sink logger behind the `log` facade: every accepted record is
//! formatted once as `<LEVEL>: <message>` and the identical line goes to
//! stdout and, when available, the configured log file. If the file cannot
//! be opened the logger degrades to console-only and says so. Level
//! filtering honors `RUST_LOG` (env_logger syntax) when set, otherwise the
//! configured level.

pub use log::{debug, error, info, trace, warn};

use crate::config::LogConfig;
use env_logger::filter::{Builder as FilterBuilder, Filter};
use log::{Log, Metadata, Record, SetLoggerError};
use std::fs::File;
use std::io::{self, Write};
use std::sync::Mutex;

/// Logger writing each record to stdout and an optional file sink
pub struct DualLogger {
    filter: Filter,
    console: Mutex<Box<dyn Write + Send>>,
    file: Option<Mutex<Box<dyn Write + Send>>>,
}

impl DualLogger {
    /// Build a logger from configuration, logging to stdout
    pub fn from_config(config: &LogConfig) -> Self {
        Self::with_console(config, Box::new(io::stdout()))
    }

    // Console sink injected so tests can capture output.
    fn with_console(config: &LogConfig, console: Box<dyn Write + Send>) -> Self {
        let mut logger = Self {
            filter: Self::build_filter(config),
            console: Mutex::new(console),
            file: None,
        };

        if let Some(path) = &config.file {
            match File::create(path) {
                Ok(file) => {
                    logger.file = Some(Mutex::new(Box::new(file) as Box<dyn Write + Send>));
                }
                Err(e) => logger.log(
                    &Record::builder()
                        .args(format_args!(
                            "failed to open log file {}: {}, will only log to stdout",
                            path.display(),
                            e
                        ))
                        .level(log::Level::Error)
                        .target(module_path!())
                        .build(),
                ),
            }
        }

        logger
    }

    fn build_filter(config: &LogConfig) -> Filter {
        let mut builder = FilterBuilder::new();
        match std::env::var("RUST_LOG") {
            Ok(spec) if !spec.is_empty() => builder.parse(&spec),
            _ => builder.filter_level(config.level_filter()),
        };
        builder.build()
    }

    /// The most verbose level this logger will emit
    pub fn max_level(&self) -> log::LevelFilter {
        self.filter.filter()
    }

    fn write_line(&self, line: &str) {
        if let Ok(mut console) = self.console.lock() {
            let _ = console.write_all(line.as_bytes());
        }
        if let Some(file) = &self.file {
            if let Ok(mut file) = file.lock() {
                let _ = file.write_all(line.as_bytes());
            }
        }
    }
}

impl Log for DualLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.filter.enabled(metadata)
    }

    fn log(&self, record: &Record) {
        if !self.filter.matches(record) {
            return;
        }
        let line = format!("{}: {}\n", record.level(), record.args());
        self.write_line(&line);
    }

    fn flush(&self) {
        if let Ok(mut console) = self.console.lock() {
            let _ = console.flush();
        }
        if let Some(file) = &self.file {
            if let Ok(mut file) = file.lock() {
                let _ = file.flush();
            }
        }
    }
}

/// Install the dual-sink logger globally
pub fn init(config: &LogConfig) -> Result<(), SetLoggerError> {
    let logger = DualLogger::from_config(config);
    log::set_max_level(logger.max_level());
    log::set_boxed_logger(Box::new(logger))?;
    log::info!("logging on");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn test_logger(config: &LogConfig, console: SharedBuf) -> DualLogger {
        DualLogger::with_console(config, Box::new(console))
    }

    fn info_config() -> LogConfig {
        LogConfig {
            level: "info".to_string(),
            file: None,
        }
    }

    #[test]
    fn both_sinks_get_the_same_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.txt");
        let console = SharedBuf::default();
        let config = LogConfig {
            level: "info".to_string(),
            file: Some(path.clone()),
        };
        let logger = test_logger(&config, console.clone());

        logger.log(
            &Record::builder()
                .args(format_args!("logging on"))
                .level(log::Level::Info)
                .target("sandbox")
                .build(),
        );
        logger.flush();

        let expected = "INFO: logging on\n";
        assert_eq!(console.contents(), expected);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), expected);
    }

    #[test]
    fn unopenable_file_falls_back_to_console_only() {
        let console = SharedBuf::default();
        let config = LogConfig {
            level: "info".to_string(),
            file: Some(PathBuf::from("/definitely/not/a/dir/log.txt")),
        };
        let logger = test_logger(&config, console.clone());

        assert!(logger.file.is_none());
        // The notice goes through the normal formatting path at ERROR level.
        assert!(console.contents().starts_with("ERROR: failed to open log file"));
        assert!(console.contents().contains("will only log to stdout"));

        logger.log(
            &Record::builder()
                .args(format_args!("still here"))
                .level(log::Level::Error)
                .target("sandbox")
                .build(),
        );
        assert!(console.contents().contains("ERROR: still here\n"));
    }

    #[test]
    fn records_below_the_level_are_dropped() {
        let console = SharedBuf::default();
        let config = LogConfig {
            level: "warn".to_string(),
            file: None,
        };
        let logger = test_logger(&config, console.clone());

        logger.log(
            &Record::builder()
                .args(format_args!("noise"))
                .level(log::Level::Info)
                .target("sandbox")
                .build(),
        );
        assert!(console.contents().is_empty());
    }

    #[test]
    fn level_prefix_matches_the_record() {
        let console = SharedBuf::default();
        let logger = test_logger(&info_config(), console.clone());

        logger.log(
            &Record::builder()
                .args(format_args!("went wrong"))
                .level(log::Level::Error)
                .target("sandbox")
                .build(),
        );
        assert_eq!(console.contents(), "ERROR: went wrong\n");
    }
}
