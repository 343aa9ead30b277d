//! Forwards the bridge's diagnostics to a logger implemented by the host app.

use std::sync::{Arc, OnceLock};

/// Log sink implemented by the host app to receive the bridge's diagnostics.
///
/// # Examples
///
/// Implementing the `Logger` trait:
///
/// ```rust
/// use scanbridge_core::logger::{Logger, LogLevel};
///
/// struct MyLogger;
///
/// impl Logger for MyLogger {
///     fn log(&self, level: LogLevel, message: String) {
///         println!("[{:?}] {}", level, message);
///     }
/// }
/// ```
///
/// ## Kotlin
///
/// ```kotlin
/// object ScanBridgeLogger : Logger {
///     override fun log(level: LogLevel, message: String) {
///         Log.println(level.toAndroidPriority(), "ScanBridge", message)
///     }
/// }
///
/// // Once, before creating the bridge.
/// setLogger(ScanBridgeLogger)
/// ```
#[uniffi::export(with_foreign)]
pub trait Logger: Sync + Send {
    /// Receives one formatted record.
    ///
    /// # Arguments
    ///
    /// * `level` - The severity of the record.
    /// * `message` - The formatted message, without level or target prefix.
    fn log(&self, level: LogLevel, message: String);
}

/// Severity of a forwarded record. Maps one to one onto the host platform's log priorities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum LogLevel {
    /// Registry transitions and per-call detail.
    Trace,
    /// Ignored calls and no-op resolutions.
    Debug,
    /// Session launches, completions and cancellations.
    Info,
    /// Failed SDK initialization and samples with no pending session.
    Warn,
    /// Broken relay contracts.
    Error,
}

impl From<log::Level> for LogLevel {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Self::Error,
            log::Level::Warn => Self::Warn,
            log::Level::Info => Self::Info,
            log::Level::Debug => Self::Debug,
            log::Level::Trace => Self::Trace,
        }
    }
}

/// `log` backend that hands records (including `tracing` events, through its `log` feature)
/// to the foreign logger.
struct ForeignLogger;

impl log::Log for ForeignLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        should_forward(metadata.level(), metadata.target())
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        match LOGGER_INSTANCE.get() {
            Some(logger) => logger.log(record.level().into(), record.args().to_string()),
            None => eprintln!("Logger not set: {}", record.args()),
        }
    }

    fn flush(&self) {}
}

/// Decides whether a record reaches the foreign logger.
///
/// Debug and trace output is only forwarded for this workspace's own targets.
///
/// # Arguments
///
/// * `level` - The level of the record.
/// * `target` - The record's target, the emitting module path unless overridden.
///
/// # Returns
///
/// `true` if the record should be forwarded.
fn should_forward(level: log::Level, target: &str) -> bool {
    level <= log::Level::Info || target.starts_with("scanbridge")
}

/// The host's logger, set once by [`set_logger`].
static LOGGER_INSTANCE: OnceLock<Arc<dyn Logger>> = OnceLock::new();

/// Sets the global logger.
///
/// Should be called once, before the bridge is created. Later calls are ignored.
///
/// # Arguments
///
/// * `logger` - The host's logger. It is kept for the lifetime of the process.
#[uniffi::export]
pub fn set_logger(logger: Arc<dyn Logger>) {
    if LOGGER_INSTANCE.set(logger).is_err() {
        println!("Logger already set");
        return;
    }

    if let Err(e) = init_logger() {
        eprintln!("Failed to set logger: {e}");
    }
}

/// Installs [`ForeignLogger`] as the `log` backend with every level enabled.
///
/// # Errors
///
/// Returns a `log::SetLoggerError` if another `log` backend is already installed.
fn init_logger() -> Result<(), log::SetLoggerError> {
    static LOGGER: ForeignLogger = ForeignLogger;
    log::set_logger(&LOGGER)?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}
