//! Logging capability for FolioDB
//!
//! The store does not talk to `tracing` directly. It holds an
//! `Arc<dyn Logger>` so embedders can route its messages anywhere.
//!
//! ## Implementations
//! - [`ConsoleLogger`]: the default. Writes to stderr through its own
//!   private subscriber and never touches the global one.
//! - [`TracingLogger`]: forwards to whatever global subscriber the
//!   application installed (see [`init_tracing`]).

use std::fmt;

use tracing::Dispatch;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Target used for every event the store emits
pub const LOG_TARGET: &str = "foliodb";

/// Severity of a log message, most severe first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LogLevel {
    Fatal,
    Error,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Maximum `tracing` level that lets this severity through.
    /// Fatal has no `tracing` counterpart and shares ERROR.
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Fatal | LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// Leveled logging capability used by the store
///
/// Messages arrive pre-formatted as `fmt::Arguments`, so callers use
/// `format_args!` the same way they would a format template.
pub trait Logger: Send + Sync {
    fn fatal(&self, args: fmt::Arguments<'_>);
    fn error(&self, args: fmt::Arguments<'_>);
    fn info(&self, args: fmt::Arguments<'_>);
    fn debug(&self, args: fmt::Arguments<'_>);
    fn trace(&self, args: fmt::Arguments<'_>);
}

/// Emit one event on the current dispatcher
fn emit(level: LogLevel, args: fmt::Arguments<'_>) {
    match level {
        LogLevel::Fatal => tracing::error!(target: LOG_TARGET, fatal = true, "{}", args),
        LogLevel::Error => tracing::error!(target: LOG_TARGET, "{}", args),
        LogLevel::Info => tracing::info!(target: LOG_TARGET, "{}", args),
        LogLevel::Debug => tracing::debug!(target: LOG_TARGET, "{}", args),
        LogLevel::Trace => tracing::trace!(target: LOG_TARGET, "{}", args),
    }
}

// =============================================================================
// ConsoleLogger
// =============================================================================

/// Console logger writing to stderr at a fixed maximum severity
#[derive(Clone)]
pub struct ConsoleLogger {
    level: LogLevel,
    dispatch: Dispatch,
}

impl ConsoleLogger {
    pub fn new(level: LogLevel) -> Self {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(level.to_level_filter())
            .with_target(true)
            .finish();

        Self {
            level,
            dispatch: Dispatch::new(subscriber),
        }
    }

    /// The most verbose severity this logger prints
    pub fn level(&self) -> LogLevel {
        self.level
    }

    fn log(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        if level > self.level {
            return;
        }
        tracing::dispatcher::with_default(&self.dispatch, || emit(level, args));
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new(LogLevel::Info)
    }
}

impl fmt::Debug for ConsoleLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleLogger")
            .field("level", &self.level)
            .finish()
    }
}

impl Logger for ConsoleLogger {
    fn fatal(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Fatal, args);
    }

    fn error(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Error, args);
    }

    fn info(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Info, args);
    }

    fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Debug, args);
    }

    fn trace(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Trace, args);
    }
}

// =============================================================================
// TracingLogger
// =============================================================================

/// Forwards every message to the global `tracing` subscriber
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn fatal(&self, args: fmt::Arguments<'_>) {
        emit(LogLevel::Fatal, args);
    }

    fn error(&self, args: fmt::Arguments<'_>) {
        emit(LogLevel::Error, args);
    }

    fn info(&self, args: fmt::Arguments<'_>) {
        emit(LogLevel::Info, args);
    }

    fn debug(&self, args: fmt::Arguments<'_>) {
        emit(LogLevel::Debug, args);
    }

    fn trace(&self, args: fmt::Arguments<'_>) {
        emit(LogLevel::Trace, args);
    }
}

/// Install a global fmt subscriber filtered by `RUST_LOG`
///
/// Falls back to `default_directive` (e.g. `"info,foliodb=debug"`) when
/// `RUST_LOG` is unset or invalid. Returns false if a global subscriber
/// was already installed.
pub fn init_tracing(default_directive: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .try_init()
        .is_ok()
}
