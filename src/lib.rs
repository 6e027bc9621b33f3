//! A small leveled logger.
//!
//! A [`Logger`] writes a record only if the record's [`Level`] is at least as
//! severe as the logger's minimum level. Levels run from [`Level::Panic`]
//! (most severe) to [`Level::Debug`] (least severe).
//!
//! ```
//! use levlog::{emitf, Level, Logger};
//!
//! let logger = Logger::new(std::io::stdout(), Level::Error, " - ");
//! logger.warning("dropped").unwrap();
//! emitf!(logger, Level::Error, "disk {} unreadable", "/dev/sdb").unwrap();
//! ```
//!
//! Invalid levels and empty delimiters are programming errors and panic.
//! Failures of the underlying writer are returned to the caller.

mod config;
mod flag;
mod level;
mod logger;
pub mod registry;

pub use config::Config;
pub use flag::{FlagValue, LevelFlag};
pub use level::{all_levels, Level, ParseLevelError, LEVELS};
pub use logger::{Logger, Sink};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Writes a formatted record: `emitf!(logger, Level::Info, "val={}", 9)`.
#[macro_export]
macro_rules! emitf {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.emitf($level, format_args!($($arg)+))
    };
}

/// Writes the concatenation of the given values: `emit!(logger, Level::Info, "n=", 3)`.
#[macro_export]
macro_rules! emit {
    ($logger:expr, $level:expr, $($value:expr),+ $(,)?) => {
        $logger.emit($level, &[$(&$value as &dyn ::std::fmt::Display),+])
    };
}
