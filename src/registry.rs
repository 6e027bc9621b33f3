//! The process-wide default [`Logger`].
//!
//! Call [`setup`] once, early in `main`, then fetch the logger anywhere with
//! [`instance`]. There is no lazy initialization: asking for the instance
//! before `setup` is a programming error and panics.

use crate::level::Level;
use crate::logger::Logger;
use log::Log;
use std::io::Write;
use std::sync::{Arc, PoisonError, RwLock};

static DEFAULT: RwLock<Option<Arc<Logger>>> = RwLock::new(None);

/// Builds the default logger, replacing any previous one.
///
/// Panics under the same conditions as [`Logger::new`].
pub fn setup(out: impl Write + Send + 'static, level: Level, delimiter: &str) -> Arc<Logger> {
    let logger = Arc::new(Logger::new(out, level, delimiter));
    *DEFAULT.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::clone(&logger));
    logger
}

/// Returns the default logger. Panics if [`setup`] has not been called.
pub fn instance() -> Arc<Logger> {
    match DEFAULT.read().unwrap_or_else(PoisonError::into_inner).as_ref() {
        Some(logger) => Arc::clone(logger),
        None => panic!(
            "Programming error: default logger is not set, please set it up first by calling setup()"
        ),
    }
}

/// Forwards `log` records to whatever [`instance`] currently returns.
struct Facade;

static FACADE: Facade = Facade;

impl log::Log for Facade {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        instance().enabled(metadata)
    }

    fn log(&self, record: &log::Record) {
        instance().log(record)
    }

    fn flush(&self) {
        instance().flush()
    }
}

/// Routes the `log` macros (`log::info!` and friends) to the default logger.
///
/// Gating is left to the logger, so later [`Logger::set_level`] calls apply.
/// Fails if a `log` backend has already been installed. Panics if [`setup`]
/// has not been called.
pub fn install_log_facade() -> Result<(), log::SetLoggerError> {
    instance();
    log::set_logger(&FACADE)?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}
