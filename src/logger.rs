//! The leveled [`Logger`].
//!
//! A record is written only if its level is at least as severe as the
//! logger's minimum level. Records look like
//!
//! ```text
//! [Level]<delimiter>[<time><delimiter>]<message>\n
//! ```
//!
//! where the time segment is present only while a time format is set.
//! All configuration and every write share one lock, so concurrent callers
//! never see interleaved records or a half-updated configuration.

use crate::level::Level;
use chrono::{DateTime, Local};
use std::fmt::{self, Write as _};
use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

pub type Sink = Box<dyn Write + Send>;

type Clock = Box<dyn Fn() -> DateTime<Local> + Send + Sync>;

struct State {
    out: Sink,
    level: Level,
    time_format: String,
}

pub struct Logger {
    delimiter: String,
    clock: Clock,
    state: Mutex<State>,
}

impl Logger {
    /// Creates a logger writing to `out` that shows records of `level` or
    /// more severe. Panics if `delimiter` is empty or `level` is `Invalid`.
    pub fn new(out: impl Write + Send + 'static, level: Level, delimiter: &str) -> Logger {
        Logger::with_clock(out, level, delimiter, Local::now)
    }

    /// Like [`Logger::new`], with timestamps taken from `clock`.
    pub fn with_clock(
        out: impl Write + Send + 'static,
        level: Level,
        delimiter: &str,
        clock: impl Fn() -> DateTime<Local> + Send + Sync + 'static,
    ) -> Logger {
        if delimiter.is_empty() {
            panic!("delimiter must have one or more characters");
        }
        level.assert_valid();
        Logger {
            delimiter: delimiter.into(),
            clock: Box::new(clock),
            state: Mutex::new(State {
                out: Box::new(out),
                level,
                time_format: String::new(),
            }),
        }
    }

    // A panic inside a sink leaves the state itself intact.
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    pub fn level(&self) -> Level {
        self.lock().level
    }

    pub fn level_display(&self) -> &'static str {
        self.level().name()
    }

    /// Panics if `level` is `Invalid`.
    pub fn set_level(&self, level: Level) {
        level.assert_valid();
        self.lock().level = level;
    }

    pub fn set_output(&self, out: impl Write + Send + 'static) {
        self.lock().out = Box::new(out);
    }

    /// Sets a strftime-style format (`%Y-%m-%d %H:%M:%S`) for record
    /// timestamps. An empty format turns timestamps off.
    pub fn set_time_format(&self, format: &str) {
        self.lock().time_format = format.into();
    }

    pub fn time_format(&self) -> String {
        self.lock().time_format.clone()
    }

    /// Writes `values`, concatenated without separators, as one record.
    ///
    /// Trailing newlines of the message are replaced by exactly one. Returns
    /// `Ok(0)` without writing if `level` is less severe than the logger's
    /// level. Panics if `level` is `Invalid`.
    pub fn emit(&self, level: Level, values: &[&dyn fmt::Display]) -> io::Result<usize> {
        level.assert_valid();
        // Rendered before locking: a value's Display may log through this logger.
        let mut message = String::new();
        for value in values {
            write!(message, "{value}").map_err(|_| formatter_error())?;
        }
        message.truncate(message.trim_end_matches('\n').len());
        let mut state = self.lock();
        if level > state.level {
            return Ok(0);
        }
        self.write_record(&mut state, level, &message)
    }

    /// Writes a formatted record, usually built with [`emitf!`](crate::emitf).
    ///
    /// A newline is appended only if the message does not already end in one.
    pub fn emitf(&self, level: Level, args: fmt::Arguments<'_>) -> io::Result<usize> {
        level.assert_valid();
        let mut message = String::new();
        message.write_fmt(args).map_err(|_| formatter_error())?;
        let mut state = self.lock();
        if level > state.level {
            return Ok(0);
        }
        self.write_record(&mut state, level, &message)
    }

    fn write_record(&self, state: &mut State, level: Level, message: &str) -> io::Result<usize> {
        let mut record = level.bracketed();
        record.push_str(&self.delimiter);
        if !state.time_format.is_empty() {
            let now = (self.clock)();
            write!(record, "{}", now.format(&state.time_format)).map_err(|_| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("cannot format time with {:?}", state.time_format),
                )
            })?;
            record.push_str(&self.delimiter);
        }
        record.push_str(message);
        if !message.ends_with('\n') {
            record.push('\n');
        }
        state.out.write_all(record.as_bytes())?;
        Ok(record.len())
    }

    /// Logs at [`Level::Panic`], then exits the process with status 1.
    pub fn die(&self, message: impl fmt::Display) -> ! {
        let _ = self.panic(message);
        self.exit()
    }

    /// Formatted variant of [`Logger::die`].
    pub fn dief(&self, args: fmt::Arguments<'_>) -> ! {
        let _ = self.panicf(args);
        self.exit()
    }

    // process::exit skips destructors, so buffered sinks are flushed here.
    fn exit(&self) -> ! {
        let _ = self.lock().out.flush();
        std::process::exit(1)
    }
}

fn formatter_error() -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidData,
        "a value's Display implementation returned an error",
    )
}

macro_rules! level_methods {
    ($($level:ident => $plain:ident, $formatted:ident;)*) => {
        impl Logger {
            $(
                #[doc = concat!("Logs `message` at [`Level::", stringify!($level), "`].")]
                pub fn $plain(&self, message: impl fmt::Display) -> io::Result<usize> {
                    self.emit(Level::$level, &[&message])
                }

                #[doc = concat!("Logs `args` at [`Level::", stringify!($level), "`].")]
                pub fn $formatted(&self, args: fmt::Arguments<'_>) -> io::Result<usize> {
                    self.emitf(Level::$level, args)
                }
            )*
        }
    };
}

// `panic` and `panicf` only log; use `die` to also exit.
level_methods! {
    Panic => panic, panicf;
    Alert => alert, alertf;
    Critical => critical, criticalf;
    Error => error, errorf;
    Warning => warning, warningf;
    Notice => notice, noticef;
    Info => info, infof;
    Debug => debug, debugf;
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("Logger")
            .field("delimiter", &self.delimiter)
            .field("level", &state.level)
            .field("time_format", &state.time_format)
            .finish_non_exhaustive()
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Level {
        match level {
            log::Level::Error => Level::Error,
            log::Level::Warn => Level::Warning,
            log::Level::Info => Level::Info,
            log::Level::Debug | log::Level::Trace => Level::Debug,
        }
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        Level::from(metadata.level()) <= self.level()
    }

    // log::Log cannot report errors, so sink failures are dropped here.
    fn log(&self, record: &log::Record) {
        let _ = self.emitf(record.level().into(), *record.args());
    }

    fn flush(&self) {
        let _ = self.lock().out.flush();
    }
}
