use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Severity of a log record.
///
/// Lower values are more severe: `Panic` is the most severe level and `Debug`
/// the least. `Invalid` is not a level; it marks a value that never passed
/// through [`Level::from_str`] successfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Level {
    /// A crash, or a termination that was needed to prevent something worse.
    Panic = 0,
    /// A condition that needs immediate action by the user.
    Alert = 1,
    /// A hard error.
    Critical = 2,
    /// A normal error condition.
    Error = 3,
    /// Not an error, but might cause problems later.
    Warning = 4,
    /// Not an error, but may require special handling.
    Notice = 5,
    /// Normal information about expected conditions.
    Info = 6,
    /// Only interesting while debugging.
    Debug = 7,
    #[default]
    Invalid = 8,
}

pub const LEVELS: [Level; 8] = [
    Level::Panic,
    Level::Alert,
    Level::Critical,
    Level::Error,
    Level::Warning,
    Level::Notice,
    Level::Info,
    Level::Debug,
];

impl Level {
    /// Converts a numeric level. Anything above `Debug` is a programming error.
    pub fn from_index(index: u8) -> Level {
        match LEVELS.get(usize::from(index)) {
            Some(level) => *level,
            None => panic!("Log level {index} is not defined"),
        }
    }

    pub fn is_valid(self) -> bool {
        self != Level::Invalid
    }

    /// Panics unless `self` is one of `Panic..=Debug`.
    pub fn assert_valid(self) {
        if !self.is_valid() {
            panic!("Log level {} is not defined", self as u8);
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Level::Panic => "Panic",
            Level::Alert => "Alert",
            Level::Critical => "Critical",
            Level::Error => "Error",
            Level::Warning => "Warning",
            Level::Notice => "Notice",
            Level::Info => "Info",
            Level::Debug => "Debug",
            Level::Invalid => "Undefined",
        }
    }

    /// The tag that starts every record, e.g. `[Error]`.
    pub fn bracketed(self) -> String {
        format!("[{}]", self.name())
    }

    /// The command line spelling, e.g. `error`. Empty for `Invalid`.
    pub fn as_arg(self) -> &'static str {
        match self {
            Level::Panic => "panic",
            Level::Alert => "alert",
            Level::Critical => "critical",
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Notice => "notice",
            Level::Info => "info",
            Level::Debug => "debug",
            Level::Invalid => "",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError {
    input: String,
}

impl ParseLevelError {
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "input sequence {:?} cannot be associated with a defined loglevel",
            self.input
        )
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LEVELS
            .iter()
            .find(|level| level.as_arg().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| ParseLevelError { input: s.into() })
    }
}

/// All real levels keyed to their display names. Iteration order is unspecified.
pub fn all_levels() -> HashMap<Level, &'static str> {
    LEVELS.iter().map(|level| (*level, level.name())).collect()
}

impl serde::Serialize for Level {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_arg())
    }
}

impl<'de> serde::Deserialize<'de> for Level {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = <String as serde::Deserialize>::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
