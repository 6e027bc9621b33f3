//! Binding a [`Level`] to a command line option.

use crate::level::{Level, ParseLevelError};
use std::fmt;
use std::str::FromStr;

/// A settable, printable option holding a [`Level`].
///
/// Implemented for [`LevelFlag`] itself and for `Option<LevelFlag>`, so a
/// missing flag can be told apart from a flag holding [`Level::Invalid`].
pub trait FlagValue {
    fn set(&mut self, arg: &str) -> Result<(), ParseLevelError>;

    /// The lowercase command line form, or `""` if there is nothing to show.
    fn to_arg(&self) -> String;

    fn get(&self) -> Option<Level>;
}

/// A [`Level`] that parses from and prints as its command line form (`info`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LevelFlag(pub Level);

impl LevelFlag {
    pub fn level(self) -> Level {
        self.0
    }
}

impl From<Level> for LevelFlag {
    fn from(level: Level) -> Self {
        LevelFlag(level)
    }
}

impl FromStr for LevelFlag {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(LevelFlag)
    }
}

impl fmt::Display for LevelFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_arg())
    }
}

impl FlagValue for LevelFlag {
    fn set(&mut self, arg: &str) -> Result<(), ParseLevelError> {
        *self = arg.parse()?;
        Ok(())
    }

    fn to_arg(&self) -> String {
        self.to_string()
    }

    fn get(&self) -> Option<Level> {
        Some(self.0)
    }
}

impl FlagValue for Option<LevelFlag> {
    fn set(&mut self, arg: &str) -> Result<(), ParseLevelError> {
        *self = Some(arg.parse()?);
        Ok(())
    }

    fn to_arg(&self) -> String {
        self.as_ref().map(|flag| flag.to_arg()).unwrap_or_default()
    }

    fn get(&self) -> Option<Level> {
        self.as_ref().and_then(|flag| flag.get())
    }
}
