use crate::level::Level;
use std::path::Path;

/// Logger settings read from a TOML file, e.g.
///
/// ```toml
/// level = "notice"
/// delimiter = " | "
/// time_format = "%Y-%m-%d %H:%M:%S"
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub level: Option<Level>,
    pub delimiter: Option<String>,
    pub time_format: Option<String>,
}

impl Config {
    pub fn parse(text: &str) -> crate::Result<Config> {
        let conf: Config = toml::from_str(text)?;
        if conf.delimiter.as_deref() == Some("") {
            return Err("delimiter must have one or more characters".into());
        }
        Ok(conf)
    }

    /// Reads `path` if it is a file, otherwise returns the default config.
    pub fn load(path: &Path) -> crate::Result<Config> {
        if path.is_file() {
            Config::parse(std::fs::read_to_string(path)?.as_str())
        } else {
            Ok(Config::default())
        }
    }
}
