//! Global evreg configuration.

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::codec::Format;
use crate::error::{EvregError, EvregResult};
use crate::store::{LoadPolicy, StoreOptions};

static DEFAULT_DATA_FILE: &str = "events.data";
static DEFAULT_USER_NAME: &str = "guest";

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_user_name() -> String {
    DEFAULT_USER_NAME.to_string()
}

/// Configuration at ~/.config/evreg/config.toml
///
/// Every key is optional; a missing file means all defaults.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EvregConfig {
    /// Backing data file. Relative paths resolve against the working directory.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    #[serde(default)]
    pub format: Format,

    /// What to do with a data file line that cannot be decoded.
    #[serde(default)]
    pub on_malformed: LoadPolicy,

    #[serde(default = "default_user_name")]
    pub user_name: String,

    #[serde(default)]
    pub user_city: String,
}

impl Default for EvregConfig {
    fn default() -> Self {
        EvregConfig {
            data_file: default_data_file(),
            format: Format::default(),
            on_malformed: LoadPolicy::default(),
            user_name: default_user_name(),
            user_city: String::new(),
        }
    }
}

impl EvregConfig {
    pub fn config_path() -> EvregResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| EvregError::Config("Could not determine config directory".into()))?
            .join("evreg");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the global config, writing a commented default file on first run.
    pub fn load() -> EvregResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> EvregResult<Self> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .build()
            .map_err(|e| EvregError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| EvregError::Config(e.to_string()))
    }

    /// The data file path with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_file.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            format: self.format,
            on_malformed: self.on_malformed,
        }
    }

    pub fn to_toml(&self) -> EvregResult<String> {
        toml::to_string_pretty(self).map_err(|e| EvregError::Config(e.to_string()))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> EvregResult<()> {
        let contents = format!(
            "\
# evreg configuration

# Where events are stored:
# data_file = \"{}\"

# Line format of the data file (\"legacy\" or \"escaped\"):
# format = \"legacy\"

# What to do with unreadable lines (\"strict\" or \"skip\"):
# on_malformed = \"strict\"

# Who is confirming attendance:
# user_name = \"{}\"
# user_city = \"\"
",
            DEFAULT_DATA_FILE, DEFAULT_USER_NAME
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                EvregError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| EvregError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let config = EvregConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, EvregConfig::default());
        assert_eq!(config.data_file, PathBuf::from("events.data"));
    }

    #[test]
    fn default_file_is_all_comments() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        EvregConfig::create_default_config(&path).unwrap();
        let config = EvregConfig::load_from(&path).unwrap();

        assert_eq!(config, EvregConfig::default());
    }

    #[test]
    fn keys_override_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "data_file = \"/tmp/mine.data\"\nformat = \"escaped\"\non_malformed = \"skip\"\nuser_name = \"Ana\"\n",
        )
        .unwrap();

        let config = EvregConfig::load_from(&path).unwrap();

        assert_eq!(config.data_path(), PathBuf::from("/tmp/mine.data"));
        assert_eq!(config.format, Format::Escaped);
        assert_eq!(config.on_malformed, LoadPolicy::Skip);
        assert_eq!(config.user_name, "Ana");
        assert_eq!(config.user_city, "");
    }

    #[test]
    fn unknown_format_is_a_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "format = \"json\"\n").unwrap();

        assert!(matches!(
            EvregConfig::load_from(&path),
            Err(EvregError::Config(_))
        ));
    }

    #[test]
    fn toml_output_round_trips() {
        let config = EvregConfig::default();
        let rendered = config.to_toml().unwrap();
        let parsed: EvregConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }
}
