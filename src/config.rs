use crate::hint::Language;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub levels: LevelsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub hints: HintsConfig,
    #[serde(default)]
    pub progress: ProgressConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct LevelsConfig {
    /// Level JSON to use instead of the built-in set
    #[serde(default)]
    pub path: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct HintsConfig {
    #[serde(default)]
    pub language: Language,
}

#[derive(Debug, Deserialize)]
pub struct ProgressConfig {
    #[serde(default = "default_progress_path")]
    pub path: String,
}

// Default values
fn default_log_level() -> String { "info".to_string() }
fn default_progress_path() -> String { "progress.json".to_string() }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            path: default_progress_path(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io { path: String, source: io::Error },
    #[error("failed to parse {path}: {source}")]
    Parse { path: String, source: toml::de::Error },
}

impl Config {
    /// Load configuration from file. A missing file is not an error and yields defaults.
    ///
    /// This runs before the logger is set up (the log level comes from here), so it
    /// reports problems to the caller instead of logging them.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.display().to_string(),
                    source,
                })
            }
        };

        Self::parse(&contents).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.levels.path, None);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.hints.language, Language::En);
        assert_eq!(config.progress.path, "progress.json");
    }

    #[test]
    fn test_partial_config() {
        let config = Config::parse(
            r#"
            [levels]
            path = "custom_levels.json"

            [hints]
            language = "sv"
            "#,
        )
        .unwrap();
        assert_eq!(config.levels.path.as_deref(), Some("custom_levels.json"));
        assert_eq!(config.hints.language, Language::Sv);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_bad_language_is_rejected() {
        assert!(Config::parse("[hints]\nlanguage = \"de\"\n").is_err());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let config = Config::load(Path::new("definitely/not/here/config.toml")).unwrap();
        assert_eq!(config.logging.level, "info");
    }
}
