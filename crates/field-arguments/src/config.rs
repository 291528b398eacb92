use std::path::Path;

/// Top-level configuration document. Only the `[arguments]` section is read by this crate.
#[derive(Debug, Default, serde::Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub arguments: ArgumentsConfig,
}

#[derive(Debug, serde::Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ArgumentsConfig {
    /// Derive camelCase external names from declared snake_case names.
    pub camelize: bool,
    /// Turn raw arguments that match no declared argument into coercion errors instead of ignoring them.
    pub reject_unknown: bool,
}

impl Default for ArgumentsConfig {
    fn default() -> Self {
        Self {
            camelize: true,
            reject_unknown: false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not read configuration at '{path}': {err}")]
    Io { path: String, err: std::io::Error },
    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Config {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|err| ConfigError::Io {
            path: path.display().to_string(),
            err,
        })?;

        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded configuration");

        Ok(config)
    }
}
