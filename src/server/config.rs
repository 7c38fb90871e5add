//! Server configuration loaded from the environment.

use std::env;

use crate::options::Options;

/// Default upload cap (32 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 32 * 1024 * 1024;

/// Error raised while reading server configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A numeric variable did not parse.
    #[error("{key} must be a number, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },

    /// The resulting extraction options are unusable.
    #[error("invalid extraction options: {0}")]
    InvalidOptions(#[from] crate::Error),
}

/// Runtime settings for the upload service.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Largest accepted request body.
    pub max_upload_bytes: usize,
    pub options: Options,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            options: Options::default(),
        }
    }
}

impl ServerConfig {
    /// Read `FEEDPOSTS_*` variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    ///
    /// Recognised keys: `FEEDPOSTS_HOST`, `FEEDPOSTS_PORT`,
    /// `FEEDPOSTS_MAX_UPLOAD_BYTES` and `FEEDPOSTS_EXCLUDED_IMAGE_MARKERS`
    /// (comma separated, replaces the default set).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("FEEDPOSTS_HOST").unwrap_or(defaults.host);
        let port = parse_number(&lookup, "FEEDPOSTS_PORT")?.unwrap_or(defaults.port);
        let max_upload_bytes = parse_number(&lookup, "FEEDPOSTS_MAX_UPLOAD_BYTES")?
            .unwrap_or(defaults.max_upload_bytes);

        let mut options = defaults.options;
        if let Some(markers) = lookup("FEEDPOSTS_EXCLUDED_IMAGE_MARKERS") {
            options.excluded_image_markers = markers
                .split(',')
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(str::to_string)
                .collect();
        }
        options.validate()?;

        Ok(Self {
            host,
            port,
            max_upload_bytes,
            options,
        })
    }

    /// `host:port` string for binding.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_number<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { key, value }),
    }
}
