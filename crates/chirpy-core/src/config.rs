//! Startup configuration for the Chirpy service.
//!
//! Values are layered with the [`config`](::config) crate: built-in
//! defaults, then an optional `chirpy.toml` in the working directory,
//! then process environment variables. Configuration is read once at
//! startup and never changes afterwards.
//!
//! | Key | Default | Meaning |
//! |-----|---------|---------|
//! | `DB_URL` | (required) | `PostgreSQL` connection string |
//! | `PLATFORM` | `""` | `dev` enables the destructive admin reset |
//! | `HOST` | `0.0.0.0` | Bind address |
//! | `PORT` | `8080` | Bind port |
//! | `FILEPATH_ROOT` | `.` | Directory served under `/app/` |
//! | `DB_MAX_CONNECTIONS` | `10` | Connection pool size |

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

/// Name of the optional configuration file, resolved against the working directory.
pub const CONFIG_FILE: &str = "chirpy.toml";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A source could not be read or the merged values did not deserialize.
    #[error("failed to load config: {source}")]
    Load {
        /// The underlying loader error.
        #[from]
        source: config::ConfigError,
    },

    /// A required key was present but empty.
    #[error("missing required config value: {0}")]
    Missing(&'static str),
}

/// Which environment the process is running in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformMode {
    /// Local development. Destructive admin operations are permitted.
    Dev,
    /// Anything else. Destructive admin operations are refused.
    Production,
}

impl PlatformMode {
    /// Derive the mode from the raw `PLATFORM` value.
    pub fn from_platform(platform: &str) -> Self {
        if platform.trim().eq_ignore_ascii_case("dev") {
            Self::Dev
        } else {
            Self::Production
        }
    }

    /// Whether `POST /admin/reset` may wipe data.
    pub const fn allows_reset(self) -> bool {
        matches!(self, Self::Dev)
    }
}

/// Typed configuration for the whole service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChirpyConfig {
    /// `PostgreSQL` connection URL.
    pub db_url: String,
    /// Raw platform name; see [`PlatformMode`].
    #[serde(default)]
    pub platform: String,
    /// Address to bind the HTTP listener to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind the HTTP listener to.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory whose files are served under `/app/`.
    #[serde(default = "default_filepath_root")]
    pub filepath_root: PathBuf,
    /// Maximum size of the database connection pool.
    #[serde(default = "default_max_connections")]
    pub db_max_connections: u32,
}

fn default_host() -> String {
    String::from("0.0.0.0")
}

const fn default_port() -> u16 {
    8080
}

fn default_filepath_root() -> PathBuf {
    PathBuf::from(".")
}

const fn default_max_connections() -> u32 {
    10
}

impl ChirpyConfig {
    /// Load from `chirpy.toml` (if present) and the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source is malformed or `DB_URL` is
    /// missing or empty.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_sources(Some(Path::new(CONFIG_FILE)), Environment::default())
    }

    /// Load from an explicit file and environment source.
    ///
    /// Environment keys are matched case-insensitively against field
    /// names, so `DB_URL` fills [`db_url`](Self::db_url).
    ///
    /// # Errors
    ///
    /// See [`ChirpyConfig::load`].
    pub fn from_sources(file: Option<&Path>, env: Environment) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(File::from(path).required(false));
        }
        let loaded: Self = builder
            .add_source(env.try_parsing(true))
            .build()?
            .try_deserialize()?;

        if loaded.db_url.trim().is_empty() {
            return Err(ConfigError::Missing("DB_URL"));
        }

        tracing::debug!(
            host = loaded.host,
            port = loaded.port,
            platform = loaded.platform,
            "Configuration loaded"
        );

        Ok(loaded)
    }

    /// Platform mode derived from [`platform`](Self::platform).
    pub fn platform_mode(&self) -> PlatformMode {
        PlatformMode::from_platform(&self.platform)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn env_of(pairs: &[(&str, &str)]) -> Environment {
        let map: config::Map<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        Environment::default().source(Some(map))
    }

    #[test]
    fn defaults_fill_optional_keys() {
        let cfg = ChirpyConfig::from_sources(
            None,
            env_of(&[("DB_URL", "postgres://localhost/chirpy")]),
        )
        .unwrap();
        assert_eq!(cfg.db_url, "postgres://localhost/chirpy");
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.filepath_root, PathBuf::from("."));
        assert_eq!(cfg.db_max_connections, 10);
        assert_eq!(cfg.platform_mode(), PlatformMode::Production);
    }

    #[test]
    fn environment_overrides() {
        let cfg = ChirpyConfig::from_sources(
            None,
            env_of(&[
                ("DB_URL", "postgres://db/chirpy"),
                ("PLATFORM", "dev"),
                ("PORT", "9000"),
                ("FILEPATH_ROOT", "public"),
            ]),
        )
        .unwrap();
        assert_eq!(cfg.port, 9000);
        assert_eq!(cfg.filepath_root, PathBuf::from("public"));
        assert_eq!(cfg.platform_mode(), PlatformMode::Dev);
    }

    #[test]
    fn missing_db_url_is_an_error() {
        let result = ChirpyConfig::from_sources(None, env_of(&[("PLATFORM", "dev")]));
        assert!(result.is_err());
    }

    #[test]
    fn empty_db_url_is_an_error() {
        let result = ChirpyConfig::from_sources(None, env_of(&[("DB_URL", "  ")]));
        assert!(matches!(result, Err(ConfigError::Missing("DB_URL"))));
    }

    #[test]
    fn absent_config_file_is_ignored() {
        let cfg = ChirpyConfig::from_sources(
            Some(Path::new("definitely-not-here.toml")),
            env_of(&[("DB_URL", "postgres://localhost/chirpy")]),
        );
        assert!(cfg.is_ok());
    }

    #[test]
    fn platform_mode_parsing() {
        assert_eq!(PlatformMode::from_platform("dev"), PlatformMode::Dev);
        assert_eq!(PlatformMode::from_platform(" DEV "), PlatformMode::Dev);
        assert_eq!(PlatformMode::from_platform(""), PlatformMode::Production);
        assert_eq!(PlatformMode::from_platform("prod"), PlatformMode::Production);
        assert_eq!(
            PlatformMode::from_platform("development"),
            PlatformMode::Production
        );
        assert!(PlatformMode::Dev.allows_reset());
        assert!(!PlatformMode::Production.allows_reset());
    }
}
