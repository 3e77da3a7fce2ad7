use anyhow::Result;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use crate::constants::{
    CONFIG_FILE_NAME, DEFAULT_FOLD_WIDTH, DEFAULT_MAX_NESTING_DEPTH, ENV_PREFIX, LEGACY_VERSION,
};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    pub reader: ReaderConfig,
    pub writer: WriterConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReaderConfig {
    /// Revision assumed before a record declares a `VERSION`.
    pub fallback_version: String,
    /// Maximum depth of legacy `AGENT` records nested inside a record.
    pub max_nesting_depth: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WriterConfig {
    pub fold_width: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive for the caller's `tracing` subscriber, such as
    /// `info` or `vcfkit_rfc=trace`.
    pub level: String,
}

impl LoggingConfig {
    /// ## Summary
    /// Builds the subscriber filter described by `level`.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` if `level` is not a valid
    /// filter directive.
    pub fn env_filter(&self) -> CoreResult<EnvFilter> {
        EnvFilter::try_new(self.level.as_str()).map_err(|err| {
            CoreError::InvalidConfiguration(format!(
                "logging.level {:?} is not a valid filter: {err}",
                self.level
            ))
        })
    }
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            fallback_version: LEGACY_VERSION.to_string(),
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            fold_width: DEFAULT_FOLD_WIDTH,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Settings {
    /// ## Summary
    /// Returns a configuration builder pre-populated with every default value.
    ///
    /// ## Errors
    /// Returns an error if a default cannot be stored in the builder.
    pub fn builder() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("reader.fallback_version", LEGACY_VERSION)?
            .set_default(
                "reader.max_nesting_depth",
                i64::try_from(DEFAULT_MAX_NESTING_DEPTH)?,
            )?
            .set_default("writer.fold_width", i64::try_from(DEFAULT_FOLD_WIDTH)?)?
            .set_default("logging.level", "info")?)
    }

    /// ## Summary
    /// Loads configuration from defaults, environment variables (including a
    /// `.env` file), and an optional `vcfkit.toml`.
    /// The TOML file takes precedence over environment values.
    ///
    /// ## Errors
    /// Returns an error if building, deserializing, or validating the
    /// configuration fails.
    pub fn load() -> Result<Self> {
        let settings = Self::builder()?
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .add_source(config::File::with_name(CONFIG_FILE_NAME).required(false))
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;

        tracing::debug!(settings = ?settings, "Configuration loaded");

        Ok(settings)
    }

    /// ## Summary
    /// Checks values that deserialize fine but cannot drive the reader or
    /// writer.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` naming the offending key.
    pub fn validate(&self) -> CoreResult<()> {
        if self.reader.fallback_version.trim().is_empty() {
            return Err(CoreError::InvalidConfiguration(
                "reader.fallback_version must not be empty".to_string(),
            ));
        }

        if self.reader.max_nesting_depth == 0 {
            return Err(CoreError::InvalidConfiguration(
                "reader.max_nesting_depth must be at least 1".to_string(),
            ));
        }

        // One column for the continuation space, one for content.
        if self.writer.fold_width < 2 {
            return Err(CoreError::InvalidConfiguration(format!(
                "writer.fold_width must be at least 2, got {}",
                self.writer.fold_width
            )));
        }

        self.logging.env_filter()?;

        Ok(())
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
