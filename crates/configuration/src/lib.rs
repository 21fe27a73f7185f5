use crate::error::ConfigError;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{
    AppConfig, AuthSettings, CacheSettings, IndicatorSettings, LoggingSettings,
    MarketDataSettings, RandomnessSettings, ServerOverrides, ServerSettings,
};

/// Prefix for environment overrides, e.g. `ORACLE__SERVER__PORT=8080`.
const ENV_PREFIX: &str = "ORACLE";

/// Upper bound for `cache.sector_ttl_secs`: one day.
pub const MAX_SECTOR_TTL_SECS: u64 = 24 * 3600;

/// Loads the application configuration from `config.toml` (if present) and the environment.
///
/// This function is the primary entry point for this crate. It reads the configuration file,
/// deserializes it into our strongly-typed `AppConfig` struct, validates it and returns it.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let builder = config::Config::builder()
        // Tells the builder to look for a file named `config.toml`, which is optional.
        .add_source(config::File::with_name("config").required(false))
        .add_source(environment());
    finish(builder)
}

/// Same as [`load_config`] but with an explicit file that must exist.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from(path).required(true))
        .add_source(environment());
    finish(builder)
}

/// Parses a TOML document without consulting the file system or environment.
pub fn parse_config(toml: &str) -> Result<AppConfig, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from_str(toml, config::FileFormat::Toml));
    finish(builder)
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
}

fn finish(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> Result<AppConfig, ConfigError> {
    // Attempt to deserialize the entire configuration into our `AppConfig` struct
    let config = builder.build()?.try_deserialize::<AppConfig>()?;
    config.validate()?;
    Ok(config)
}

impl AppConfig {
    /// Rejects settings that would make the server misbehave at runtime.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.market_data.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "market_data.timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.indicators.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "indicators.timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.cache.sector_ttl_secs == 0 {
            return Err(ConfigError::ValidationError(
                "cache.sector_ttl_secs must be greater than zero".to_string(),
            ));
        }
        if self.cache.sector_ttl_secs > MAX_SECTOR_TTL_SECS {
            return Err(ConfigError::ValidationError(format!(
                "cache.sector_ttl_secs must not exceed {MAX_SECTOR_TTL_SECS}"
            )));
        }
        if self.auth.token_ttl_secs == 0 {
            return Err(ConfigError::ValidationError(
                "auth.token_ttl_secs must be greater than zero".to_string(),
            ));
        }
        if let Some(digest) = &self.auth.password_sha256 {
            let valid = digest.len() == 64 && digest.chars().all(|c| c.is_ascii_hexdigit());
            if !valid {
                return Err(ConfigError::ValidationError(
                    "auth.password_sha256 must be a 64 character hex digest".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Applies command-line overrides on top of the loaded settings.
    pub fn apply_overrides(&mut self, overrides: &ServerOverrides) {
        if let Some(host) = &overrides.host {
            self.server.host = host.clone();
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
    }
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins over `logging.level`. When `logging.directory` is set, a second
/// layer writes to a daily-rolling file; the returned guard must be kept alive for
/// the lifetime of the process or buffered lines are lost.
pub fn init_tracing(settings: &LoggingSettings) -> Result<Option<WorkerGuard>, ConfigError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .map_err(|e| ConfigError::TracingInit(e.to_string()))?;

    let (file_layer, guard) = match &settings.directory {
        Some(directory) => {
            let appender = tracing_appender::rolling::daily(directory, &settings.file_prefix);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .with(file_layer)
        .try_init()
        .map_err(|e| ConfigError::TracingInit(e.to_string()))?;

    Ok(guard)
}
