use serde::Deserialize;

/// The root configuration structure for the entire application.
///
/// Every section has defaults, so an empty `config.toml` (or none at all)
/// yields a runnable server with live data disabled.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub market_data: MarketDataSettings,
    pub indicators: IndicatorSettings,
    pub cache: CacheSettings,
    pub auth: AuthSettings,
    pub logging: LoggingSettings,
    pub randomness: RandomnessSettings,
}

/// Where the HTTP server binds.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

/// Settings for the live ETF price-series feed.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MarketDataSettings {
    /// When false, every endpoint serves the static snapshot without touching the network.
    pub live_enabled: bool,
    pub base_url: String,
    pub user_agent: String,
    /// Per-symbol request timeout.
    pub timeout_secs: u64,
    /// Chart range requested from the feed (e.g. "1mo").
    pub range: String,
    /// Bar interval requested from the feed (e.g. "1d").
    pub interval: String,
}

impl Default for MarketDataSettings {
    fn default() -> Self {
        Self {
            live_enabled: false,
            base_url: "https://query1.finance.yahoo.com".to_string(),
            user_agent: "Mozilla/5.0 (compatible; Oracle Portfolio API)".to_string(),
            timeout_secs: 5,
            range: "1mo".to_string(),
            interval: "1d".to_string(),
        }
    }
}

/// Settings for the upstream indicators-breakdown service.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IndicatorSettings {
    /// Full URL of the upstream endpoint. `None` means always serve the fallback table.
    pub upstream_url: Option<String>,
    pub timeout_secs: u64,
    /// Country reported when the request does not name one.
    pub default_country: String,
}

impl Default for IndicatorSettings {
    fn default() -> Self {
        Self {
            upstream_url: None,
            timeout_secs: 10,
            default_country: "FRA".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    /// How long a computed sector response stays fresh.
    pub sector_ttl_secs: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            sector_ttl_secs: 300,
        }
    }
}

/// Credentials for the dashboard login.
///
/// Login is disabled unless all three secrets are provided.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthSettings {
    pub username: Option<String>,
    /// Hex-encoded SHA-256 digest of the password.
    pub password_sha256: Option<String>,
    /// Secret used to sign session tokens.
    pub signing_key: Option<String>,
    pub token_ttl_secs: u64,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            username: None,
            password_sha256: None,
            signing_key: None,
            token_ttl_secs: 3600,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter directive when `RUST_LOG` is not set.
    pub level: String,
    /// If set, logs are also written to a daily-rolling file in this directory.
    pub directory: Option<String>,
    pub file_prefix: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info,tower_http=debug".to_string(),
            directory: None,
            file_prefix: "oracle-portfolio.log".to_string(),
        }
    }
}

/// Seed for the randomized presentation fields (confidence, beta, volumes).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RandomnessSettings {
    /// Fixed seed for reproducible payloads. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

/// Command-line overrides for the server section.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "clap", derive(clap::Args))]
pub struct ServerOverrides {
    /// Address to bind, overriding `server.host`.
    #[cfg_attr(feature = "clap", arg(long))]
    pub host: Option<String>,

    /// Port to bind, overriding `server.port`.
    #[cfg_attr(feature = "clap", arg(long))]
    pub port: Option<u16>,
}
