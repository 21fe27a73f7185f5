use analytics::{RandomSource, SectorAggregator, SeededRandom};
use api_client::{HttpIndicatorsClient, IndicatorSource, MarketDataClient, YahooClient};
use auth::{verifier_from_settings, CredentialVerifier, DisabledLogin};
use axum::{
    handler::Handler,
    http::Uri,
    response::{IntoResponse, Response},
    routing::{get, post, MethodRouter},
    Router,
};
use cache::{Clock, SystemClock, TtlCache};
use chrono::{DateTime, Duration, Utc};
use configuration::{AppConfig, MAX_SECTOR_TTL_SECS};
use error::AppError;
use sectors::SectorSnapshot;
use std::any::Any;
use std::sync::Arc;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{self, CorsLayer},
    trace::TraceLayer,
};

pub mod auth;
pub mod error;
pub mod handlers;
pub mod indicators;
pub mod sectors;

/// The shared application state that all handlers can access.
pub struct AppState {
    pub config: AppConfig,
    /// `None` when live data is disabled; every endpoint then serves static figures.
    pub market_data: Option<Arc<dyn MarketDataClient>>,
    /// `None` when no upstream indicators service is configured.
    pub indicators: Option<Arc<dyn IndicatorSource>>,
    pub aggregator: SectorAggregator,
    /// Computed sector listings keyed by resolved country code.
    pub sector_cache: TtlCache<String, SectorSnapshot>,
    pub clock: Arc<dyn Clock>,
    pub credentials: Arc<dyn CredentialVerifier>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// State with no live collaborators and login disabled.
    pub fn new(config: AppConfig, clock: Arc<dyn Clock>, random: Arc<dyn RandomSource>) -> Self {
        let ttl_secs = config.cache.sector_ttl_secs.min(MAX_SECTOR_TTL_SECS);
        let ttl = Duration::seconds(ttl_secs as i64);
        Self {
            market_data: None,
            indicators: None,
            aggregator: SectorAggregator::new(random),
            sector_cache: TtlCache::new(ttl, clock.clone()),
            credentials: Arc::new(DisabledLogin),
            started_at: clock.now(),
            clock,
            config,
        }
    }

    pub fn with_market_data(mut self, client: Arc<dyn MarketDataClient>) -> Self {
        self.market_data = Some(client);
        self
    }

    pub fn with_indicators(mut self, source: Arc<dyn IndicatorSource>) -> Self {
        self.indicators = Some(source);
        self
    }

    pub fn with_credentials(mut self, credentials: Arc<dyn CredentialVerifier>) -> Self {
        self.credentials = credentials;
        self
    }

    /// Wires the production collaborators described by the configuration.
    pub fn from_config(config: AppConfig) -> anyhow::Result<Self> {
        let random = Arc::new(SeededRandom::from_optional_seed(config.randomness.seed));
        let credentials = verifier_from_settings(&config.auth)?;

        let market_data: Option<Arc<dyn MarketDataClient>> = if config.market_data.live_enabled {
            tracing::info!(base_url = %config.market_data.base_url, "Live market data enabled.");
            Some(Arc::new(YahooClient::new(&config.market_data)?))
        } else {
            tracing::info!("Live market data disabled, serving static figures.");
            None
        };
        let indicators = HttpIndicatorsClient::from_settings(&config.indicators)?;

        let mut state =
            AppState::new(config, Arc::new(SystemClock), random).with_credentials(credentials);
        state.market_data = market_data;
        if let Some(client) = indicators {
            state = state.with_indicators(Arc::new(client));
        }
        Ok(state)
    }
}

/// A GET route that answers OPTIONS with an empty 200 and any other method with 405.
fn get_only<H, T>(handler: H) -> MethodRouter<Arc<AppState>>
where
    H: Handler<T, Arc<AppState>>,
    T: 'static,
{
    get(handler)
        .options(handlers::preflight)
        .fallback(handlers::method_not_allowed)
}

/// Turns a handler panic into the standard 500 JSON body.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };
    AppError::Internal(message).into_response()
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

/// Builds the full application router.
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(cors::Any)
        .allow_methods(cors::Any)
        .allow_headers(cors::Any);

    Router::new()
        .route("/api/regime", get_only(handlers::get_regime))
        .route("/api/allocations", get_only(handlers::get_allocations))
        .route("/api/market-data", get_only(handlers::get_market_data))
        .route("/api/market-stress", get_only(handlers::get_market_stress))
        .route("/api/backtesting", get_only(handlers::get_backtesting))
        .route("/api/getSystemHealth", get_only(handlers::get_system_health))
        .route("/api/getIndicatorsBreakdown", get_only(indicators::get_indicators_breakdown))
        .route("/api/sectors", get_only(sectors::get_default_sectors))
        .route("/api/sectors/:country", get_only(sectors::get_sectors))
        .route(
            "/api/auth/login",
            post(handlers::login)
                .options(handlers::preflight)
                .fallback(handlers::method_not_allowed),
        )
        .fallback(not_found)
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// The main function to configure and run the web server.
pub async fn run_server(config: AppConfig) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = Arc::new(AppState::from_config(config)?);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Web server listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
