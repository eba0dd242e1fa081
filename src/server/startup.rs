//! Startup helpers: database connection, HTTP middleware and the serve loop.

use axum::{http::HeaderValue, Router};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{
    config::Config,
    error::{config::ConfigError, Error},
    model::app::AppState,
    router,
};

/// Install the global tracing subscriber
///
/// The filter comes from `RUST_LOG`, defaulting to `info` with per-request spans from
/// `tower_http` included.
pub fn init_logger() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .compact(),
        )
        .init();
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.connect_timeout(config.db_connect_timeout)
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Connected to database and applied migrations");

    Ok(db)
}

/// Build the CORS policy for the configured frontend origins
///
/// Credentials are allowed, so instead of wildcards the requested method and headers are
/// mirrored back to allowed origins.
pub fn build_cors(config: &Config) -> Result<CorsLayer, Error> {
    let origins = config
        .cors_allowed_origins
        .iter()
        .map(|origin| {
            if origin == "*" {
                return Err(ConfigError::InvalidEnvValue {
                    var: "CORS_ALLOWED_ORIGINS".to_string(),
                    reason: "wildcard origin cannot be combined with credentials".to_string(),
                });
            }

            origin
                .parse::<HeaderValue>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "CORS_ALLOWED_ORIGINS".to_string(),
                    reason: format!("{}: {}", origin, e),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}

/// Attach state and middleware to the API routes
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    router::routes()
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve `router` on `listener` until Ctrl-C or SIGTERM is received
pub async fn serve(listener: TcpListener, router: Router) -> Result<(), Error> {
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
