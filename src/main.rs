//! Lockfile Registry API - Main Entry Point

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lockfile_registry::application::allowlist::AllowlistRefresher;
use lockfile_registry::application::use_cases::lockfiles::{
    GetLockfileUseCase, PutLockfileUseCase,
};
use lockfile_registry::domain::gateways::TrustedRangeSource;
use lockfile_registry::infrastructure::driven_adapters::config::AppConfig;
use lockfile_registry::infrastructure::driven_adapters::database;
use lockfile_registry::infrastructure::driven_adapters::lockfile_repository::PostgresLockfileRepository;
use lockfile_registry::infrastructure::driven_adapters::range_source::GithubMetaRangeSource;
use lockfile_registry::infrastructure::driving_adapters::api_rest::handlers::{health, lockfiles};
use lockfile_registry::infrastructure::driving_adapters::api_rest::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lockfile_registry=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;
    tracing::info!("Configuration loaded successfully");

    // Create database connection pool
    let pool = database::create_pool(&config.database).await?;
    tracing::info!("Database connection pool created");

    // Run migrations
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Database migrations completed");

    // Create repository and use cases
    let lockfile_repository = Arc::new(PostgresLockfileRepository::new(pool));
    let get_lockfile_use_case = Arc::new(GetLockfileUseCase::new(lockfile_repository.clone()));
    let put_lockfile_use_case = Arc::new(PutLockfileUseCase::new(lockfile_repository.clone()));

    // Fetch the initial trusted range snapshot; without one the service
    // must not start serving requests.
    let range_source: Arc<dyn TrustedRangeSource> =
        Arc::new(GithubMetaRangeSource::new(config.allowlist.source_url.clone()));
    let (allowlist, refresher) = AllowlistRefresher::bootstrap(
        range_source,
        Duration::from_secs(config.allowlist.refresh_interval_secs),
    )
    .await
    .context("failed to fetch the initial trusted range snapshot")?;

    // Keep the snapshot fresh for the lifetime of the process
    tokio::spawn(refresher.run());

    // Create application state
    let app_state = AppState {
        allowlist,
        get_lockfile_use_case,
        put_lockfile_use_case,
    };

    // Build router
    let app = Router::new()
        .route("/", get(health::ping))
        .nest("/lockfiles", lockfiles::router())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
