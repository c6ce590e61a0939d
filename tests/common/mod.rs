//! Common test utilities for e2e tests
//!
//! Provides test infrastructure for spinning up a PostgreSQL container,
//! running migrations, and creating a test application with a fixed
//! trusted range snapshot.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{header, Method, Request},
    response::Response,
    routing::get,
    Router,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::PgPool;
use testcontainers::{runners::AsyncRunner, ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tower::util::ServiceExt;
use tower_http::trace::TraceLayer;

use lockfile_registry::application::allowlist::Allowlist;
use lockfile_registry::application::use_cases::lockfiles::{
    GetLockfileUseCase, PutLockfileUseCase,
};
use lockfile_registry::domain::models::trusted_ranges::TrustedRangeSet;
use lockfile_registry::infrastructure::driven_adapters::config::DatabaseConfig;
use lockfile_registry::infrastructure::driven_adapters::database;
use lockfile_registry::infrastructure::driven_adapters::lockfile_repository::PostgresLockfileRepository;
use lockfile_registry::infrastructure::driving_adapters::api_rest::handlers::{health, lockfiles};
use lockfile_registry::infrastructure::driving_adapters::api_rest::AppState;

/// Lockfile payload as returned by the API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockfileResponse {
    pub id: String,
    pub repository_id: String,
    pub repository_name: String,
    pub content: Vec<EntryPayload>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One lockfile entry on the wire
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct EntryPayload {
    pub id: String,
    pub path: String,
    pub url: String,
    pub hash: String,
}

/// The `{"data": ...}` success envelope
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Structured error body
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetailBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetailBody {
    pub code: String,
    pub message: String,
}

/// Test application context
pub struct TestApp {
    pub router: Router,
    pub pool: PgPool,
    pub allowlist: Arc<Allowlist>,
    _container: ContainerAsync<Postgres>,
}

impl TestApp {
    /// Create a test application trusting `10.0.0.0/8`
    pub async fn new() -> Self {
        Self::with_trusted_ranges(&["10.0.0.0/8"]).await
    }

    /// Create a test application with a fresh PostgreSQL database and the
    /// given trusted CIDR ranges as the initial snapshot
    pub async fn with_trusted_ranges(cidrs: &[&str]) -> Self {
        // Start PostgreSQL container
        let container = Postgres::default()
            .with_tag("16-alpine")
            .start()
            .await
            .expect("Failed to start PostgreSQL container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let database_config = DatabaseConfig {
            url: format!("postgres://postgres:postgres@{}:{}/postgres", host, port),
            max_connections: 5,
            min_connections: 1,
            acquire_timeout_secs: 5,
        };

        // Create connection pool through the same helper the binary uses
        let pool = database::create_pool(&database_config)
            .await
            .expect("Failed to connect to test database");

        // Run migrations
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        // Create repository and use cases
        let lockfile_repository = Arc::new(PostgresLockfileRepository::new(pool.clone()));
        let get_lockfile_use_case = Arc::new(GetLockfileUseCase::new(lockfile_repository.clone()));
        let put_lockfile_use_case = Arc::new(PutLockfileUseCase::new(lockfile_repository.clone()));

        // Seed the allowlist directly instead of fetching from upstream
        let allowlist = Arc::new(Allowlist::new(TrustedRangeSet::from_cidrs(cidrs)));

        // Create application state
        let app_state = AppState {
            allowlist: allowlist.clone(),
            get_lockfile_use_case,
            put_lockfile_use_case,
        };

        // Build router
        let router = Router::new()
            .route("/", get(health::ping))
            .nest("/lockfiles", lockfiles::router())
            .layer(TraceLayer::new_for_http())
            .with_state(app_state);

        Self {
            router,
            pool,
            allowlist,
            _container: container,
        }
    }

    /// Send a request with the given caller address as the socket peer and
    /// an X-Forwarded-For header taking precedence over it
    pub async fn request_forwarded(
        &self,
        method: Method,
        uri: &str,
        peer: &str,
        forwarded_for: &str,
        body: Option<serde_json::Value>,
    ) -> Response {
        let peer: SocketAddr = format!("{peer}:54321")
            .parse()
            .expect("Invalid peer address");

        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("x-forwarded-for", forwarded_for)
            .extension(ConnectInfo(peer));

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_string(&json).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed")
    }

    /// Send a request with the given caller address as the socket peer
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        caller: &str,
        body: Option<serde_json::Value>,
    ) -> Response {
        let peer: SocketAddr = format!("{caller}:54321")
            .parse()
            .expect("Invalid caller address");

        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .extension(ConnectInfo(peer));

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_string(&json).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed")
    }
}

/// Deserialize a response body into the given type
pub async fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    serde_json::from_slice(&bytes).expect("Failed to deserialize response body")
}

/// A valid PUT body with a single entry
pub fn put_body() -> serde_json::Value {
    serde_json::json!({
        "repositoryName": "My Repo",
        "posts": [
            { "id": "a", "path": "/p", "url": "http://x", "hash": "h1" }
        ]
    })
}
