//! Server initialization and routing

use crate::api;
use crate::config::Config;
use crate::middleware::ObservabilityLayer;
use crate::openapi::ApiDoc;
use crate::repository::{
    business::BusinessRepositoryImpl, invitation::InvitationRepositoryImpl,
};
use crate::service::BusinessLookupService;
use crate::state::HasBusinessLookup;
use anyhow::{Context, Result};
use axum::{
    body::Body,
    http::{HeaderValue, Method, Request},
    routing::get,
    Json, Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use sqlx::{mysql::MySqlPoolOptions, MySqlPool};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};
use utoipa::OpenApi;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db_pool: MySqlPool,
    pub business_lookup_service:
        Arc<BusinessLookupService<InvitationRepositoryImpl, BusinessRepositoryImpl>>,
}

impl HasBusinessLookup for AppState {
    type InvitationRepo = InvitationRepositoryImpl;
    type BusinessRepo = BusinessRepositoryImpl;

    fn config(&self) -> &Config {
        &self.config
    }

    fn business_lookup_service(
        &self,
    ) -> &BusinessLookupService<Self::InvitationRepo, Self::BusinessRepo> {
        &self.business_lookup_service
    }

    async fn check_ready(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(&self.db_pool)
            .await
            .is_ok()
    }
}

/// Run the server
pub async fn run(config: Config, prometheus_handle: Option<PrometheusHandle>) -> Result<()> {
    let db_pool = MySqlPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_secs))
        .connect(&config.database.url)
        .await
        .context("Failed to connect to database")?;

    info!("Connected to database");

    let invitation_repo = Arc::new(InvitationRepositoryImpl::new(db_pool.clone()));
    let business_repo = Arc::new(BusinessRepositoryImpl::new(db_pool.clone()));

    let business_lookup_service =
        Arc::new(BusinessLookupService::new(invitation_repo, business_repo));

    let state = AppState {
        config: Arc::new(config.clone()),
        db_pool,
        business_lookup_service,
    };

    let app = build_router(state).merge(api::metrics::router(prometheus_handle));

    let http_addr = config.http_addr();
    let listener = TcpListener::bind(&http_addr)
        .await
        .with_context(|| format!("Failed to bind {}", http_addr))?;
    info!("HTTP server started on {}", http_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received shutdown signal, shutting down gracefully..."),
        Err(e) => warn!("Failed to listen for shutdown signal: {}", e),
    }
}

/// Build the HTTP router.
///
/// Generic over the state so tests drive the production handlers with
/// in-memory repositories.
pub fn build_router<S: HasBusinessLookup>(state: S) -> Router {
    let cors = cors_layer(&state.config().cors_allowed_origins);

    // The default TraceLayer span records the full URI, which would put the
    // token in the logs. ObservabilityLayer's span carries the normalized path.
    let trace = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!("http", method = %request.method())
        });

    Router::new()
        // Health endpoints
        .route("/health", get(api::health::health))
        .route("/ready", get(api::health::ready::<S>))
        // OpenAPI document
        .route("/api-docs/openapi.json", get(openapi_json))
        // Business lookup
        .route(
            "/v1/business/token/{token}",
            get(api::business::get_by_token::<S>),
        )
        .route(
            "/v1/business/token/",
            get(api::business::get_by_empty_token::<S>),
        )
        .route(
            "/v1/business/token",
            get(api::business::get_by_empty_token::<S>),
        )
        // Add middleware
        .layer(trace)
        .layer(ObservabilityLayer)
        .layer(cors)
        .with_state(state)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers(Any);

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    if origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        cors.allow_origin(AllowOrigin::list(origins))
    }
}
