use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{metrics_handler, metrics_middleware, trace_id};
use crate::routes::{health, shipping_charges};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
}

pub fn create_app(config: Config, pool: PgPool) -> Router {
    let config = Arc::new(config);

    let state = AppState {
        pool,
        config: config.clone(),
    };

    // Build CORS layer based on configuration
    let cors = if config.security.cors_origins.is_empty() {
        // Default: allow any origin (for development)
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Production: only allow specified origins
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Versioned API routes. Static segments (lookup, cost) are matched
    // before the :charge_id parameter.
    let api_routes = Router::new()
        .route(
            "/api/v1/shipping-charges",
            post(shipping_charges::create_shipping_charge)
                .get(shipping_charges::list_shipping_charges),
        )
        .route(
            "/api/v1/shipping-charges/lookup",
            get(shipping_charges::lookup_shipping_charge),
        )
        .route(
            "/api/v1/shipping-charges/cost",
            get(shipping_charges::get_shipping_cost),
        )
        .route(
            "/api/v1/shipping-charges/:charge_id",
            get(shipping_charges::get_shipping_charge)
                .put(shipping_charges::update_shipping_charge)
                .delete(shipping_charges::deactivate_shipping_charge),
        );

    // Health and metrics endpoints (unauthenticated, unversioned)
    let ops_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/live", get(health::live))
        .route("/health/ready", get(health::ready))
        .route("/metrics", get(metrics_handler));

    Router::new()
        .merge(api_routes)
        .merge(ops_routes)
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(trace_id))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}
