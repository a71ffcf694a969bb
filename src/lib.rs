//! Keyrhythm Server Library
//!
//! Stores per-user typing-rhythm samples (key press durations and inter-key
//! intervals) next to a username/password pair, and serves them over HTTP.

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod routes;

pub use config::{Config, Environment};
pub use db::UserStore;
pub use error::{AppError, Result, StoreError};

use axum::{
    body::Body,
    error_handling::HandleErrorLayer,
    http::{HeaderValue, Method, Request},
    routing::{get, post},
    BoxError, Router,
};
use tower::{timeout::TimeoutLayer, ServiceBuilder};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use routes::{delete_user, get_user, health_check, list_filtered_users, list_users, save_user};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: UserStore,
    pub config: Config,
}

impl AppState {
    /// Create a new AppState with the given store and configuration
    pub fn new(store: UserStore, config: Config) -> Self {
        Self { store, config }
    }
}

fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers(Any)
}

/// Turn errors raised by fallible middleware into the response envelope
async fn handle_middleware_error(err: BoxError) -> AppError {
    if err.is::<tower::timeout::error::Elapsed>() {
        AppError::RequestTimeout
    } else {
        AppError::Middleware(err)
    }
}

/// Build the application router with all routes and middleware
pub fn app(state: AppState) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("-");
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id
                )
            }),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(HandleErrorLayer::new(handle_middleware_error))
        .layer(TimeoutLayer::new(state.config.http_timeout()))
        .layer(cors_layer(&state.config));

    Router::new()
        .route("/health", get(health_check))
        .route("/user", post(save_user))
        .route("/user/:username", get(get_user).delete(delete_user))
        .route("/users", get(list_users))
        .route("/users/filtered", get(list_filtered_users))
        .layer(middleware)
        .with_state(state)
}
