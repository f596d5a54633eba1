pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod services;
pub mod state;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/callback", get(handlers::callback::confirmation_callback))
        .route("/push/template", post(handlers::push::templated_push))
        .route("/push/static", post(handlers::push::static_push))
        .route("/push/raw", post(handlers::push::raw_push))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
