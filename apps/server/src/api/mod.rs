use std::sync::Arc;

use axum::{middleware, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::require_auth;
use crate::main_lib::AppState;

pub mod health;
pub mod objectives;

pub fn app_router(state: Arc<AppState>) -> Router {
    let protected = Router::new()
        .nest("/api/internal-objectives", objectives::router())
        .layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .merge(protected)
        .merge(health::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
