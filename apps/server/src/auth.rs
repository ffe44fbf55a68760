//! Bearer-token authentication middleware.
//!
//! Tokens are minted by the platform's identity provider and verified here
//! with a shared HMAC secret. Valid tokens yield a [`Caller`] extension for
//! handlers; anything else is a 401.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{header, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use waitumusic_core::auth::Caller;

use crate::main_lib::AppState;

/// JWT claims carried by platform-issued tokens.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: i64,
    /// Platform role, e.g. `admin` or `managed_artist`.
    pub role: String,
    /// Expiry, seconds since the epoch.
    pub exp: usize,
}

pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(caller) = bearer_caller(&request, &state.jwt_decoding_key) else {
        return (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({
                "success": false,
                "error": "Authentication required",
            })),
        )
            .into_response();
    };

    request.extensions_mut().insert(caller);
    next.run(request).await
}

fn bearer_caller(request: &Request, key: &DecodingKey) -> Option<Caller> {
    let header_value = request
        .headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?;
    let token = header_value.strip_prefix("Bearer ")?;
    let token_data = decode::<Claims>(token, key, &Validation::default()).ok()?;
    Some(Caller {
        user_id: token_data.claims.sub,
        role: token_data.claims.role,
    })
}
