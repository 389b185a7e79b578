// src/server/handlers/entries.rs
//! Entry registration endpoint
//!
//! Translates [`RegisterError`] values into HTTP status signals; the
//! validation itself lives in the cookbook so the rule order is the
//! same no matter which boundary invokes it.

use crate::cookbook::{EntryRequest, RegisterError};
use crate::server::ServerState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// Register an ingredient or recipe
///
/// POST /entry
pub async fn create_entry(
    State(state): State<Arc<RwLock<ServerState>>>,
    Json(request): Json<EntryRequest>,
) -> Response {
    let mut state = state.write().await;

    match state.cookbook.register(&request) {
        Ok(name) => {
            info!("Registered {} {:?}", request.kind, name.as_str());
            StatusCode::OK.into_response()
        }
        Err(e) => rejection(e),
    }
}

fn rejection(err: RegisterError) -> Response {
    let code = match &err {
        RegisterError::EmptyName => "empty_name",
        RegisterError::UnknownType(_) => "unknown_type",
        RegisterError::NegativeCookTime => "negative_cook_time",
        RegisterError::DuplicateName(_) => "duplicate_name",
        RegisterError::DuplicateComponent(_) => "duplicate_component",
    };
    let error = serde_json::json!({
        "error": code,
        "message": err.to_string(),
    });
    (StatusCode::BAD_REQUEST, Json(error)).into_response()
}
