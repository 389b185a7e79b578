// src/server/handlers/summary.rs
//! Recipe resolution endpoint

use crate::name::normalize;
use crate::resolver::{self, ResolveError};
use crate::server::ServerState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Query parameters for recipe summaries
#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    /// Raw recipe name, canonicalized before lookup
    #[serde(default)]
    pub name: String,
}

/// Resolve a recipe into its flattened ingredient totals
///
/// GET /summary?name=...
pub async fn get_summary(
    State(state): State<Arc<RwLock<ServerState>>>,
    Query(query): Query<SummaryQuery>,
) -> Response {
    // A query that normalizes to nothing can never match a stored entry.
    let canonical = match normalize(&query.name) {
        Ok(name) => name,
        Err(_) => return failure(ResolveError::NotFound(query.name.clone())),
    };

    let state = state.read().await;
    match resolver::resolve(&state.cookbook, &canonical) {
        Ok(summary) => Json(summary).into_response(),
        Err(e) => failure(e),
    }
}

fn failure(err: ResolveError) -> Response {
    let (status, code) = match &err {
        ResolveError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
        ResolveError::NotARecipe(_) => (StatusCode::BAD_REQUEST, "not_a_recipe"),
        ResolveError::IncompleteRecipe => (StatusCode::BAD_REQUEST, "incomplete_recipe"),
        ResolveError::CyclicDefinition(_) => (StatusCode::BAD_REQUEST, "cyclic_definition"),
    };
    let error = serde_json::json!({
        "error": code,
        "message": err.to_string(),
    });
    (status, Json(error)).into_response()
}
