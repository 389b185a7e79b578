// src/server/handlers/parse.rs
//! Name canonicalization endpoint

use crate::name::normalize;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Request body for name parsing
#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    /// Raw name to canonicalize
    #[serde(default)]
    pub input: String,
}

/// Response for a successfully canonicalized name
#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub msg: String,
}

/// Canonicalize a raw name without touching the store
///
/// POST /parse
pub async fn parse_name(Json(request): Json<ParseRequest>) -> Response {
    match normalize(&request.input) {
        Ok(name) => Json(ParseResponse {
            msg: name.into_string(),
        })
        .into_response(),
        Err(e) => {
            let error = serde_json::json!({
                "error": "invalid_name",
                "message": format!("{}", e),
            });
            (StatusCode::BAD_REQUEST, Json(error)).into_response()
        }
    }
}
