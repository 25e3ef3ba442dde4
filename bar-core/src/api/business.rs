//! Business API handlers

use crate::domain::{BusinessSummary, TokenResolution};
use crate::error::{AppError, Result};
use crate::state::HasBusinessLookup;
use axum::{
    extract::{Path, State},
    Json,
};

/// Message returned for every rejected token.
///
/// Invalid, unknown and dangling tokens must look the same to the caller.
pub const INVALID_TOKEN_MESSAGE: &str = "Invalid or unknown invitation token";

#[utoipa::path(
    get,
    path = "/v1/business/token/{token}",
    tag = "Business",
    params(
        ("token" = String, Path, description = "Invitation token issued to the business")
    ),
    responses(
        (status = 200, description = "Business the invitation was issued for", body = BusinessSummary),
        (status = 400, description = "Token does not resolve to a business")
    )
)]
/// Look up a business by invitation token
pub async fn get_by_token<S: HasBusinessLookup>(
    State(state): State<S>,
    Path(token): Path<String>,
) -> Result<Json<BusinessSummary>> {
    lookup(&state, &token).await
}

/// `GET /v1/business/token/` with no token segment
pub async fn get_by_empty_token<S: HasBusinessLookup>(
    State(state): State<S>,
) -> Result<Json<BusinessSummary>> {
    lookup(&state, "").await
}

async fn lookup<S: HasBusinessLookup>(state: &S, token: &str) -> Result<Json<BusinessSummary>> {
    match state
        .business_lookup_service()
        .resolve_by_token(token)
        .await?
    {
        TokenResolution::Resolved(summary) => Ok(Json(summary)),
        TokenResolution::Rejected(_) => {
            Err(AppError::BadRequest(INVALID_TOKEN_MESSAGE.to_string()))
        }
    }
}
