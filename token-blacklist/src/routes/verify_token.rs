use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use crate::{
    app_state::AppState,
    domain::error::AuthAPIError,
    utils::auth::validate_token,
};

#[derive(Deserialize)]
pub struct VerifyTokenRequest {
    token: String,
}

#[derive(Serialize, Deserialize)]
pub struct VerifyTokenResponse {
    pub message: String,
}

#[tracing::instrument(name = "Verify token", skip_all)]
pub async fn verify_token(
    State(state): State<AppState>,
    Json(payload): Json<VerifyTokenRequest>,
) -> Result<impl IntoResponse, AuthAPIError> {
    tracing::debug!("Validating token");
    validate_token(&payload.token, state.blacklist_store.as_ref())
        .await
        .map_err(|e| {
            tracing::warn!("Token validation failed: {:?}", e);
            AuthAPIError::InvalidToken
        })?;

    tracing::info!("Token validated successfully");
    Ok((
        StatusCode::OK,
        Json(VerifyTokenResponse {
            message: "Token is valid".to_string()
        })
    ))
}
