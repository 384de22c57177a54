//! Rejects requests whose token is missing, invalid or revoked.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;

use crate::{
    app_state::AppState,
    domain::error::AuthAPIError,
    utils::auth::{extract_token, validate_token},
};

/// Validate the presented token and expose its [`Claims`](crate::utils::auth::Claims)
/// to the handler as a request extension.
///
/// # Errors
///
/// `MissingToken` when neither the auth cookie nor a bearer header is present,
/// `InvalidToken` when the token fails to decode or its `jti` is blacklisted.
pub async fn require_auth(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthAPIError> {
    let token = extract_token(&jar, request.headers()).ok_or(AuthAPIError::MissingToken)?;

    let claims = validate_token(&token, state.blacklist_store.as_ref())
        .await
        .map_err(|e| {
            tracing::warn!("Rejecting request: {:?}", e);
            AuthAPIError::InvalidToken
        })?;

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}
