use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use axum_extra::extract::{cookie, CookieJar};
use time::Duration;
use crate::{
    app_state::AppState,
    domain::error::AuthAPIError,
    utils::{
        auth::{extract_token, revoke_token, validate_token},
        constants::JWT_COOKIE_NAME,
    },
};

#[tracing::instrument(name = "Logout", skip_all)]
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
) -> Result<(CookieJar, impl IntoResponse), AuthAPIError> {
    let token = extract_token(&jar, &headers).ok_or(AuthAPIError::MissingToken)?;

    let claims = validate_token(&token, state.blacklist_store.as_ref())
        .await
        .map_err(|e| {
            tracing::warn!("Token validation failed: {:?}", e);
            AuthAPIError::InvalidToken
        })?;

    revoke_token(&claims, state.blacklist_store.as_ref())
        .await
        .map_err(AuthAPIError::unexpected)?;

    // Remove the JWT cookie
    let removal_cookie = cookie::Cookie::build((JWT_COOKIE_NAME, ""))
        .path("/")
        .max_age(Duration::ZERO)
        .http_only(true)
        .build();

    let jar = jar.remove(removal_cookie);

    Ok((jar, StatusCode::OK))
}
