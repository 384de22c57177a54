use axum::{http::StatusCode, response::IntoResponse, Json};
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use crate::{domain::error::AuthAPIError, utils::auth::generate_auth_cookie};

#[derive(Deserialize)]
pub struct LoginRequest {
    subject: String,
}

/// Issue a token for `subject` in the auth cookie. Identity is taken on
/// trust; only the token and its `jti` are managed here.
#[tracing::instrument(name = "Login", skip_all)]
pub async fn login(
    jar: CookieJar,
    Json(request): Json<LoginRequest>,
) -> Result<(CookieJar, impl IntoResponse), AuthAPIError> {
    if request.subject.trim().is_empty() {
        return Err(AuthAPIError::InvalidSubject);
    }

    let auth_cookie = generate_auth_cookie(&request.subject)
        .map_err(AuthAPIError::unexpected)?;

    tracing::info!("Issued auth token");
    Ok((jar.add(auth_cookie), StatusCode::OK))
}
