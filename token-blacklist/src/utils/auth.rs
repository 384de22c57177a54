use axum::http::{header::AUTHORIZATION, HeaderMap};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Validation};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use color_eyre::eyre::{eyre, Context, Result};

use crate::domain::{data_stores::BlacklistStore, jti::Jti};
use super::constants::{JWT_COOKIE_NAME, JWT_SECRET, TOKEN_LEEWAY_SECONDS, TOKEN_TTL_SECONDS};

#[tracing::instrument(name = "Generate auth cookie", skip_all)]
pub fn generate_auth_cookie(subject: &str) -> Result<Cookie<'static>> {
    let token = generate_auth_token(subject)?;
    Ok(create_auth_cookie(token))
}

#[tracing::instrument(name = "Create auth cookie", skip_all)]
fn create_auth_cookie(token: String) -> Cookie<'static> {
    tracing::debug!("Creating auth cookie");
    Cookie::build((JWT_COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Issue a signed token for `subject` with a fresh random `jti`.
#[tracing::instrument(name = "Generate auth token", skip_all)]
pub fn generate_auth_token(subject: &str) -> Result<String> {
    tracing::debug!("Generating JWT token");

    let delta = chrono::Duration::try_seconds(TOKEN_TTL_SECONDS)
        .ok_or_else(|| eyre!("Failed to create duration from TOKEN_TTL_SECONDS"))?;

    let exp = Utc::now()
        .checked_add_signed(delta)
        .ok_or_else(|| eyre!("Failed to add duration to current time"))?
        .timestamp();

    let exp: usize = exp
        .try_into()
        .wrap_err("Failed to convert timestamp to usize")?;

    let claims = Claims {
        sub: subject.to_owned(),
        jti: Jti::default().as_ref().to_owned(),
        exp,
    };

    create_token(&claims).wrap_err("Failed to create JWT token")
}

#[tracing::instrument(name = "Create token", skip_all)]
fn create_token(claims: &Claims) -> Result<String> {
    tracing::debug!("Encoding JWT token");
    encode(
        &jsonwebtoken::Header::default(),
        claims,
        &EncodingKey::from_secret(JWT_SECRET.expose_secret().as_bytes()),
    )
    .wrap_err("Failed to encode JWT token")
}

/// Decode `token` and reject it if its `jti` has been revoked.
#[tracing::instrument(name = "Validate token", skip_all)]
pub async fn validate_token<T>(token: &str, blacklist_store: &T) -> Result<Claims>
where
    T: BlacklistStore + ?Sized,
{
    tracing::debug!("Decoding and validating JWT token");
    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(JWT_SECRET.expose_secret().as_bytes()),
        &token_validation(),
    )
    .map(|data| data.claims)
    .wrap_err("Failed to decode or validate JWT token")?;

    tracing::debug!(jti = %claims.jti, "Checking if token is blacklisted");
    if blacklist_store.is_blacklisted(&claims.jti()).await {
        tracing::warn!(jti = %claims.jti, "Token is blacklisted");
        return Err(eyre!("Token is blacklisted"));
    }

    Ok(claims)
}

// Decoding accepts tokens up to TOKEN_LEEWAY_SECONDS past `exp`
fn token_validation() -> Validation {
    let mut validation = Validation::default();
    validation.leeway = TOKEN_LEEWAY_SECONDS;
    validation
}

/// Blacklist the token's `jti` for as long as decoding would still accept it.
#[tracing::instrument(name = "Revoke token", skip_all, fields(jti = %claims.jti))]
pub async fn revoke_token<T>(claims: &Claims, blacklist_store: &T) -> Result<()>
where
    T: BlacklistStore + ?Sized,
{
    let leeway: i64 = TOKEN_LEEWAY_SECONDS
        .try_into()
        .wrap_err("Failed to convert leeway to i64")?;
    let revoked_until = claims
        .expires_at()?
        .checked_add_signed(chrono::Duration::seconds(leeway))
        .ok_or_else(|| eyre!("Failed to add leeway to exp claim"))?;

    blacklist_store.add(claims.jti(), Some(revoked_until)).await;

    tracing::info!("Token revoked");
    Ok(())
}

/// Token presented in the auth cookie, or else in an `Authorization: Bearer` header.
pub fn extract_token(jar: &CookieJar, headers: &HeaderMap) -> Option<String> {
    if let Some(cookie) = jar.get(JWT_COOKIE_NAME) {
        return Some(cookie.value().to_owned());
    }

    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(extract_bearer)
}

fn extract_bearer(header: &str) -> Option<String> {
    let token = header.strip_prefix("Bearer ")?;
    if token.is_empty() { None } else { Some(token.to_owned()) }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub jti: String,
    pub exp: usize,
}

impl Claims {
    pub fn jti(&self) -> Jti {
        Jti::from(self.jti.as_str())
    }

    pub fn expires_at(&self) -> Result<DateTime<Utc>> {
        let exp: i64 = self
            .exp
            .try_into()
            .wrap_err("Failed to convert exp claim to i64")?;

        DateTime::from_timestamp(exp, 0).ok_or_else(|| eyre!("exp claim is out of range"))
    }
}
