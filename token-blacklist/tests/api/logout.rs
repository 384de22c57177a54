use token_blacklist::{
    services::data_stores::HashmapBlacklistStore,
    utils::{auth::{generate_auth_token, validate_token}, constants::{JWT_COOKIE_NAME, TOKEN_LEEWAY_SECONDS}},
    ErrorResponse,
};
use crate::helpers::{get_random_email, TestApp};
use reqwest::Url;
use serde_json::json;

#[tokio::test]
async fn should_return_400_if_jwt_cookie_missing() {
    let app = TestApp::new().await;
    let response = app.logout().await;
    assert_eq!(response.status().as_u16(), 400);

    let error_response: ErrorResponse = response.json().await.expect("Failed to parse error response");
    assert_eq!(error_response.error, "Missing token");
}

#[tokio::test]
async fn should_return_401_if_invalid_token() {
    let app = TestApp::new().await;

    app.cookie_jar.add_cookie_str(
        &format!(
            "{}=invalid; HttpOnly; SameSite=Lax; Path=/",
            JWT_COOKIE_NAME
        ),
        &Url::parse(&app.address).expect("Failed to parse URL"),
    );

    let response = app.logout().await;
    assert_eq!(response.status().as_u16(), 401);

    let error_response: ErrorResponse = response.json().await.expect("Failed to parse error response");
    assert_eq!(error_response.error, "Invalid token");
}

#[tokio::test]
async fn should_return_200_if_valid_jwt_cookie() {
    let app = TestApp::new().await;
    let token = app.login().await;
    let claims = validate_token(&token, &HashmapBlacklistStore::new())
        .await
        .expect("Failed to decode token");

    let response = app.logout().await;
    assert_eq!(response.status().as_u16(), 200);

    // Blacklisted for as long as the token would still decode
    let expires_at = app
        .blacklist_store
        .expiration(&claims.jti())
        .await
        .expect("jti was not blacklisted");
    assert_eq!(
        expires_at.timestamp(),
        claims.exp as i64 + TOKEN_LEEWAY_SECONDS as i64
    );
}

#[tokio::test]
async fn should_return_400_if_logout_called_twice_in_a_row() {
    let app = TestApp::new().await;
    app.login().await;

    let first_logout = app.logout().await;
    assert_eq!(first_logout.status().as_u16(), 200);

    // The cookie was cleared by the first logout
    let second_logout = app.logout().await;
    assert_eq!(second_logout.status().as_u16(), 400);

    let error_response: ErrorResponse = second_logout.json().await.expect("Failed to parse error response");
    assert_eq!(error_response.error, "Missing token");
}

#[tokio::test]
async fn should_return_401_if_revoked_token_is_presented_again() {
    let app = TestApp::new().await;
    let token = app.login().await;

    let first_logout = app.logout().await;
    assert_eq!(first_logout.status().as_u16(), 200);

    app.set_jwt_cookie(&token);
    let second_logout = app.logout().await;
    assert_eq!(second_logout.status().as_u16(), 401);

    let error_response: ErrorResponse = second_logout.json().await.expect("Failed to parse error response");
    assert_eq!(error_response.error, "Invalid token");
}

#[tokio::test]
async fn should_reject_revoked_token_on_verify() {
    let app = TestApp::new().await;
    let token = app.login().await;

    let response = app.post_verify_token(&json!({ "token": token })).await;
    assert_eq!(response.status().as_u16(), 200);

    let logout_response = app.logout().await;
    assert_eq!(logout_response.status().as_u16(), 200);

    let response = app.post_verify_token(&json!({ "token": token })).await;
    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn should_revoke_token_presented_as_bearer() {
    let app = TestApp::new().await;
    // Issued outside the client, so the cookie jar stays empty
    let token = generate_auth_token(&get_random_email()).expect("Failed to generate token");

    let response = app.logout_with_bearer(&token).await;
    assert_eq!(response.status().as_u16(), 200);

    let response = app.get_me_with_bearer(&token).await;
    assert_eq!(response.status().as_u16(), 401);

    let error_response: ErrorResponse = response.json().await.expect("Failed to parse error response");
    assert_eq!(error_response.error, "Invalid token");
}
