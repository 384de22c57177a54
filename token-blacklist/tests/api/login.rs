use crate::helpers::{get_random_email, TestApp};
use token_blacklist::{utils::constants::JWT_COOKIE_NAME, ErrorResponse};
use serde_json::json;

#[tokio::test]
async fn should_return_200_and_set_auth_cookie() {
    let app = TestApp::new().await;

    let response = app.post_login(&json!({
        "subject": get_random_email()
    })).await;
    assert_eq!(response.status().as_u16(), 200);

    let auth_cookie = response
        .cookies()
        .find(|cookie| cookie.name() == JWT_COOKIE_NAME)
        .expect("No auth cookie found");
    assert!(!auth_cookie.value().is_empty());
    assert!(auth_cookie.http_only());

    // The issued cookie authenticates follow-up requests
    assert_eq!(app.get_me().await.status().as_u16(), 200);
}

#[tokio::test]
async fn should_issue_distinct_tokens_per_login() {
    let app = TestApp::new().await;

    let first = app.login().await;
    let second = app.login().await;
    assert_ne!(first, second);
}

#[tokio::test]
async fn should_return_400_if_subject_is_blank() {
    let app = TestApp::new().await;

    let response = app.post_login(&json!({ "subject": "  " })).await;
    assert_eq!(response.status().as_u16(), 400);

    let error_response: ErrorResponse = response.json().await.expect("Failed to parse error response");
    assert_eq!(error_response.error, "Invalid subject");
}

#[tokio::test]
async fn should_return_422_if_malformed_input() {
    let app = TestApp::new().await;

    let response = app.post_login(&json!({ "user": "someone" })).await;
    assert_eq!(response.status().as_u16(), 422);
}
