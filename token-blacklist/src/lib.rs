pub mod app_state;
pub mod domain;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod utils;

// Re-export important types at the crate root
pub use domain::error::AuthAPIError;

use axum::{
    serve::Serve,
    Router,
    response::{IntoResponse, Response, Json},
    http::StatusCode,
    routing::{get, post},
};
use std::error::Error;
use tower_http::trace::TraceLayer;
use app_state::AppState;
use serde::{Deserialize, Serialize};
use utils::tracing::{make_span_with_request_id, on_request, on_response};

pub struct Application {
    server: Serve<Router, Router>,
    pub address: String,
}

impl Application {
    pub async fn build(state: AppState, address: &str) -> Result<Self, Box<dyn Error>> {
        let protected = Router::new()
            .route("/me", get(routes::me))
            .route_layer(axum::middleware::from_fn_with_state(
                state.clone(),
                middleware::require_auth,
            ));

        let router = Router::new()
            .route("/login", post(routes::login))
            .route("/logout", post(routes::logout))
            .route("/verify_token", post(routes::verify_token))
            .merge(protected)
            .with_state(state)
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(make_span_with_request_id)
                    .on_request(on_request)
                    .on_response(on_response),
            );

        let listener = tokio::net::TcpListener::bind(address).await?;
        let address = listener.local_addr()?.to_string();
        let server = axum::serve(listener, router);

        Ok(Self { server, address })
    }

    pub async fn run(self) -> Result<(), std::io::Error> {
        tracing::info!("listening on {}", &self.address);
        self.server.await
    }
}

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn log_error_chain(e: &(dyn Error + 'static)) {
    let separator = "\n-----------------------------------------------------------------------------------\n";
    let mut report = format!("{}{:?}\n", separator, e);
    let mut current = e.source();
    while let Some(cause) = current {
        let str = format!("Caused by:\n\n{:?}", cause);
        report = format!("{}\n{}", report, str);
        current = cause.source();
    }
    report = format!("{}\n{}", report, separator);
    tracing::error!("{}", report);
}

impl IntoResponse for AuthAPIError {
    fn into_response(self) -> Response {
        log_error_chain(&self);

        let (status, error_message) = match self {
            AuthAPIError::InvalidSubject => {
                (StatusCode::BAD_REQUEST, "Invalid subject")
            },
            AuthAPIError::MissingToken => {
                (StatusCode::BAD_REQUEST, "Missing token")
            },
            AuthAPIError::InvalidToken => {
                (StatusCode::UNAUTHORIZED, "Invalid token")
            },
            AuthAPIError::UnexpectedError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Unexpected error")
            },
        };

        let body = Json(ErrorResponse {
            error: error_message.to_string(),
        });

        (status, body).into_response()
    }
}
