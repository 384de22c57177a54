use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use crate::utils::auth::Claims;

#[derive(Serialize, Deserialize)]
pub struct MeResponse {
    pub subject: String,
    pub jti: String,
}

// Only reachable behind `require_auth`, which inserts the claims
pub async fn me(Extension(claims): Extension<Claims>) -> Json<MeResponse> {
    Json(MeResponse {
        subject: claims.sub,
        jti: claims.jti,
    })
}
