use axum::Json;
use axum::extract::State;

use crate::AppState;
use crate::dto::SignupRequest;
use crate::http::{Request, Response};

/// Handler to sign a user up.
pub async fn handler(
    State(state): State<AppState>,
    Json(body): Json<SignupRequest>,
) -> Response {
    state.controller.handle(Request { body }).await
}
