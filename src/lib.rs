//! Signup validates account registration requests and hands them to an
//! injected account creation service.

#![forbid(unsafe_code)]

pub mod config;
pub mod controller;
pub mod dto;
pub mod email;
pub mod error;
pub mod http;
pub mod ports;
mod router;
pub mod telemetry;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use tower::ServiceBuilder;
use tower_http::LatencyUnit;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};

use controller::SignupController;
use email::StandardEmailValidator;
use ports::{AddAccount, Controller};

/// MUST NEVER be used in production.
#[cfg(test)]
pub async fn make_request(
    app: Router,
    method: axum::http::Method,
    path: &str,
    body: String,
) -> axum::http::Response<axum::body::Body> {
    use axum::extract::Request;
    use axum::http::header;
    use tower::util::ServiceExt;

    app.oneshot(
        Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(axum::body::Body::from(body))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// State sharing between routes.
#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<dyn Controller>,
}

impl AppState {
    /// Wire a [`SignupController`] with the configured email policy.
    pub fn new(
        config: &config::Configuration,
        add_account: Arc<dyn AddAccount>,
    ) -> Self {
        let email_validator =
            Arc::new(StandardEmailValidator::new(config.email.clone()));

        Self {
            controller: Arc::new(SignupController::new(
                email_validator,
                add_account,
            )),
        }
    }
}

/// Create router.
pub fn app(state: AppState) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new().level(tracing::Level::INFO),
                )
                .on_response(
                    DefaultOnResponse::new().latency_unit(LatencyUnit::Micros),
                ),
        )
        // Answer 500 instead of dropping the connection on panic.
        .layer(CatchPanicLayer::custom(
            |_: Box<dyn std::any::Any + Send + 'static>| {
                tracing::error!("handler panicked, returning 500 status");
                http::server_error().into_response()
            },
        ))
        // Set a timeout.
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ));

    Router::new()
        // `POST /signup` goes to `signup`.
        .route("/signup", post(router::signup::handler))
        .with_state(state)
        .layer(middleware)
}
