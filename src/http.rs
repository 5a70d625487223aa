//! Transport-agnostic request and response types with their builders.

use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::dto::{Account, SignupRequest};
use crate::error::{ParamError, ResponseError};

/// Request handed to a controller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Request {
    pub body: SignupRequest,
}

/// Response body, either the created resource or an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Body {
    Account(Account),
    Error(ResponseError),
}

/// Response produced by a controller.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status_code: StatusCode,
    pub body: Body,
}

/// `201 Created` with the new account.
pub fn created(account: Account) -> Response {
    Response {
        status_code: StatusCode::CREATED,
        body: Body::Account(account),
    }
}

/// `400 Bad Request` describing the rejected field.
pub fn bad_request(error: &ParamError) -> Response {
    Response {
        status_code: StatusCode::BAD_REQUEST,
        body: Body::Error(error.into()),
    }
}

/// `500 Internal Server Error` without any detail.
pub fn server_error() -> Response {
    Response {
        status_code: StatusCode::INTERNAL_SERVER_ERROR,
        body: Body::Error(ResponseError::default()),
    }
}

impl IntoResponse for Response {
    fn into_response(self) -> axum::response::Response {
        (self.status_code, Json(self.body)).into_response()
    }
}
