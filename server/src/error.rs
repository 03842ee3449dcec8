//! HTTP error mapping.
//!
//! Every failure leaves the server as the same JSON envelope the success
//! path uses, with `success: false` and no `data`.

use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use todo_core::TodoError;
use tracing::debug;

use crate::envelope::ApiResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Todo(#[from] TodoError),

    #[error("Method {0} not allowed")]
    MethodNotAllowed(Method),

    #[error("No route for {0}")]
    RouteNotFound(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Todo(err) if err.is_not_found() => StatusCode::NOT_FOUND,
            ApiError::RouteNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Todo(_) => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        debug!(%status, error = %self, "request rejected");
        (status, Json(ApiResponse::<()>::failure(self.to_string()))).into_response()
    }
}
