use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use itemstore_core::error::{classify, ApiError};

/// A failed request, tagged with the handler it failed in.
///
/// This is the single place where pipeline errors are logged and turned
/// into the JSON error contract.
#[derive(Debug)]
pub struct AppError {
    pub handler: &'static str,
    pub error: ApiError,
}

impl AppError {
    pub fn new(handler: &'static str, error: impl Into<ApiError>) -> Self {
        Self {
            handler,
            error: error.into(),
        }
    }

    /// Adapter for `map_err` at a handler boundary.
    pub fn in_handler(handler: &'static str) -> impl Fn(ApiError) -> Self {
        move |error| Self::new(handler, error)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let response = classify(&self.error);

        if response.is_server_error() {
            tracing::error!(
                handler = self.handler,
                kind = self.error.kind(),
                status = response.status,
                error = %self.error,
                "Request failed"
            );
        } else {
            tracing::warn!(
                handler = self.handler,
                kind = self.error.kind(),
                status = response.status,
                error = %self.error,
                "Request rejected"
            );
        }

        let status =
            StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(response.body)).into_response()
    }
}
