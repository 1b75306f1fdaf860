use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Stable machine-readable code sent alongside the message
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidQuery(_) => "INVALID_QUERY",
            AppError::Config(_) => "CONFIG_ERROR",
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

/// JSON body returned for failed API requests
#[derive(Debug, serde::Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: String,
}

#[cfg(not(target_arch = "wasm32"))]
mod response {
    use super::{AppError, ErrorBody};
    use axum::{
        Json,
        extract::rejection::QueryRejection,
        http::StatusCode,
        response::{IntoResponse, Response},
    };

    impl AppError {
        pub fn status_code(&self) -> StatusCode {
            match self {
                AppError::InvalidQuery(_) => StatusCode::UNPROCESSABLE_ENTITY,
                AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            }
        }
    }

    impl From<QueryRejection> for AppError {
        fn from(rejection: QueryRejection) -> Self {
            AppError::InvalidQuery(rejection.body_text())
        }
    }

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            let status = self.status_code();
            if status.is_server_error() {
                tracing::error!(code = self.code(), "{}", self);
            } else {
                tracing::warn!(code = self.code(), "{}", self);
            }

            let body = ErrorBody {
                error: self.to_string(),
                code: self.code().to_string(),
            };
            (status, Json(body)).into_response()
        }
    }
}
