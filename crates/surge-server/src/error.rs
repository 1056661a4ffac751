use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use surge_core::{ErrorBody, SurgeError};

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Backend(StatusCode, String),
}

impl From<SurgeError> for AppError {
    fn from(err: SurgeError) -> Self {
        match err {
            SurgeError::EmptyUrl => AppError::BadRequest(SurgeError::EmptyUrl.to_string()),
            // Client mistakes pass through so the page shows the backend's reason
            SurgeError::Status { status, body } if (400..500).contains(&status) => {
                let code = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_REQUEST);
                AppError::Backend(code, body)
            }
            other => AppError::Backend(StatusCode::BAD_GATEWAY, other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Backend(status, msg) => (status, msg),
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
