use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use calendar::ExpandError;
use timetable_core::ValidationError;

#[derive(Debug)]
pub struct ApiError(pub String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, self.0).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError(err.to_string())
    }
}

impl From<ExpandError> for ApiError {
    fn from(err: ExpandError) -> Self {
        ApiError(err.to_string())
    }
}
