use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde_json::json;

/// HTTP-facing error. Serializes to the `{success, message}` envelope the
/// contact form client expects.
#[derive(Debug)]
pub struct AppError {
  pub status_code: StatusCode,
  pub message: String,
}

impl AppError {
  pub fn new(status_code: StatusCode, message: impl Into<String>) -> Self {
    Self {
      status_code,
      message: message.into(),
    }
  }

  pub fn bad_request(message: impl Into<String>) -> Self {
    Self::new(StatusCode::BAD_REQUEST, message)
  }

  pub fn internal_server_error(message: impl Into<String>) -> Self {
    Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    let body = Json(json!({
      "success": false,
      "message": self.message,
    }));

    (self.status_code, body).into_response()
  }
}

impl From<crate::domains::contact::service::ContactServiceError> for AppError {
  fn from(error: crate::domains::contact::service::ContactServiceError) -> Self {
    use crate::domains::contact::service::ContactServiceError;
    match error {
      // Canonical client-facing strings; transport detail stays in the logs.
      ContactServiceError::ValidationError(_) => AppError::bad_request("All fields are required"),
      ContactServiceError::DispatchError(_) => {
        AppError::internal_server_error("Failed to send message. Please try again later.")
      }
    }
  }
}
