use axum::{
  extract::{FromRequest, Request, State},
  http::header::CONTENT_TYPE,
  response::{IntoResponse, Json as JsonResponse, Response},
  routing::{post, Router},
  Form, Json,
};
use serde::de::DeserializeOwned;

use super::model::{ContactResponse, ContactSubmission};
use crate::{
  state::{AppState, SharedAppState},
  AppError,
};

pub fn contact_routes() -> Router<SharedAppState> {
  Router::new().route("/contact", post(submit_contact_handler))
}

/// Body extractor that accepts JSON or form-encoded payloads, selected by the
/// request's Content-Type.
pub struct JsonOrForm<T>(pub T);

impl<S, T> FromRequest<S> for JsonOrForm<T>
where
  S: Send + Sync,
  T: DeserializeOwned,
{
  type Rejection = Response;

  async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
    let content_type = req
      .headers()
      .get(CONTENT_TYPE)
      .and_then(|value| value.to_str().ok())
      .unwrap_or_default();

    if content_type.starts_with("application/x-www-form-urlencoded") {
      let Form(payload) = Form::<T>::from_request(req, state)
        .await
        .map_err(IntoResponse::into_response)?;
      return Ok(JsonOrForm(payload));
    }

    let Json(payload) = Json::<T>::from_request(req, state)
      .await
      .map_err(IntoResponse::into_response)?;
    Ok(JsonOrForm(payload))
  }
}

pub async fn submit_contact_handler(
  State(state): State<SharedAppState>,
  JsonOrForm(payload): JsonOrForm<ContactSubmission>,
) -> Result<JsonResponse<ContactResponse>, AppError> {
  state.submit_contact(payload).await?;

  Ok(JsonResponse(ContactResponse::sent()))
}
