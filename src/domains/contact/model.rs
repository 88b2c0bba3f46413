use serde::{Deserialize, Serialize};
use validator::Validate;

/// A contact-form submission. Transient: consumed by the dispatch step and
/// discarded once the response is sent.
///
/// Fields default to an empty string on deserialization so a missing key and
/// an explicitly empty one take the same validation path. Presence is the only
/// constraint: the email address is not checked for format.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ContactSubmission {
  #[serde(default)]
  #[validate(length(min = 1))]
  pub name: String,
  #[serde(default)]
  #[validate(length(min = 1))]
  pub email: String,
  #[serde(default)]
  #[validate(length(min = 1))]
  pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactResponse {
  pub success: bool,
  pub message: String,
}

impl ContactResponse {
  pub fn sent() -> Self {
    ContactResponse {
      success: true,
      message: "Message sent successfully!".to_string(),
    }
  }
}
