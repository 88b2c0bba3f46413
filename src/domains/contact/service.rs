use std::error::Error;

use async_trait::async_trait;
use validator::Validate;

use super::model::ContactSubmission;
use crate::email::{EmailMessage, Mailer};

#[derive(Debug)]
pub enum ContactServiceError {
  ValidationError(String),
  DispatchError(String),
}

impl Error for ContactServiceError {}

impl std::fmt::Display for ContactServiceError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ContactServiceError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
      ContactServiceError::DispatchError(msg) => write!(f, "Dispatch Error: {}", msg),
    }
  }
}

#[async_trait]
pub trait ContactService: Send + Sync {
  async fn submit(&self, submission: ContactSubmission) -> Result<(), ContactServiceError>;
}

pub struct ContactServiceImpl<M> {
  mailer: M,
  owner_email: String,
}

impl<M> ContactServiceImpl<M>
where
  M: Mailer,
{
  pub fn new(mailer: M, owner_email: String) -> Self {
    Self { mailer, owner_email }
  }
}

#[async_trait]
impl<M> ContactService for ContactServiceImpl<M>
where
  M: Mailer,
{
  /// Relays one submission as two sequential dispatches: owner notification
  /// first, then sender confirmation. If the notification fails the
  /// confirmation is never attempted.
  async fn submit(&self, submission: ContactSubmission) -> Result<(), ContactServiceError> {
    submission
      .validate()
      .map_err(|e| ContactServiceError::ValidationError(format!("Validation failed: {}", e)))?;

    let notification = EmailMessage::new(
      vec![self.owner_email.clone()],
      format!("New Contact Form Submission from {}", submission.name),
      build_notification_body(&submission),
    );

    self.mailer.send(&notification).await.map_err(|e| {
      tracing::error!("Failed to send contact notification to owner: {:?}", e);
      ContactServiceError::DispatchError(format!("Notification dispatch failed: {}", e))
    })?;

    let confirmation = EmailMessage::new(
      vec![submission.email.clone()],
      "Thank you for contacting me!".to_string(),
      build_confirmation_body(&submission.name),
    );

    self.mailer.send(&confirmation).await.map_err(|e| {
      tracing::error!("Failed to send confirmation to {}: {:?}", submission.email, e);
      ContactServiceError::DispatchError(format!("Confirmation dispatch failed: {}", e))
    })?;

    Ok(())
  }
}

/// Owner notification body. Submitted fields are included verbatim, with
/// message newlines converted to `<br>`.
pub fn build_notification_body(submission: &ContactSubmission) -> String {
  format!(
    "<h2>New Contact Form Submission</h2>\
     <p><strong>Name:</strong> {}</p>\
     <p><strong>Email:</strong> {}</p>\
     <p><strong>Message:</strong></p>\
     <p>{}</p>\
     <hr>\
     <p><em>This message was sent from your portfolio website contact form.</em></p>",
    submission.name,
    submission.email,
    submission.message.replace('\n', "<br>")
  )
}

pub fn build_confirmation_body(name: &str) -> String {
  format!(
    "<h2>Thank you for your message!</h2>\
     <p>Hi {},</p>\
     <p>Thank you for reaching out through my portfolio website. I have received your message \
     and will get back to you as soon as possible.</p>\
     <p>Best regards,<br>John Doe</p>\
     <hr>\
     <p><em>This is an automated response. Please do not reply to this email.</em></p>",
    name
  )
}
