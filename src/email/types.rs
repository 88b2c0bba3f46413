use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct SmtpConfig {
  pub host: String,
  pub port: u16,
  pub username: String,
  pub password: String,
  pub from_email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailMessage {
  pub to: Vec<String>,
  pub subject: String,
  pub html_body: String,
}

impl EmailMessage {
  pub fn new(to: Vec<String>, subject: String, html_body: String) -> Self {
    EmailMessage { to, subject, html_body }
  }
}
