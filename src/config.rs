use std::env;

use anyhow::{Context, Result};

use crate::email::SmtpConfig;

/// Runtime configuration resolved from the environment.
///
/// `EMAIL_USER` and `EMAIL_PASS` are mandatory: there is no baked-in
/// credential fallback, and startup fails if either is missing. The mail
/// account identity doubles as the From address and the owner notification
/// recipient.
#[derive(Debug, Clone)]
pub struct AppConfig {
  pub port: u16,
  pub static_dir: String,
  pub owner_email: String,
  pub smtp: SmtpConfig,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    let email_user = env::var("EMAIL_USER").context("EMAIL_USER environment variable must be set")?;
    let email_pass = env::var("EMAIL_PASS").context("EMAIL_PASS environment variable must be set")?;

    let port = env::var("PORT")
      .unwrap_or_else(|_| "3000".to_string())
      .parse()
      .context("PORT must be a valid port number")?;

    let smtp_host = env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string());
    let smtp_port = env::var("SMTP_PORT")
      .unwrap_or_else(|_| "587".to_string())
      .parse()
      .context("SMTP_PORT must be a valid port number")?;

    let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());

    Ok(AppConfig {
      port,
      static_dir,
      owner_email: email_user.clone(),
      smtp: SmtpConfig {
        host: smtp_host,
        port: smtp_port,
        username: email_user.clone(),
        password: email_pass,
        from_email: email_user,
      },
    })
  }
}
