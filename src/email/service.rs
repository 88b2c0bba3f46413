use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use lettre::{
  message::header::ContentType, transport::smtp::authentication::Credentials, AsyncSmtpTransport, AsyncTransport,
  Message, Tokio1Executor,
};

use crate::email::types::{EmailMessage, SmtpConfig};

/// Seam between message composition and the actual transport. Success means
/// the transport accepted the message, not that it was delivered.
#[async_trait]
pub trait Mailer: Send + Sync {
  async fn send(&self, message: &EmailMessage) -> Result<()>;
}

#[async_trait]
impl<M: Mailer + ?Sized> Mailer for Arc<M> {
  async fn send(&self, message: &EmailMessage) -> Result<()> {
    (**self).send(message).await
  }
}

pub struct SmtpMailer {
  smtp_config: SmtpConfig,
  transporter: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
  pub fn new(smtp_config: SmtpConfig) -> Result<Self> {
    let creds = Credentials::new(smtp_config.username.clone(), smtp_config.password.clone());

    let transporter = if smtp_config.host == "localhost" || smtp_config.host == "mailhog" {
      AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&smtp_config.host)
        .credentials(creds)
        .port(smtp_config.port)
        .build()
    } else {
      AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp_config.host)?
        .credentials(creds)
        .port(smtp_config.port)
        .build()
    };

    Ok(SmtpMailer {
      smtp_config,
      transporter,
    })
  }
}

#[async_trait]
impl Mailer for SmtpMailer {
  async fn send(&self, message: &EmailMessage) -> Result<()> {
    for recipient in &message.to {
      let email = Message::builder()
        .from(self.smtp_config.from_email.parse()?)
        .to(recipient.parse()?)
        .subject(&message.subject)
        .header(ContentType::TEXT_HTML)
        .body(message.html_body.clone())?;

      self.transporter.send(email).await?;
    }

    Ok(())
  }
}
