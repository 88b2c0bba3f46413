//! Email sending functionality module
//!
//! This module provides the outbound mail seam: a `Mailer` trait for
//! dispatching composed messages, and an SMTP implementation backed by lettre.

mod service;
mod types;

pub use service::{Mailer, SmtpMailer};
pub use types::{EmailMessage, SmtpConfig};
