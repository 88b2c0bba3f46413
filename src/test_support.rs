use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;
use axum::{
  body::{Body, Bytes},
  http::{Request, StatusCode},
  Router,
};
use serde::Serialize;
use tower::ServiceExt;

use crate::{
  app::create_app,
  email::{EmailMessage, Mailer},
  state::SharedAppState,
};

/// Mailer that records every message and accepts them all.
#[derive(Default)]
pub struct RecordingMailer {
  pub sent: Mutex<Vec<EmailMessage>>,
}

#[async_trait]
impl Mailer for RecordingMailer {
  async fn send(&self, message: &EmailMessage) -> Result<()> {
    self.sent.lock().unwrap().push(message.clone());
    Ok(())
  }
}

/// Mailer that records every attempt and rejects them all.
#[derive(Default)]
pub struct FailingMailer {
  pub attempts: Mutex<Vec<EmailMessage>>,
}

#[async_trait]
impl Mailer for FailingMailer {
  async fn send(&self, message: &EmailMessage) -> Result<()> {
    self.attempts.lock().unwrap().push(message.clone());
    anyhow::bail!("smtp transport unavailable")
  }
}

/// Mailer that accepts the first `fail_after` messages and rejects the rest.
pub struct FlakyMailer {
  pub fail_after: usize,
  pub attempts: Mutex<Vec<EmailMessage>>,
}

impl FlakyMailer {
  pub fn new(fail_after: usize) -> Self {
    FlakyMailer {
      fail_after,
      attempts: Mutex::new(Vec::new()),
    }
  }
}

#[async_trait]
impl Mailer for FlakyMailer {
  async fn send(&self, message: &EmailMessage) -> Result<()> {
    let mut attempts = self.attempts.lock().unwrap();
    attempts.push(message.clone());
    if attempts.len() > self.fail_after {
      anyhow::bail!("smtp transport unavailable")
    }
    Ok(())
  }
}

pub fn app_with_mailer<M: Mailer + 'static>(mailer: M, owner_email: &str) -> Router {
  let state = SharedAppState::new(mailer, owner_email.to_string());
  create_app(state, "static")
}

pub async fn post_json<T: Serialize>(app: Router, uri: &str, body: &T) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", "application/json")
    .body(Body::from(serde_json::to_vec(body).expect("serialize request body")))
    .expect("build request");

  send(app, request).await
}

pub async fn post_form(app: Router, uri: &str, body: &str) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", "application/x-www-form-urlencoded")
    .body(Body::from(body.to_string()))
    .expect("build request");

  send(app, request).await
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("GET")
    .uri(uri)
    .body(Body::empty())
    .expect("build request");

  send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Bytes) {
  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, body)
}
