use std::sync::Arc;

use crate::domains::contact::{
  model::ContactSubmission,
  service::{ContactService, ContactServiceError, ContactServiceImpl},
};
use crate::email::Mailer;

pub trait AppState: Clone + Send + Sync + 'static {
  fn submit_contact(
    &self,
    submission: ContactSubmission,
  ) -> impl std::future::Future<Output = Result<(), ContactServiceError>> + Send;
}

#[derive(Clone)]
pub struct SharedAppState {
  pub contact_service: Arc<dyn ContactService>,
}

impl SharedAppState {
  pub fn new<M: Mailer + 'static>(mailer: M, owner_email: String) -> Self {
    let contact_service = Arc::new(ContactServiceImpl::new(mailer, owner_email));

    Self { contact_service }
  }
}

impl AppState for SharedAppState {
  async fn submit_contact(&self, submission: ContactSubmission) -> Result<(), ContactServiceError> {
    self.contact_service.submit(submission).await
  }
}
