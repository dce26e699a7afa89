use std::sync::Arc;

use crate::domain::repositories::mailing_list_repository::MailingListRepository;

/// Shared application state
///
/// The store client is constructed once at startup and injected through
/// the trait object, so handlers never build their own clients and tests
/// can swap in an in-memory store.
#[derive(Clone)]
pub struct AppState {
    pub mailing_list: Arc<dyn MailingListRepository>,
}

impl AppState {
    /// Creates state around a mailing-list store
    pub fn new(mailing_list: Arc<dyn MailingListRepository>) -> Self {
        Self { mailing_list }
    }
}
