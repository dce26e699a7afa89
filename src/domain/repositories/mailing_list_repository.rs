use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::domain::mailing_list::record::MailingListRecord;

/// Error surfaced by the mailing-list store
///
/// `Display` yields the message reported to the caller: the store's own
/// message when it provided one, a fixed fallback otherwise.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store rejected the insert with a message
    #[error("{0}")]
    Rejected(String),

    /// The store failed without a usable message
    #[error("Insert failed.")]
    InsertFailed,
}

/// Repository trait for the mailing list
#[async_trait]
pub trait MailingListRepository: Send + Sync {
    /// Insert a record and return the inserted row(s)
    async fn insert(&self, record: &MailingListRecord) -> Result<Vec<Value>, StoreError>;
}
