use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;

use crate::config::SupabaseConfig;
use crate::domain::mailing_list::record::MailingListRecord;
use crate::domain::repositories::mailing_list_repository::{MailingListRepository, StoreError};

/// Fixed target table for signup inserts
const MAILING_LIST_TABLE: &str = "nicky_saturn_mailing_list";

/// Supabase (PostgREST) implementation of MailingListRepository
///
/// Inserts rows over the project's REST endpoint with
/// `Prefer: return=representation` so the inserted rows come back in the
/// response body.
pub struct SupabaseMailingListRepository {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl SupabaseMailingListRepository {
    /// Creates a new SupabaseMailingListRepository
    pub fn new(config: &SupabaseConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    fn insert_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, MAILING_LIST_TABLE)
    }
}

#[async_trait]
impl MailingListRepository for SupabaseMailingListRepository {
    async fn insert(&self, record: &MailingListRecord) -> Result<Vec<Value>, StoreError> {
        let response = self
            .client
            .post(self.insert_url())
            .header("apikey", &self.api_key)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header("Prefer", "return=representation")
            .json(record)
            .send()
            .await
            .map_err(|e| StoreError::Rejected(e.to_string()))?;

        let status = response.status();
        let body = response.json::<Value>().await.ok();

        tracing::debug!(status = %status, body = ?body, "mailing list insert response");

        if !status.is_success() {
            // PostgREST errors carry a human-readable `message` field
            return Err(body
                .as_ref()
                .and_then(|b| b.get("message"))
                .and_then(Value::as_str)
                .map(|m| StoreError::Rejected(m.to_string()))
                .unwrap_or(StoreError::InsertFailed));
        }

        match body {
            Some(Value::Array(rows)) => Ok(rows),
            Some(other) => Ok(vec![other]),
            None => Ok(Vec::new()),
        }
    }
}
