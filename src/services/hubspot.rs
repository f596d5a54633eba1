use async_trait::async_trait;
use serde_json::json;

use crate::errors::RemoteError;
use crate::models::{ConfirmationAction, TemplateRow};

/// CRM object store. Callers pass the access token on every call.
#[async_trait]
pub trait CrmStore: Send + Sync {
    async fn update_confirmation(
        &self,
        token: &str,
        object_type: &str,
        object_id: &str,
        action: ConfirmationAction,
    ) -> Result<(), RemoteError>;
}

/// HubDB row store holding message templates.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn fetch_row(&self, token: &str, table_id: &str, row_id: &str) -> Result<TemplateRow, RemoteError>;
}

pub struct HubSpotClient {
    base_url: String,
    client: reqwest::Client,
}

impl HubSpotClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl CrmStore for HubSpotClient {
    async fn update_confirmation(
        &self,
        token: &str,
        object_type: &str,
        object_id: &str,
        action: ConfirmationAction,
    ) -> Result<(), RemoteError> {
        let url = format!("{}/crm/v3/objects/{object_type}/{object_id}", self.base_url);
        let payload = json!({
            "properties": {
                "confirmation": action.status_code(),
            },
        });

        let resp = self
            .client
            .patch(&url)
            .bearer_auth(token)
            .json(&payload)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(RemoteError::from_response(resp).await);
        }

        tracing::debug!(object_type, object_id, "CRM confirmation updated");
        Ok(())
    }
}

#[async_trait]
impl ContentStore for HubSpotClient {
    async fn fetch_row(&self, token: &str, table_id: &str, row_id: &str) -> Result<TemplateRow, RemoteError> {
        let url = format!("{}/cms/v3/hubdb/tables/{table_id}/rows/{row_id}", self.base_url);

        let resp = self.client.get(&url).bearer_auth(token).send().await?;

        if !resp.status().is_success() {
            return Err(RemoteError::from_response(resp).await);
        }

        Ok(resp.json().await?)
    }
}
