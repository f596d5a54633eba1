use async_trait::async_trait;
use serde_json::Value;

use super::MessagingProvider;
use crate::errors::RemoteError;
use crate::models::PushMessage;

pub struct LinePushClient {
    base_url: String,
    client: reqwest::Client,
}

impl LinePushClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl MessagingProvider for LinePushClient {
    async fn push(&self, token: &str, message: &PushMessage) -> Result<Value, RemoteError> {
        let url = format!("{}/v2/bot/message/push", self.base_url);

        let resp = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(message)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(RemoteError::from_response(resp).await);
        }

        // LINE answers a successful push with `{}` and sometimes no body at all
        let text = resp.text().await?;
        if text.trim().is_empty() {
            return Ok(Value::Object(Default::default()));
        }
        Ok(serde_json::from_str(&text).unwrap_or(Value::String(text)))
    }
}
