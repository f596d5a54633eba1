pub mod line;

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::RemoteError;
use crate::models::PushMessage;

#[async_trait]
pub trait MessagingProvider: Send + Sync {
    /// Sends one push message and returns the body the platform echoed.
    async fn push(&self, token: &str, message: &PushMessage) -> Result<Value, RemoteError>;
}
