use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{json, Value};

/// Failure reported by HubSpot or LINE.
///
/// `status` is `None` when no HTTP response arrived at all (DNS, TLS,
/// timeout). `body` holds the remote JSON body when it parses, the raw text
/// otherwise, or the transport error message.
#[derive(Debug, Clone, thiserror::Error)]
#[error("remote call failed{}: {}", status_suffix(.status), body_text(.body))]
pub struct RemoteError {
    pub status: Option<u16>,
    pub body: Value,
}

impl RemoteError {
    pub fn new(status: Option<u16>, body: Value) -> Self {
        Self { status, body }
    }

    /// Consumes a non-2xx response, keeping its status and body.
    pub async fn from_response(resp: reqwest::Response) -> Self {
        let status = resp.status().as_u16();
        let text = resp.text().await.unwrap_or_default();
        let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
        Self::new(Some(status), body)
    }

    pub fn status_code(&self) -> StatusCode {
        self.status
            .and_then(|s| StatusCode::from_u16(s).ok())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" with status {s}")).unwrap_or_default()
}

fn body_text(body: &Value) -> String {
    match body {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

impl From<reqwest::Error> for RemoteError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(err.status().map(|s| s.as_u16()), Value::String(err.to_string()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("invalid JSON input")]
    InvalidJson,

    #[error("missing required fields: {0:?}")]
    MissingFields(Vec<&'static str>),

    #[error("validation error: {0}")]
    Validation(&'static str),

    #[error("configuration error: {0}")]
    Config(&'static str),

    #[error("{context}: {source}")]
    Remote {
        context: &'static str,
        source: RemoteError,
    },

    #[error("failed to fetch template: {0}")]
    TemplateFetch(RemoteError),
}

impl AppError {
    pub fn remote(context: &'static str) -> impl FnOnce(RemoteError) -> Self {
        move |source| AppError::Remote { context, source }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::InvalidJson => (
                StatusCode::BAD_REQUEST,
                json!({ "message": "Invalid JSON input" }),
            ),
            AppError::MissingFields(fields) => (
                StatusCode::BAD_REQUEST,
                json!({ "message": "Missing required fields", "missingFields": fields }),
            ),
            AppError::Validation(message) => (StatusCode::BAD_REQUEST, json!({ "message": message })),
            AppError::Config(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "message": message }))
            }
            AppError::Remote { context, source } => (
                source.status_code(),
                json!({ "message": context, "error": source.body }),
            ),
            AppError::TemplateFetch(source) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Failed to fetch template", "details": source.to_string() }),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(res: Response) -> Value {
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_missing_fields_response() {
        let res = AppError::MissingFields(vec!["userId", "date"]).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let json = body_json(res).await;
        assert_eq!(json["message"], "Missing required fields");
        assert_eq!(json["missingFields"], json!(["userId", "date"]));
    }

    #[tokio::test]
    async fn test_remote_forwards_status_and_body() {
        let source = RemoteError::new(Some(404), json!({ "status": "error", "message": "not found" }));
        let res = AppError::remote("Error sending message")(source).into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let json = body_json(res).await;
        assert_eq!(json["message"], "Error sending message");
        assert_eq!(json["error"]["message"], "not found");
    }

    #[tokio::test]
    async fn test_remote_without_status_is_500() {
        let source = RemoteError::new(None, Value::String("connection refused".to_string()));
        let res = AppError::remote("Error updating confirmation")(source).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(res).await;
        assert_eq!(json["error"], "connection refused");
    }

    #[test]
    fn test_remote_error_display() {
        let with_status = RemoteError::new(Some(404), json!({ "message": "row gone" }));
        assert_eq!(
            with_status.to_string(),
            r#"remote call failed with status 404: {"message":"row gone"}"#
        );

        let without_status = RemoteError::new(None, Value::String("timed out".to_string()));
        assert_eq!(without_status.to_string(), "remote call failed: timed out");
    }

    #[tokio::test]
    async fn test_template_fetch_details() {
        let source = RemoteError::new(Some(404), json!({ "message": "row gone" }));
        let json = body_json(AppError::TemplateFetch(source).into_response()).await;
        assert_eq!(json["error"], "Failed to fetch template");
        assert_eq!(
            json["details"],
            r#"remote call failed with status 404: {"message":"row gone"}"#
        );
    }
}
