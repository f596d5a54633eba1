use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::models::booking::{RAW_REQUIRED, STATIC_REQUIRED, TEMPLATED_REQUIRED};
use crate::models::message::reminder_bubble;
use crate::models::{BookingRequest, FlexContents, FlexMessage, PushMessage, TemplateRow, TemplateValues};
use crate::services::buttons;
use crate::services::template::{self, Substitution};
use crate::state::AppState;

const SEND_FAILED: &str = "Error sending message";

const STATIC_TITLE: &str = "Appointment Reminder";
const STATIC_CONTENT: &str = "Hi ${name},\\nThis is a reminder of your appointment on ${date} at ${time}.\\nPlease let us know if you can make it.";

// POST /push/template
pub async fn templated_push(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Value>, AppError> {
    let req = parse_request(&body, TEMPLATED_REQUIRED)?;
    let token = line_token(&state.config)?;

    let row = fetch_template(&state, req.table_row_id()).await?;
    let message = reminder_message(&req, row.values);

    send(&state, token, &message).await
}

// POST /push/static
pub async fn static_push(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Value>, AppError> {
    let req = parse_request(&body, STATIC_REQUIRED)?;
    let token = line_token(&state.config)?;

    let message = reminder_message(&req, static_template());

    send(&state, token, &message).await
}

// POST /push/raw
pub async fn raw_push(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Value>, AppError> {
    let req = parse_request(&body, RAW_REQUIRED)?;
    let token = line_token(&state.config)?;

    let row = fetch_template(&state, req.table_row_id()).await?;
    let message = PushMessage::single(
        &req.user_id,
        FlexMessage {
            alt_text: row.values.title,
            contents: row.values.content.map(FlexContents::Raw),
        },
    );

    send(&state, token, &message).await
}

fn parse_request(body: &[u8], required: &[&'static str]) -> Result<BookingRequest, AppError> {
    let value = BookingRequest::parse(body).map_err(|e| {
        tracing::warn!(error = %e, "invalid JSON");
        AppError::InvalidJson
    })?;

    BookingRequest::from_body(&value, required).map_err(|missing| {
        tracing::info!(missing = ?missing, "push request missing required fields");
        AppError::MissingFields(missing)
    })
}

fn line_token(config: &AppConfig) -> Result<&str, AppError> {
    if config.line_channel_access_token.is_empty() {
        tracing::error!("LINE_CHANNEL_ACCESS_TOKEN is not set");
        return Err(AppError::Config("LINE channel access token not configured"));
    }
    Ok(&config.line_channel_access_token)
}

async fn fetch_template(state: &AppState, row_id: &str) -> Result<TemplateRow, AppError> {
    let config = &state.config;
    state
        .content
        .fetch_row(&config.hubspot_access_token, &config.hubdb_table_id, row_id)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, row_id, "failed to fetch template row");
            AppError::remote(SEND_FAILED)(e)
        })
}

/// Fixed reminder used by the static push route.
pub fn static_template() -> TemplateValues {
    TemplateValues {
        title: Some(STATIC_TITLE.to_string()),
        name: Some(STATIC_TITLE.to_string()),
        content: Some(Value::String(STATIC_CONTENT.to_string())),
        confirm_label: Some("Confirm".to_string()),
        reschedule_label: Some("Reschedule".to_string()),
        cancel_label: Some("Cancel".to_string()),
        ..Default::default()
    }
}

/// Bubble message with rendered body and the buttons the template labels.
pub fn reminder_message(req: &BookingRequest, values: TemplateValues) -> PushMessage {
    let body = template::render(
        values.content.as_ref(),
        &Substitution {
            name: req.name(),
            date: req.date(),
            time: req.time(),
        },
    );
    let buttons = buttons::assemble(&values, req.appointment_id(), req.table_row_id());

    PushMessage::single(
        &req.user_id,
        FlexMessage {
            alt_text: values.title,
            contents: Some(FlexContents::Bubble(reminder_bubble(values.name, body, buttons))),
        },
    )
}

async fn send(state: &AppState, token: &str, message: &PushMessage) -> Result<Json<Value>, AppError> {
    let data = state.messaging.push(token, message).await.map_err(|e| {
        tracing::error!(error = %e, to = %message.to, "LINE push failed");
        AppError::remote(SEND_FAILED)(e)
    })?;

    tracing::info!(to = %message.to, "push message sent");
    Ok(Json(json!({
        "message": "Push message sent successfully",
        "data": data,
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn booking() -> BookingRequest {
        BookingRequest::from_body(
            &json!({
                "userId": "U1",
                "name": "Alice",
                "date": "Mar 15",
                "time": "2pm",
                "appointmentId": "42",
            }),
            STATIC_REQUIRED,
        )
        .unwrap()
    }

    #[test]
    fn test_static_reminder_message() {
        let value = serde_json::to_value(reminder_message(&booking(), static_template())).unwrap();
        let contents = &value["messages"][0]["contents"];

        assert_eq!(value["messages"][0]["altText"], "Appointment Reminder");
        assert_eq!(
            contents["body"]["contents"][1]["text"],
            "Hi Alice,\nThis is a reminder of your appointment on Mar 15 at 2pm.\nPlease let us know if you can make it."
        );

        let footer = contents["footer"]["contents"].as_array().unwrap();
        assert_eq!(footer.len(), 3);
        assert_eq!(footer[0]["action"]["label"], "Confirm");
        assert_eq!(footer[1]["action"]["label"], "Reschedule");
        assert_eq!(footer[2]["action"]["label"], "Cancel");
        assert_eq!(footer[2]["action"]["data"], "action=cancel&appointmentId=42&tableRowId=");
    }

    #[test]
    fn test_line_token_required() {
        let mut config = AppConfig::from_env();
        config.line_channel_access_token = String::new();
        assert!(matches!(line_token(&config), Err(AppError::Config(_))));

        config.line_channel_access_token = "abc".to_string();
        assert_eq!(line_token(&config).unwrap(), "abc");
    }
}
