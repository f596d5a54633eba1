//! LINE Messaging API push payload.
//!
//! Only the subset of the flex message vocabulary the reminders use is
//! modelled; raw template rows bypass it through [`FlexContents::Raw`].

use serde::Serialize;
use serde_json::Value;

use crate::models::ConfirmationAction;

#[derive(Debug, Clone, Serialize)]
pub struct PushMessage {
    pub to: String,
    pub messages: Vec<FlexMessage>,
}

impl PushMessage {
    pub fn single(to: &str, message: FlexMessage) -> Self {
        Self {
            to: to.to_string(),
            messages: vec![message],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename = "flex", rename_all = "camelCase")]
pub struct FlexMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contents: Option<FlexContents>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum FlexContents {
    Bubble(Bubble),
    Raw(Value),
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename = "bubble")]
pub struct Bubble {
    pub body: FlexBox,
    pub footer: FlexBox,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename = "box")]
pub struct FlexBox {
    pub layout: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<&'static str>,
    pub contents: Vec<Component>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Component {
    Text {
        #[serde(skip_serializing_if = "Option::is_none")]
        text: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        weight: Option<&'static str>,
        size: &'static str,
        #[serde(skip_serializing_if = "Option::is_none")]
        color: Option<&'static str>,
        #[serde(skip_serializing_if = "Option::is_none")]
        margin: Option<&'static str>,
        wrap: bool,
    },
    Separator {
        margin: &'static str,
    },
    Button {
        style: &'static str,
        color: &'static str,
        action: PostbackAction,
    },
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename = "postback")]
pub struct PostbackAction {
    pub label: String,
    pub data: String,
}

impl PostbackAction {
    /// Encodes `action=<name>&appointmentId=<id>&tableRowId=<id>`; the
    /// callback route receives these back as query parameters.
    pub fn new(
        label: String,
        action: ConfirmationAction,
        appointment_id: &str,
        table_row_id: &str,
    ) -> Self {
        Self {
            label,
            data: format!(
                "action={}&appointmentId={appointment_id}&tableRowId={table_row_id}",
                action.as_str()
            ),
        }
    }
}

/// Reminder bubble: bold title, rendered body, separator, then the buttons.
pub fn reminder_bubble(title: Option<String>, body: String, buttons: Vec<Component>) -> Bubble {
    Bubble {
        body: FlexBox {
            layout: "vertical",
            spacing: None,
            contents: vec![
                Component::Text {
                    text: title,
                    weight: Some("bold"),
                    size: "md",
                    color: Some("#00AA00"),
                    margin: None,
                    wrap: true,
                },
                Component::Text {
                    text: Some(body),
                    weight: None,
                    size: "sm",
                    color: None,
                    margin: Some("md"),
                    wrap: true,
                },
                Component::Separator { margin: "md" },
            ],
        },
        footer: FlexBox {
            layout: "vertical",
            spacing: Some("md"),
            contents: buttons,
        },
    }
}
