use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub hubspot_access_token: String,
    pub line_channel_access_token: String,
    pub hubspot_api_url: String,
    pub line_api_url: String,
    /// CRM object type whose `confirmation` property the callback updates.
    pub crm_object_type: String,
    /// HubDB table holding every message template row.
    pub hubdb_table_id: String,
    /// Row rendered as the acknowledgment page after a callback.
    pub ack_row_id: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            hubspot_access_token: env::var("HUBSPOT_ACCESS_TOKEN").unwrap_or_default(),
            line_channel_access_token: env::var("LINE_CHANNEL_ACCESS_TOKEN").unwrap_or_default(),
            hubspot_api_url: env::var("HUBSPOT_API_URL")
                .unwrap_or_else(|_| "https://api.hubapi.com".to_string()),
            line_api_url: env::var("LINE_API_URL")
                .unwrap_or_else(|_| "https://api.line.me".to_string()),
            crm_object_type: env::var("CRM_OBJECT_TYPE")
                .unwrap_or_else(|_| "appointments".to_string()),
            hubdb_table_id: env::var("HUBDB_TABLE_ID").unwrap_or_else(|_| "131527577".to_string()),
            ack_row_id: env::var("ACK_ROW_ID").unwrap_or_else(|_| "195694278199".to_string()),
        }
    }
}
