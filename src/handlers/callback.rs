use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Html;

use crate::errors::AppError;
use crate::models::ConfirmationAction;
use crate::services::ack_page::render_ack_page;
use crate::services::hubspot::ContentStore;
use crate::state::AppState;

// GET /callback?action=confirm&appointmentId=123
// A repeated parameter keeps its last value.
pub async fn confirmation_callback(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Html<String>, AppError> {
    let action = params.get("action").filter(|a| !a.is_empty());
    let appointment_id = params.get("appointmentId").filter(|id| !id.is_empty());
    let (Some(action), Some(appointment_id)) = (action, appointment_id) else {
        return Err(AppError::Validation(
            "Missing required query parameters: action or appointmentId",
        ));
    };

    let action = ConfirmationAction::parse(action).ok_or(AppError::Validation("Invalid action value"))?;

    tracing::info!(
        action = action.as_str(),
        appointment_id = %appointment_id,
        "updating appointment confirmation"
    );

    // no token pre-check here: an empty token surfaces as HubSpot's own 401
    let config = &state.config;
    state
        .crm
        .update_confirmation(
            &config.hubspot_access_token,
            &config.crm_object_type,
            appointment_id,
            action,
        )
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "error updating HubSpot");
            AppError::remote("Error updating confirmation")(e)
        })?;

    acknowledgment_page(
        state.content.as_ref(),
        &config.hubspot_access_token,
        &config.hubdb_table_id,
        &config.ack_row_id,
    )
    .await
}

pub async fn acknowledgment_page(
    content: &dyn ContentStore,
    token: &str,
    table_id: &str,
    row_id: &str,
) -> Result<Html<String>, AppError> {
    let row = content.fetch_row(token, table_id, row_id).await.map_err(|e| {
        tracing::error!(error = %e, "error fetching acknowledgment template");
        AppError::TemplateFetch(e)
    })?;

    Ok(Html(render_ack_page(&row.values)))
}
