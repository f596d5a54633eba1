use crate::config::AppConfig;
use crate::services::hubspot::{ContentStore, CrmStore};
use crate::services::messaging::MessagingProvider;

pub struct AppState {
    pub config: AppConfig,
    pub crm: Box<dyn CrmStore>,
    pub content: Box<dyn ContentStore>,
    pub messaging: Box<dyn MessagingProvider>,
}
