//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::repository::FullRepository;
use crate::services::dashboard::DashboardSettings;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn FullRepository>,
    pub dashboard: DashboardSettings,
}

impl AppState {
    /// Create a new application state with default dashboard settings.
    pub fn new(repository: Arc<dyn FullRepository>) -> Self {
        Self {
            repository,
            dashboard: DashboardSettings::default(),
        }
    }

    pub fn with_dashboard_settings(mut self, dashboard: DashboardSettings) -> Self {
        self.dashboard = dashboard;
        self
    }
}
