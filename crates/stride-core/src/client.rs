//! Entry point tying settings, the service client and sessions together.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use log::debug;

use crate::{
    error::Result,
    service::{CoachService, HttpCoachClient},
    session::{GoalBook, PlanSession, ProfileSession, ScheduleEditor, WeekPlanner},
    settings::SettingsStore,
};

/// Configured access to the coach service.
pub struct StrideClient {
    settings: SettingsStore,
    service: Arc<dyn CoachService>,
}

impl StrideClient {
    pub fn settings(&self) -> &SettingsStore {
        &self.settings
    }

    pub fn service(&self) -> Arc<dyn CoachService> {
        Arc::clone(&self.service)
    }

    pub fn plan_session(&self) -> PlanSession {
        PlanSession::new(self.service())
    }

    pub fn goal_book(&self) -> GoalBook {
        GoalBook::new(self.service())
    }

    pub fn week_planner(&self) -> WeekPlanner {
        WeekPlanner::new(self.service())
    }

    /// # Errors
    ///
    /// Returns `StrideError::Transport` if the profile cannot be fetched.
    pub async fn profile_session(&self) -> Result<ProfileSession> {
        ProfileSession::load(self.service()).await
    }

    /// Load the schedule for editing, using the configured debounce window.
    ///
    /// # Errors
    ///
    /// Returns `StrideError::Transport` if the schedule cannot be fetched.
    pub async fn schedule_editor(&self) -> Result<ScheduleEditor> {
        let window = self.settings.current().debounce_window();
        ScheduleEditor::load(self.service(), window).await
    }
}

/// Builder for creating and configuring [`StrideClient`] instances.
#[derive(Default)]
pub struct StrideClientBuilder {
    settings_file: Option<PathBuf>,
    server_url: Option<String>,
    service: Option<Arc<dyn CoachService>>,
}

impl StrideClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom settings file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_CONFIG_HOME/stride/settings.json` or `~/.config/stride/settings.json`
    pub fn with_settings_file<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.settings_file = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Overrides the service URL from the settings file.
    pub fn with_server_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.server_url = Some(url);
        }
        self
    }

    /// Uses `service` instead of an HTTP client.
    pub fn with_service(mut self, service: Arc<dyn CoachService>) -> Self {
        self.service = Some(service);
        self
    }

    /// Builds the configured client.
    ///
    /// # Errors
    ///
    /// Returns `StrideError::XdgDirectory`, `StrideError::FileSystem` or
    /// `StrideError::Serialization` if the settings cannot be loaded, and
    /// `StrideError::Configuration` if the HTTP client cannot be built.
    pub fn build(self) -> Result<StrideClient> {
        let settings = match self.settings_file {
            Some(path) => SettingsStore::load(path)?,
            None => SettingsStore::load_default()?,
        };

        let service = match self.service {
            Some(service) => service,
            None => {
                let url = self
                    .server_url
                    .unwrap_or_else(|| settings.current().server_url);
                debug!("Using coach service at {url}");
                Arc::new(HttpCoachClient::new(url)?)
            }
        };

        Ok(StrideClient { settings, service })
    }
}
