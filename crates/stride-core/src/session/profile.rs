use std::sync::Arc;

use log::{debug, info};

use crate::{
    error::Result,
    models::{Profile, ProfileChanges},
    service::CoachService,
};

/// The athlete profile as last seen by the service.
pub struct ProfileSession {
    service: Arc<dyn CoachService>,
    profile: Profile,
}

impl ProfileSession {
    /// # Errors
    ///
    /// Returns `StrideError::Transport` if the profile cannot be fetched.
    pub async fn load(service: Arc<dyn CoachService>) -> Result<Self> {
        let profile = service.get_profile().await?;
        Ok(Self { service, profile })
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Save `changes`. Without any changes nothing is sent.
    ///
    /// # Errors
    ///
    /// Returns `StrideError::Persistence` if the save fails; the previous
    /// profile is kept.
    pub async fn apply(&mut self, changes: &ProfileChanges) -> Result<&Profile> {
        if changes.is_empty() {
            debug!("No profile changes to save");
            return Ok(&self.profile);
        }
        let update = changes.to_update(&self.profile);
        self.profile = self.service.update_profile(&update).await?;
        info!("Saved profile");
        Ok(&self.profile)
    }
}
