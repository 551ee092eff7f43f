use std::sync::Arc;

use tracing::{error, info};

use glowguide_domain::profile::{PreferenceRepository, SkinProfile};
use glowguide_domain::routine::RoutineLevel;
use glowguide_domain::shared::DomainError;
use glowguide_domain::skin_type::SkinType;

pub struct ProfileService {
    repo: Arc<dyn PreferenceRepository>,
}

impl ProfileService {
    pub fn new(repo: Arc<dyn PreferenceRepository>) -> Self {
        Self { repo }
    }

    /// The stored profile; defaults are applied by the repository, so this
    /// never fails just because nothing has been saved yet.
    pub async fn get_profile(&self) -> Result<SkinProfile, DomainError> {
        self.repo.load_profile().await
    }

    pub async fn save_profile(
        &self,
        skin_type: SkinType,
        routine_level: RoutineLevel,
    ) -> Result<SkinProfile, DomainError> {
        let profile = SkinProfile::new(skin_type, routine_level);
        self.repo.save_profile(&profile).await?;
        info!(skin_type = %skin_type, routine_level = routine_level.as_str(), "Profile saved");
        Ok(profile)
    }

    /// Persist a resolved skin type without blocking the caller. Assessment
    /// screens move on immediately; a failed write is logged and the stored
    /// value simply stays stale.
    pub fn save_skin_type_detached(&self, skin_type: SkinType) {
        let repo = self.repo.clone();
        tokio::spawn(async move {
            if let Err(e) = repo.save_skin_type(skin_type).await {
                error!(skin_type = %skin_type, error = %e, "Failed to persist skin type");
            }
        });
    }
}
