use async_trait::async_trait;

use crate::profile::SkinProfile;
use crate::routine::RoutineLevel;
use crate::shared::DomainError;
use crate::skin_type::SkinType;

/// Key-value persistence for the user's skin preferences.
///
/// Read paths apply defaults (`normal` skin, `moderate` routine) when a key
/// is missing or unreadable rather than surfacing an error.
#[async_trait]
pub trait PreferenceRepository: Send + Sync {
    /// Load the persisted profile, or the default profile if none exists.
    async fn load_profile(&self) -> Result<SkinProfile, DomainError>;

    /// Persist the whole profile.
    async fn save_profile(&self, profile: &SkinProfile) -> Result<(), DomainError>;

    /// Load the persisted skin type, defaulting to `Normal`.
    async fn load_skin_type(&self) -> Result<SkinType, DomainError>;

    /// Persist the skin type.
    async fn save_skin_type(&self, skin_type: SkinType) -> Result<(), DomainError>;

    /// Load the selected routine level, defaulting to `Moderate`.
    async fn load_routine_level(&self) -> Result<RoutineLevel, DomainError>;

    /// Persist the routine level.
    async fn save_routine_level(&self, level: RoutineLevel) -> Result<(), DomainError>;

    /// Whether onboarding has ever been completed on this install.
    async fn load_onboarding_complete(&self) -> Result<bool, DomainError>;

    /// Record that onboarding finished. Never unset.
    async fn save_onboarding_complete(&self) -> Result<(), DomainError>;
}
