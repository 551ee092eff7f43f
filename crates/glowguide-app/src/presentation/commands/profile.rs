use crate::application::dtos::RecommendationsDto;
use crate::presentation::error::CommandError;
use crate::presentation::state::AppState;
use glowguide_domain::profile::SkinProfile;
use glowguide_domain::routine::RoutineLevel;
use glowguide_domain::skin_type::SkinType;

pub async fn get_profile(state: &AppState) -> Result<SkinProfile, CommandError> {
    Ok(state.services.profile.get_profile().await?)
}

pub async fn save_profile(
    state: &AppState,
    skin_type: SkinType,
    routine_level: RoutineLevel,
) -> Result<SkinProfile, CommandError> {
    Ok(state
        .services
        .profile
        .save_profile(skin_type, routine_level)
        .await?)
}

/// Routine and product recommendations for the stored profile.
pub async fn routine_recommendations(
    state: &AppState,
) -> Result<RecommendationsDto, CommandError> {
    Ok(state.services.routine.recommendations().await?)
}

/// Recommendations for an explicit selection, e.g. while previewing levels.
pub async fn routine_recommendations_for(
    state: &AppState,
    skin_type: SkinType,
    routine_level: RoutineLevel,
) -> Result<RecommendationsDto, CommandError> {
    Ok(state
        .services
        .routine
        .recommendations_for(skin_type, routine_level))
}
