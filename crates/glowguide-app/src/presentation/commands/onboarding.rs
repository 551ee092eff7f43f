use std::str::FromStr;

use tracing::error;

use crate::application::dtos::ProgressDto;
use crate::presentation::error::CommandError;
use crate::presentation::state::AppState;
use glowguide_domain::navigation::{OnboardingAnswers, OnboardingTarget, Screen};
use glowguide_domain::skin_type::SkinType;

/// Advance the onboarding flow, merging this step's answers into the
/// accumulated record. On the completing transition the install is marked
/// onboarded and any declared skin type is persisted; neither write blocks
/// the navigation.
pub async fn advance_onboarding(
    state: &AppState,
    target: OnboardingTarget,
    answers: OnboardingAnswers,
) -> Result<ProgressDto, CommandError> {
    let mut navigator = state.navigator.lock().await;

    if !navigator.advance_onboarding(target, answers) {
        return Err(CommandError::transition_rejected(
            "Onboarding cannot advance from the current screen",
        ));
    }

    if navigator.is_onboarding_complete() {
        let declared_type = navigator
            .answers()
            .skin_type
            .as_deref()
            .and_then(|raw| SkinType::from_str(raw).ok());

        let preferences = state.repositories.preferences.clone();
        tokio::spawn(async move {
            if let Err(e) = preferences.save_onboarding_complete().await {
                error!(error = %e, "Failed to record onboarding completion");
            }
            if let Some(skin_type) = declared_type {
                if let Err(e) = preferences.save_skin_type(skin_type).await {
                    error!(error = %e, "Failed to persist onboarding skin type");
                }
            }
        });
    }

    Ok(ProgressDto::from_navigator(&navigator))
}

/// Back navigation in onboarding. Staying put on the first screen is not
/// an error; trying to re-enter a finished onboarding flow is.
pub async fn retreat_onboarding(state: &AppState) -> Result<ProgressDto, CommandError> {
    let mut navigator = state.navigator.lock().await;

    if navigator.is_onboarding_complete() {
        return Err(CommandError::transition_rejected(
            "Onboarding is complete and cannot be re-entered",
        ));
    }

    navigator.retreat_onboarding();
    Ok(ProgressDto::from_navigator(&navigator))
}

pub async fn current_progress(state: &AppState) -> ProgressDto {
    let navigator = state.navigator.lock().await;
    ProgressDto::from_navigator(&navigator)
}

/// Unified back control: routes to whichever screen space is active.
pub async fn go_back(state: &AppState) -> Result<ProgressDto, CommandError> {
    let mut navigator = state.navigator.lock().await;

    match navigator.screen() {
        Screen::Onboarding(_) => {
            navigator.retreat_onboarding();
        }
        Screen::Main(_) => {
            navigator.retreat_main();
        }
    }

    Ok(ProgressDto::from_navigator(&navigator))
}
