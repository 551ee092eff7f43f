use serde::{Deserialize, Serialize};

use glowguide_domain::navigation::{Navigator, Screen};

/// Snapshot of where the user is, handed back after every navigation call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressDto {
    pub screen: Screen,
    pub onboarding_complete: bool,
    pub progress_percent: f64,
}

impl ProgressDto {
    pub fn from_navigator(navigator: &Navigator) -> Self {
        Self {
            screen: navigator.screen(),
            onboarding_complete: navigator.is_onboarding_complete(),
            progress_percent: navigator.progress_percentage(),
        }
    }
}
