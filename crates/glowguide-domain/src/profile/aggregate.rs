use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::routine::RoutineLevel;
use crate::skin_type::SkinType;

/// The persisted skin profile: the user's skin type, how involved a routine
/// they asked for, and when it was last saved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkinProfile {
    pub skin_type: SkinType,
    pub routine_level: RoutineLevel,
    pub saved_at: DateTime<Utc>,
}

impl SkinProfile {
    pub fn new(skin_type: SkinType, routine_level: RoutineLevel) -> Self {
        Self {
            skin_type,
            routine_level,
            saved_at: Utc::now(),
        }
    }
}

impl Default for SkinProfile {
    /// The fallback profile used when nothing has been persisted yet:
    /// normal skin on a moderate routine.
    fn default() -> Self {
        Self::new(SkinType::Normal, RoutineLevel::Moderate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile() {
        let profile = SkinProfile::default();
        assert_eq!(profile.skin_type, SkinType::Normal);
        assert_eq!(profile.routine_level, RoutineLevel::Moderate);
    }

    #[test]
    fn test_profile_serializes_camel_case() {
        let profile = SkinProfile::new(SkinType::Oily, RoutineLevel::Basic);
        let json = serde_json::to_value(&profile).unwrap();

        assert_eq!(json["skinType"], "oily");
        assert_eq!(json["routineLevel"], "basic");
        assert!(json["savedAt"].is_string());
    }
}
