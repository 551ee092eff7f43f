use serde::{Deserialize, Serialize};

/// Answers accumulated across the onboarding questionnaire.
///
/// One optional field per known question rather than a loose key/value map,
/// so a misspelled answer key is a compile error instead of silently lost
/// data. Steps that collect nothing (welcome, privacy, generating, ...)
/// simply have no field here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingAnswers {
    pub discovery_source: Option<String>,
    pub experience_level: Option<String>,
    pub struggles: Option<Vec<String>>,
    pub health_barriers: Option<Vec<String>>,
    pub skin_type: Option<String>,
    pub current_routine: Option<String>,
    pub goals: Option<Vec<String>>,
    pub timeline: Option<String>,
    pub committed_to_consistency: Option<bool>,
    pub reminders_enabled: Option<bool>,
    pub rating: Option<u8>,
    pub save_progress_email: Option<String>,
}

impl OnboardingAnswers {
    /// Merge newer answers into this record; fields set in `newer` overwrite
    /// fields set earlier, fields left `None` keep their current value.
    pub fn merge(&mut self, newer: OnboardingAnswers) {
        macro_rules! take_set {
            ($($field:ident),+ $(,)?) => {
                $(
                    if newer.$field.is_some() {
                        self.$field = newer.$field;
                    }
                )+
            };
        }

        take_set!(
            discovery_source,
            experience_level,
            struggles,
            health_barriers,
            skin_type,
            current_routine,
            goals,
            timeline,
            committed_to_consistency,
            reminders_enabled,
            rating,
            save_progress_email,
        );
    }
}
