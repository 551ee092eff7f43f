use serde::{Deserialize, Serialize};

/// The onboarding questionnaire steps, declared in walk order.
///
/// This enum is the single source of truth for the sequence: forward and
/// backward navigation and the progress bar are all derived from the
/// declaration order, so adding or reordering a step here updates every
/// consumer at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OnboardingStep {
    Welcome,
    Discovery,
    Experience,
    Struggle,
    BarrierHealth1,
    BarrierHealth2,
    SkinType,
    Routine,
    Goals,
    Timeline,
    ResultsTimeline,
    Consistency,
    Comparison,
    Ready,
    Privacy,
    Generating,
    PlanReady,
    Reminders,
    Rating,
    SaveProgress,
    Paywall,
}

/// All onboarding steps in walk order.
pub const ONBOARDING_SEQUENCE: [OnboardingStep; 21] = [
    OnboardingStep::Welcome,
    OnboardingStep::Discovery,
    OnboardingStep::Experience,
    OnboardingStep::Struggle,
    OnboardingStep::BarrierHealth1,
    OnboardingStep::BarrierHealth2,
    OnboardingStep::SkinType,
    OnboardingStep::Routine,
    OnboardingStep::Goals,
    OnboardingStep::Timeline,
    OnboardingStep::ResultsTimeline,
    OnboardingStep::Consistency,
    OnboardingStep::Comparison,
    OnboardingStep::Ready,
    OnboardingStep::Privacy,
    OnboardingStep::Generating,
    OnboardingStep::PlanReady,
    OnboardingStep::Reminders,
    OnboardingStep::Rating,
    OnboardingStep::SaveProgress,
    OnboardingStep::Paywall,
];

impl OnboardingStep {
    /// Zero-based position in the walk order.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The step after this one, if any.
    pub fn next(&self) -> Option<OnboardingStep> {
        ONBOARDING_SEQUENCE.get(self.index() + 1).copied()
    }

    /// The step before this one; `Welcome` has none.
    pub fn previous(&self) -> Option<OnboardingStep> {
        let index = self.index().checked_sub(1)?;
        ONBOARDING_SEQUENCE.get(index).copied()
    }

    /// Position-derived progress percentage, truncated to one decimal:
    /// `4.7, 9.5, 14.2, ..., 100.0`.
    ///
    /// Progress reflects the step's place in the fixed sequence, not how
    /// many questions were actually answered along the way.
    pub fn progress_percent(&self) -> f64 {
        let position = (self.index() + 1) as f64;
        let raw = position / ONBOARDING_SEQUENCE.len() as f64 * 100.0;
        (raw * 10.0).floor() / 10.0
    }
}
