use crate::application::dtos::{AssessmentOutcomeDto, ProgressDto, QuizQuestionDto};
use crate::presentation::error::CommandError;
use crate::presentation::state::AppState;
use glowguide_domain::navigation::{MainEvent, ResultsEntry};
use glowguide_domain::quiz::{questions_for, QuizAnswer, TestKind, TestResult};
use glowguide_domain::skin_type::{resolve_skin_type, SkinType};

/// The static question bank for one quiz.
pub fn quiz_questions(kind: TestKind) -> Vec<QuizQuestionDto> {
    questions_for(kind).iter().map(QuizQuestionDto::from).collect()
}

pub async fn choose_test(state: &AppState, kind: TestKind) -> Result<ProgressDto, CommandError> {
    let mut navigator = state.navigator.lock().await;

    if !navigator.advance_main(MainEvent::ChooseTest(kind)) {
        return Err(CommandError::transition_rejected(
            "Tests are chosen from the skin-test screen",
        ));
    }

    Ok(ProgressDto::from_navigator(&navigator))
}

pub async fn already_know_type(state: &AppState) -> Result<ProgressDto, CommandError> {
    let mut navigator = state.navigator.lock().await;

    if !navigator.advance_main(MainEvent::AlreadyKnowType) {
        return Err(CommandError::transition_rejected(
            "Manual selection starts from the skin-test screen",
        ));
    }

    Ok(ProgressDto::from_navigator(&navigator))
}

/// Complete a quiz with the user's answers and land on the skin-type
/// results screen. The outcome is not persisted yet; the user still gets a
/// confirm step.
pub async fn complete_quiz(
    state: &AppState,
    kind: TestKind,
    answers: Vec<(String, QuizAnswer)>,
) -> Result<AssessmentOutcomeDto, CommandError> {
    let result = TestResult::from_answers(kind, answers)?;
    let outcome = AssessmentOutcomeDto::from_result(&result);

    let mut navigator = state.navigator.lock().await;
    if !navigator.advance_main(MainEvent::CompleteAssessment(result)) {
        return Err(CommandError::transition_rejected(
            "A quiz can only be completed from its own screen",
        ));
    }

    Ok(outcome)
}

/// Declare one or two known skin types and land on the results screen.
pub async fn select_known_types(
    state: &AppState,
    types: Vec<SkinType>,
) -> Result<AssessmentOutcomeDto, CommandError> {
    let result = TestResult::from_manual_selection(&types)?;
    let outcome = AssessmentOutcomeDto::from_result(&result);

    let mut navigator = state.navigator.lock().await;
    if !navigator.advance_main(MainEvent::CompleteAssessment(result)) {
        return Err(CommandError::transition_rejected(
            "Skin types are declared from the manual-selection screen",
        ));
    }

    Ok(outcome)
}

/// Continue from the skin-type results screen.
///
/// Quiz outcomes get routed to the manual-selection screen to confirm or
/// adjust; a manual outcome is already the confirmation, so it is persisted
/// here and the flow returns home.
pub async fn confirm_assessment(state: &AppState) -> Result<ProgressDto, CommandError> {
    let mut navigator = state.navigator.lock().await;

    let finalized = match (navigator.last_results_entry(), navigator.current_result()) {
        (Some(ResultsEntry::Manual), Some(result)) => Some(resolve_skin_type(result)),
        _ => None,
    };

    if !navigator.advance_main(MainEvent::Continue) {
        return Err(CommandError::transition_rejected(
            "No assessment outcome to confirm",
        ));
    }

    if let Some(skin_type) = finalized {
        state.services.profile.save_skin_type_detached(skin_type);
    }

    Ok(ProgressDto::from_navigator(&navigator))
}

/// Leave the skin-type results without adopting the outcome.
pub async fn dismiss_assessment(state: &AppState) -> Result<ProgressDto, CommandError> {
    let mut navigator = state.navigator.lock().await;

    if !navigator.advance_main(MainEvent::GoHome) {
        return Err(CommandError::transition_rejected(
            "No assessment outcome to dismiss",
        ));
    }

    Ok(ProgressDto::from_navigator(&navigator))
}

/// The most recently completed assessment, if any.
pub async fn current_assessment(state: &AppState) -> Option<AssessmentOutcomeDto> {
    let navigator = state.navigator.lock().await;
    navigator.current_result().map(AssessmentOutcomeDto::from_result)
}
