use crate::application::dtos::{AnalysisReportDto, ProgressDto};
use crate::presentation::error::CommandError;
use crate::presentation::state::AppState;
use glowguide_domain::navigation::{MainEvent, MainStep, Screen};

pub async fn start_capture(state: &AppState) -> Result<ProgressDto, CommandError> {
    let mut navigator = state.navigator.lock().await;

    if !navigator.advance_main(MainEvent::StartCapture) {
        return Err(CommandError::transition_rejected(
            "Capture can only start from the home screen",
        ));
    }

    Ok(ProgressDto::from_navigator(&navigator))
}

/// Run the analysis pipeline on a selected photo.
///
/// Moves to the analyzing screen, performs the detection calls, then lands
/// on the results screen. On a detection failure the navigator stays on the
/// analyzing screen; the UI surfaces the error and the user leaves it via
/// [`dismiss_detection_error`].
pub async fn submit_photo(
    state: &AppState,
    image: Vec<u8>,
) -> Result<AnalysisReportDto, CommandError> {
    {
        let mut navigator = state.navigator.lock().await;
        if !navigator.advance_main(MainEvent::PhotoSelected) {
            return Err(CommandError::transition_rejected(
                "A photo can only be submitted from the capture screen",
            ));
        }
    }

    let report = state.services.analysis.analyze(&image).await?;

    let mut navigator = state.navigator.lock().await;
    navigator.advance_main(MainEvent::DetectionComplete);
    Ok(report)
}

/// Acknowledge a failed analysis and return home.
pub async fn dismiss_detection_error(state: &AppState) -> Result<ProgressDto, CommandError> {
    let mut navigator = state.navigator.lock().await;

    if !navigator.advance_main(MainEvent::DismissDetectionError) {
        return Err(CommandError::transition_rejected(
            "No detection error to dismiss",
        ));
    }

    Ok(ProgressDto::from_navigator(&navigator))
}

/// Leave the analysis results for the skin-test chooser. Continuing from
/// the skin-type results screen goes through the assessment commands, which
/// handle finalization.
pub async fn continue_to_skin_test(state: &AppState) -> Result<ProgressDto, CommandError> {
    let mut navigator = state.navigator.lock().await;

    if navigator.screen() != Screen::Main(MainStep::Results)
        || !navigator.advance_main(MainEvent::Continue)
    {
        return Err(CommandError::transition_rejected(
            "Nothing to continue from on the current screen",
        ));
    }

    Ok(ProgressDto::from_navigator(&navigator))
}
