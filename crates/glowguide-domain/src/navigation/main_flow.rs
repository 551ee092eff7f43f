use serde::{Deserialize, Serialize};

use crate::quiz::{TestKind, TestResult};

/// Screens of the main app, reached only after onboarding completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MainStep {
    Home,
    Capture,
    Analyzing,
    Results,
    SkinTest,
    Test1,
    Test2,
    Test3,
    SkinTypeResults,
    KnownSkinType,
}

impl MainStep {
    pub fn for_test(kind: TestKind) -> MainStep {
        match kind {
            TestKind::Test1 => MainStep::Test1,
            TestKind::Test2 => MainStep::Test2,
            TestKind::Test3 => MainStep::Test3,
        }
    }

    pub fn test_kind(&self) -> Option<TestKind> {
        match self {
            MainStep::Test1 => Some(TestKind::Test1),
            MainStep::Test2 => Some(TestKind::Test2),
            MainStep::Test3 => Some(TestKind::Test3),
            _ => None,
        }
    }
}

/// User and system events that drive main-app transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum MainEvent {
    /// Home: the user taps into the capture flow.
    StartCapture,
    /// Capture: a photo was picked, move to the analyzing screen.
    PhotoSelected,
    /// Analyzing: the detection call resolved successfully.
    DetectionComplete,
    /// Analyzing: the user acknowledged a detection failure; the single
    /// recovery action returns home.
    DismissDetectionError,
    /// Results or SkinTypeResults: the primary continue action. What it
    /// means depends on where it fires.
    Continue,
    /// SkinTest: the user picked one of the three quizzes.
    ChooseTest(TestKind),
    /// SkinTest: the user already knows their skin type.
    AlreadyKnowType,
    /// A test screen or the manual picker produced a finished result.
    CompleteAssessment(TestResult),
    /// SkinTypeResults: leave without saving anything.
    GoHome,
}

/// How the results screen was entered. Back navigation from the results
/// screen depends on this history, not on the current screen alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultsEntry {
    Quiz(TestKind),
    Manual,
}
