use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::navigation::{MainEvent, MainStep, OnboardingAnswers, OnboardingStep, ResultsEntry};
use crate::quiz::{TestKind, TestResult};

/// Which of the two screen spaces is active. Exactly one is, at all times;
/// the onboarding space becomes unreachable once onboarding completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "space", content = "step")]
pub enum Screen {
    Onboarding(OnboardingStep),
    Main(MainStep),
}

/// Where a forward onboarding transition lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingTarget {
    Step(OnboardingStep),
    /// The single terminal edge out of onboarding. Irreversible.
    Complete,
}

/// Completed quiz results, one optional slot per quiz.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestResults {
    pub test1: Option<TestResult>,
    pub test2: Option<TestResult>,
    pub test3: Option<TestResult>,
}

impl TestResults {
    pub fn get(&self, kind: TestKind) -> Option<&TestResult> {
        match kind {
            TestKind::Test1 => self.test1.as_ref(),
            TestKind::Test2 => self.test2.as_ref(),
            TestKind::Test3 => self.test3.as_ref(),
        }
    }

    fn slot_mut(&mut self, kind: TestKind) -> &mut Option<TestResult> {
        match kind {
            TestKind::Test1 => &mut self.test1,
            TestKind::Test2 => &mut self.test2,
            TestKind::Test3 => &mut self.test3,
        }
    }
}

/// The screen-flow state machine.
///
/// Holds the whole navigation state explicitly so transitions can be unit
/// tested without rendering anything. All transition methods are total:
/// an event that is undefined for the current screen is logged and ignored,
/// leaving the state unchanged.
#[derive(Debug, Clone)]
pub struct Navigator {
    screen: Screen,
    onboarding_complete: bool,
    answers: OnboardingAnswers,
    test_results: TestResults,
    current_result: Option<TestResult>,
    /// How the results screen was entered, most recent last. Holds at most
    /// the last two entry points (quiz, then an optional manual confirm).
    results_entry: Vec<ResultsEntry>,
}

impl Navigator {
    /// A fresh install: onboarding starts at the welcome screen.
    pub fn new() -> Self {
        Self {
            screen: Screen::Onboarding(OnboardingStep::Welcome),
            onboarding_complete: false,
            answers: OnboardingAnswers::default(),
            test_results: TestResults::default(),
            current_result: None,
            results_entry: Vec::new(),
        }
    }

    /// A returning user who already finished onboarding lands on home.
    pub fn resumed() -> Self {
        Self {
            screen: Screen::Main(MainStep::Home),
            onboarding_complete: true,
            ..Self::new()
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn is_onboarding_complete(&self) -> bool {
        self.onboarding_complete
    }

    pub fn answers(&self) -> &OnboardingAnswers {
        &self.answers
    }

    pub fn test_results(&self) -> &TestResults {
        &self.test_results
    }

    pub fn current_result(&self) -> Option<&TestResult> {
        self.current_result.as_ref()
    }

    pub fn last_results_entry(&self) -> Option<ResultsEntry> {
        self.results_entry.last().copied()
    }

    /// Progress through the onboarding sequence; 0 on every main-app screen.
    pub fn progress_percentage(&self) -> f64 {
        match self.screen {
            Screen::Onboarding(step) => step.progress_percent(),
            Screen::Main(_) => 0.0,
        }
    }

    /// Forward onboarding transition. Merges the step's answers into the
    /// accumulator, then either moves to the target step or, on
    /// [`OnboardingTarget::Complete`], flips the terminal flag and lands on
    /// home. Returns whether a transition occurred.
    pub fn advance_onboarding(
        &mut self,
        target: OnboardingTarget,
        answers: OnboardingAnswers,
    ) -> bool {
        if self.onboarding_complete {
            warn!("Onboarding already complete, ignoring forward transition");
            return false;
        }
        let Screen::Onboarding(current) = self.screen else {
            warn!("Not on an onboarding screen, ignoring onboarding transition");
            return false;
        };

        self.answers.merge(answers);

        match target {
            OnboardingTarget::Complete => {
                debug!(from = ?current, "Onboarding complete, entering main app");
                self.onboarding_complete = true;
                self.screen = Screen::Main(MainStep::Home);
            }
            OnboardingTarget::Step(step) => {
                debug!(from = ?current, to = ?step, "Onboarding advance");
                self.screen = Screen::Onboarding(step);
            }
        }
        true
    }

    /// Back navigation within onboarding, derived from the step order.
    /// A no-op on the first step and after completion.
    pub fn retreat_onboarding(&mut self) -> bool {
        if self.onboarding_complete {
            warn!("Onboarding already complete, ignoring backward transition");
            return false;
        }
        let Screen::Onboarding(current) = self.screen else {
            warn!("Not on an onboarding screen, ignoring onboarding transition");
            return false;
        };

        match current.previous() {
            Some(step) => {
                debug!(from = ?current, to = ?step, "Onboarding retreat");
                self.screen = Screen::Onboarding(step);
                true
            }
            None => false,
        }
    }

    /// Main-app forward transition. Undefined (screen, event) pairs leave
    /// the state untouched.
    pub fn advance_main(&mut self, event: MainEvent) -> bool {
        let Screen::Main(current) = self.screen else {
            warn!("Not on a main-app screen, ignoring main transition");
            return false;
        };

        let next = match (current, event) {
            (MainStep::Home, MainEvent::StartCapture) => MainStep::Capture,
            (MainStep::Capture, MainEvent::PhotoSelected) => MainStep::Analyzing,
            (MainStep::Analyzing, MainEvent::DetectionComplete) => MainStep::Results,
            (MainStep::Analyzing, MainEvent::DismissDetectionError) => MainStep::Home,
            (MainStep::Results, MainEvent::Continue) => MainStep::SkinTest,
            (MainStep::SkinTest, MainEvent::ChooseTest(kind)) => MainStep::for_test(kind),
            (MainStep::SkinTest, MainEvent::AlreadyKnowType) => MainStep::KnownSkinType,
            (MainStep::Test1, MainEvent::CompleteAssessment(result)) => {
                self.record_quiz_result(TestKind::Test1, result);
                MainStep::SkinTypeResults
            }
            (MainStep::Test2, MainEvent::CompleteAssessment(result)) => {
                self.record_quiz_result(TestKind::Test2, result);
                MainStep::SkinTypeResults
            }
            (MainStep::Test3, MainEvent::CompleteAssessment(result)) => {
                self.record_quiz_result(TestKind::Test3, result);
                MainStep::SkinTypeResults
            }
            (MainStep::KnownSkinType, MainEvent::CompleteAssessment(result)) => {
                self.record_manual_result(result);
                MainStep::SkinTypeResults
            }
            (MainStep::SkinTypeResults, MainEvent::Continue) => {
                match self.results_entry.last() {
                    // Manual selection already is confirmation; finalize.
                    Some(ResultsEntry::Manual) => {
                        self.results_entry.clear();
                        MainStep::Home
                    }
                    // The quiz path gets an extra confirm/adjust step.
                    Some(ResultsEntry::Quiz(_)) => MainStep::KnownSkinType,
                    None => {
                        warn!("Results screen has no recorded entry point, ignoring continue");
                        return false;
                    }
                }
            }
            (MainStep::SkinTypeResults, MainEvent::GoHome) => {
                self.results_entry.clear();
                MainStep::Home
            }
            (step, event) => {
                warn!(screen = ?step, event = ?event, "Undefined main transition, ignoring");
                return false;
            }
        };

        debug!(from = ?current, to = ?next, "Main advance");
        self.screen = Screen::Main(next);
        true
    }

    /// Main-app back navigation. From the results screen the destination
    /// depends on how it was entered: the most recent quiz entry wins,
    /// manual-only entries fall back to the test chooser.
    pub fn retreat_main(&mut self) -> bool {
        let Screen::Main(current) = self.screen else {
            warn!("Not on a main-app screen, ignoring main transition");
            return false;
        };

        let previous = match current {
            MainStep::Home => return false,
            MainStep::Capture => MainStep::Home,
            // The analyzing screen is transient; back from it or from the
            // results it produced returns to the capture screen.
            MainStep::Analyzing | MainStep::Results => MainStep::Capture,
            MainStep::SkinTest => MainStep::Results,
            MainStep::Test1 | MainStep::Test2 | MainStep::Test3 => MainStep::SkinTest,
            MainStep::KnownSkinType => MainStep::SkinTest,
            MainStep::SkinTypeResults => {
                let destination = self
                    .results_entry
                    .iter()
                    .rev()
                    .find_map(|entry| match entry {
                        ResultsEntry::Quiz(kind) => Some(MainStep::for_test(*kind)),
                        ResultsEntry::Manual => None,
                    })
                    .unwrap_or(MainStep::SkinTest);
                self.results_entry.clear();
                destination
            }
        };

        debug!(from = ?current, to = ?previous, "Main retreat");
        self.screen = Screen::Main(previous);
        true
    }

    fn record_quiz_result(&mut self, kind: TestKind, result: TestResult) {
        *self.test_results.slot_mut(kind) = Some(result.clone());
        self.current_result = Some(result);
        self.push_entry(ResultsEntry::Quiz(kind));
    }

    fn record_manual_result(&mut self, result: TestResult) {
        self.current_result = Some(result);
        self.push_entry(ResultsEntry::Manual);
    }

    fn push_entry(&mut self, entry: ResultsEntry) {
        if self.results_entry.len() == 2 {
            self.results_entry.remove(0);
        }
        self.results_entry.push(entry);
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
