#[cfg(test)]
mod tests {
    use crate::navigation::{
        MainEvent, MainStep, Navigator, OnboardingAnswers, OnboardingStep, OnboardingTarget,
        ResultsEntry, Screen,
    };
    use crate::quiz::{QuizAnswer, TestKind, TestResult};
    use crate::skin_type::SkinType;

    fn quiz_result(kind: TestKind) -> TestResult {
        TestResult::from_answers(
            kind,
            vec![
                (
                    "first".to_string(),
                    QuizAnswer {
                        id: "a".to_string(),
                        text: "a".to_string(),
                        points: 3,
                    },
                ),
                (
                    "second".to_string(),
                    QuizAnswer {
                        id: "b".to_string(),
                        text: "b".to_string(),
                        points: 2,
                    },
                ),
            ],
        )
        .unwrap()
    }

    fn navigator_at_home() -> Navigator {
        Navigator::resumed()
    }

    fn navigator_at_skin_test() -> Navigator {
        let mut nav = navigator_at_home();
        assert!(nav.advance_main(MainEvent::StartCapture));
        assert!(nav.advance_main(MainEvent::PhotoSelected));
        assert!(nav.advance_main(MainEvent::DetectionComplete));
        assert!(nav.advance_main(MainEvent::Continue));
        assert_eq!(nav.screen(), Screen::Main(MainStep::SkinTest));
        nav
    }

    #[test]
    fn test_fresh_navigator_starts_at_welcome() {
        let nav = Navigator::new();
        assert_eq!(nav.screen(), Screen::Onboarding(OnboardingStep::Welcome));
        assert!(!nav.is_onboarding_complete());
    }

    #[test]
    fn test_onboarding_advance_merges_answers() {
        let mut nav = Navigator::new();

        nav.advance_onboarding(
            OnboardingTarget::Step(OnboardingStep::Discovery),
            OnboardingAnswers::default(),
        );
        nav.advance_onboarding(
            OnboardingTarget::Step(OnboardingStep::Experience),
            OnboardingAnswers {
                discovery_source: Some("app store".to_string()),
                ..Default::default()
            },
        );
        nav.advance_onboarding(
            OnboardingTarget::Step(OnboardingStep::Struggle),
            OnboardingAnswers {
                experience_level: Some("beginner".to_string()),
                ..Default::default()
            },
        );

        assert_eq!(nav.answers().discovery_source.as_deref(), Some("app store"));
        assert_eq!(nav.answers().experience_level.as_deref(), Some("beginner"));
        assert_eq!(nav.screen(), Screen::Onboarding(OnboardingStep::Struggle));
    }

    #[test]
    fn test_onboarding_retreat_follows_sequence() {
        let mut nav = Navigator::new();
        nav.advance_onboarding(
            OnboardingTarget::Step(OnboardingStep::Experience),
            OnboardingAnswers::default(),
        );

        assert!(nav.retreat_onboarding());
        assert_eq!(nav.screen(), Screen::Onboarding(OnboardingStep::Discovery));
        assert!(nav.retreat_onboarding());
        assert_eq!(nav.screen(), Screen::Onboarding(OnboardingStep::Welcome));
        // Welcome has no predecessor.
        assert!(!nav.retreat_onboarding());
        assert_eq!(nav.screen(), Screen::Onboarding(OnboardingStep::Welcome));
    }

    #[test]
    fn test_completion_is_terminal_and_irreversible() {
        let mut nav = Navigator::new();
        nav.advance_onboarding(
            OnboardingTarget::Step(OnboardingStep::Paywall),
            OnboardingAnswers::default(),
        );
        assert!(nav.advance_onboarding(OnboardingTarget::Complete, OnboardingAnswers::default()));

        assert!(nav.is_onboarding_complete());
        assert_eq!(nav.screen(), Screen::Main(MainStep::Home));

        // No sequence of onboarding calls can undo completion or move the
        // screen back into the onboarding space.
        assert!(!nav.retreat_onboarding());
        assert!(!nav.advance_onboarding(
            OnboardingTarget::Step(OnboardingStep::Welcome),
            OnboardingAnswers::default()
        ));
        assert!(nav.is_onboarding_complete());
        assert_eq!(nav.screen(), Screen::Main(MainStep::Home));

        // Main-app back navigation from home does not re-enter onboarding.
        assert!(!nav.retreat_main());
        assert_eq!(nav.screen(), Screen::Main(MainStep::Home));
    }

    #[test]
    fn test_answers_frozen_after_completion() {
        let mut nav = Navigator::new();
        nav.advance_onboarding(
            OnboardingTarget::Complete,
            OnboardingAnswers {
                rating: Some(5),
                ..Default::default()
            },
        );

        nav.advance_onboarding(
            OnboardingTarget::Step(OnboardingStep::Rating),
            OnboardingAnswers {
                rating: Some(1),
                ..Default::default()
            },
        );

        assert_eq!(nav.answers().rating, Some(5));
    }

    #[test]
    fn test_progress_is_zero_in_main_app() {
        let nav = Navigator::new();
        assert_eq!(nav.progress_percentage(), 4.7);

        let nav = Navigator::resumed();
        assert_eq!(nav.progress_percentage(), 0.0);
    }

    #[test]
    fn test_capture_flow_reaches_results() {
        let mut nav = navigator_at_home();

        assert!(nav.advance_main(MainEvent::StartCapture));
        assert_eq!(nav.screen(), Screen::Main(MainStep::Capture));
        assert!(nav.advance_main(MainEvent::PhotoSelected));
        assert_eq!(nav.screen(), Screen::Main(MainStep::Analyzing));
        assert!(nav.advance_main(MainEvent::DetectionComplete));
        assert_eq!(nav.screen(), Screen::Main(MainStep::Results));
    }

    #[test]
    fn test_detection_failure_recovery_returns_home() {
        let mut nav = navigator_at_home();
        nav.advance_main(MainEvent::StartCapture);
        nav.advance_main(MainEvent::PhotoSelected);

        // The failure itself does not move the screen; acknowledging it does.
        assert_eq!(nav.screen(), Screen::Main(MainStep::Analyzing));
        assert!(nav.advance_main(MainEvent::DismissDetectionError));
        assert_eq!(nav.screen(), Screen::Main(MainStep::Home));
    }

    #[test]
    fn test_choose_test_routes_to_that_test() {
        let mut nav = navigator_at_skin_test();
        assert!(nav.advance_main(MainEvent::ChooseTest(TestKind::Test3)));
        assert_eq!(nav.screen(), Screen::Main(MainStep::Test3));
    }

    #[test]
    fn test_completing_a_quiz_records_result_and_entry() {
        let mut nav = navigator_at_skin_test();
        nav.advance_main(MainEvent::ChooseTest(TestKind::Test2));

        let result = quiz_result(TestKind::Test2);
        assert!(nav.advance_main(MainEvent::CompleteAssessment(result.clone())));

        assert_eq!(nav.screen(), Screen::Main(MainStep::SkinTypeResults));
        assert_eq!(nav.test_results().get(TestKind::Test2), Some(&result));
        assert_eq!(nav.current_result(), Some(&result));
        assert_eq!(
            nav.last_results_entry(),
            Some(ResultsEntry::Quiz(TestKind::Test2))
        );
    }

    #[test]
    fn test_back_from_results_depends_on_entry_history() {
        // Entered via test2: back goes to test2, not the chooser.
        let mut nav = navigator_at_skin_test();
        nav.advance_main(MainEvent::ChooseTest(TestKind::Test2));
        nav.advance_main(MainEvent::CompleteAssessment(quiz_result(TestKind::Test2)));

        assert!(nav.retreat_main());
        assert_eq!(nav.screen(), Screen::Main(MainStep::Test2));
    }

    #[test]
    fn test_back_from_results_after_manual_entry_goes_to_chooser() {
        let mut nav = navigator_at_skin_test();
        nav.advance_main(MainEvent::AlreadyKnowType);

        let manual = TestResult::from_manual_selection(&[SkinType::Dry]).unwrap();
        nav.advance_main(MainEvent::CompleteAssessment(manual));
        assert_eq!(nav.screen(), Screen::Main(MainStep::SkinTypeResults));

        assert!(nav.retreat_main());
        assert_eq!(nav.screen(), Screen::Main(MainStep::SkinTest));
    }

    #[test]
    fn test_continue_from_results_is_asymmetric() {
        // Quiz path: continue routes to the manual confirm screen.
        let mut nav = navigator_at_skin_test();
        nav.advance_main(MainEvent::ChooseTest(TestKind::Test1));
        nav.advance_main(MainEvent::CompleteAssessment(quiz_result(TestKind::Test1)));
        assert!(nav.advance_main(MainEvent::Continue));
        assert_eq!(nav.screen(), Screen::Main(MainStep::KnownSkinType));

        // Manual path: the selection already is confirmation, finalize home.
        let mut nav = navigator_at_skin_test();
        nav.advance_main(MainEvent::AlreadyKnowType);
        let manual = TestResult::from_manual_selection(&[SkinType::Oily]).unwrap();
        nav.advance_main(MainEvent::CompleteAssessment(manual));
        assert!(nav.advance_main(MainEvent::Continue));
        assert_eq!(nav.screen(), Screen::Main(MainStep::Home));
    }

    #[test]
    fn test_go_home_from_results_is_unconditional() {
        let mut nav = navigator_at_skin_test();
        nav.advance_main(MainEvent::ChooseTest(TestKind::Test1));
        nav.advance_main(MainEvent::CompleteAssessment(quiz_result(TestKind::Test1)));

        assert!(nav.advance_main(MainEvent::GoHome));
        assert_eq!(nav.screen(), Screen::Main(MainStep::Home));
    }

    #[test]
    fn test_quiz_then_manual_confirm_back_returns_to_quiz_screen() {
        let mut nav = navigator_at_skin_test();
        nav.advance_main(MainEvent::ChooseTest(TestKind::Test2));
        nav.advance_main(MainEvent::CompleteAssessment(quiz_result(TestKind::Test2)));
        nav.advance_main(MainEvent::Continue); // to KnownSkinType

        let manual = TestResult::from_manual_selection(&[SkinType::Normal]).unwrap();
        nav.advance_main(MainEvent::CompleteAssessment(manual));
        assert_eq!(nav.screen(), Screen::Main(MainStep::SkinTypeResults));

        // The quiz entry still outranks the manual confirm for back routing.
        assert!(nav.retreat_main());
        assert_eq!(nav.screen(), Screen::Main(MainStep::Test2));
    }

    #[test]
    fn test_undefined_transitions_leave_state_unchanged() {
        let mut nav = navigator_at_home();

        assert!(!nav.advance_main(MainEvent::PhotoSelected));
        assert!(!nav.advance_main(MainEvent::Continue));
        assert!(!nav.advance_main(MainEvent::GoHome));
        assert_eq!(nav.screen(), Screen::Main(MainStep::Home));

        // Main events are meaningless during onboarding.
        let mut nav = Navigator::new();
        assert!(!nav.advance_main(MainEvent::StartCapture));
        assert!(!nav.retreat_main());
        assert_eq!(nav.screen(), Screen::Onboarding(OnboardingStep::Welcome));
    }

    #[test]
    fn test_main_back_navigation_chain() {
        let mut nav = navigator_at_skin_test();

        assert!(nav.retreat_main());
        assert_eq!(nav.screen(), Screen::Main(MainStep::Results));
        assert!(nav.retreat_main());
        assert_eq!(nav.screen(), Screen::Main(MainStep::Capture));
        assert!(nav.retreat_main());
        assert_eq!(nav.screen(), Screen::Main(MainStep::Home));
        assert!(!nav.retreat_main());
    }
}
