#[cfg(test)]
mod tests {
    use crate::navigation::{OnboardingStep, ONBOARDING_SEQUENCE};

    #[test]
    fn test_sequence_has_21_distinct_steps() {
        let unique: std::collections::HashSet<OnboardingStep> =
            ONBOARDING_SEQUENCE.iter().copied().collect();
        assert_eq!(unique.len(), 21);
    }

    #[test]
    fn test_index_matches_sequence_position() {
        for (position, step) in ONBOARDING_SEQUENCE.iter().enumerate() {
            assert_eq!(step.index(), position);
        }
    }

    #[test]
    fn test_next_and_previous_are_inverses() {
        for step in ONBOARDING_SEQUENCE {
            if let Some(next) = step.next() {
                assert_eq!(next.previous(), Some(step));
            }
            if let Some(previous) = step.previous() {
                assert_eq!(previous.next(), Some(step));
            }
        }
    }

    #[test]
    fn test_walking_backward_from_paywall_visits_every_step_once() {
        let mut visited = vec![OnboardingStep::Paywall];
        let mut current = OnboardingStep::Paywall;

        while let Some(previous) = current.previous() {
            assert!(
                !visited.contains(&previous),
                "cycle detected at {previous:?}"
            );
            visited.push(previous);
            current = previous;
        }

        assert_eq!(current, OnboardingStep::Welcome);
        assert_eq!(visited.len(), ONBOARDING_SEQUENCE.len());
    }

    #[test]
    fn test_sequence_endpoints() {
        assert_eq!(ONBOARDING_SEQUENCE[0], OnboardingStep::Welcome);
        assert_eq!(ONBOARDING_SEQUENCE[20], OnboardingStep::Paywall);
        assert_eq!(OnboardingStep::Welcome.previous(), None);
        assert_eq!(OnboardingStep::Paywall.next(), None);
    }

    #[test]
    fn test_progress_percentages_are_position_derived() {
        assert_eq!(OnboardingStep::Welcome.progress_percent(), 4.7);
        assert_eq!(OnboardingStep::Discovery.progress_percent(), 9.5);
        assert_eq!(OnboardingStep::Experience.progress_percent(), 14.2);
        assert_eq!(OnboardingStep::Paywall.progress_percent(), 100.0);
    }

    #[test]
    fn test_progress_strictly_increases_along_sequence() {
        let mut last = 0.0;
        for step in ONBOARDING_SEQUENCE {
            let progress = step.progress_percent();
            assert!(progress > last, "progress stalled at {step:?}");
            last = progress;
        }
    }
}
