#[cfg(test)]
mod tests {
    use crate::quiz::{QuizAnswer, TestKind, TestResult};
    use crate::skin_type::{
        classify_by_points, resolve_display_data, resolve_skin_type,
        synthesize_points_for_manual_type, SkinType, MAX_QUIZ_POINTS,
    };

    fn answer(id: &str, points: u32) -> QuizAnswer {
        QuizAnswer {
            id: id.to_string(),
            text: format!("option {id}"),
            points,
        }
    }

    fn quiz_result(first: u32, second: u32) -> TestResult {
        TestResult::from_answers(
            TestKind::Test1,
            vec![
                ("oiliness".to_string(), answer("a", first)),
                ("appearance".to_string(), answer("b", second)),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_exact_threshold_boundaries() {
        assert_eq!(classify_by_points(2), SkinType::Dry);
        assert_eq!(classify_by_points(3), SkinType::Normal);
        assert_eq!(classify_by_points(4), SkinType::Normal);
        assert_eq!(classify_by_points(5), SkinType::Combination);
        assert_eq!(classify_by_points(6), SkinType::Combination);
        assert_eq!(classify_by_points(7), SkinType::Oily);
    }

    #[test]
    fn test_classification_is_monotonic_in_oiliness() {
        fn oiliness_rank(skin_type: SkinType) -> u32 {
            match skin_type {
                SkinType::Dry => 0,
                SkinType::Normal => 1,
                SkinType::Combination => 2,
                SkinType::Oily => 3,
                SkinType::Sensitive => unreachable!("never produced by scoring"),
            }
        }

        let mut last_rank = 0;
        for points in 0..=MAX_QUIZ_POINTS {
            let rank = oiliness_rank(classify_by_points(points));
            assert!(
                rank >= last_rank,
                "rank decreased at {points} points"
            );
            last_rank = rank;
        }
    }

    #[test]
    fn test_sensitive_never_produced_by_scoring() {
        for points in 0..=MAX_QUIZ_POINTS {
            assert_ne!(classify_by_points(points), SkinType::Sensitive);
        }
    }

    #[test]
    fn test_manual_selection_round_trips() {
        for skin_type in [
            SkinType::Oily,
            SkinType::Dry,
            SkinType::Normal,
            SkinType::Combination,
        ] {
            let points = synthesize_points_for_manual_type(skin_type);
            assert_eq!(classify_by_points(points), skin_type);
        }
    }

    #[test]
    fn test_sensitive_round_trips_to_normal() {
        // Known asymmetry: classification alone cannot distinguish sensitive
        // from normal, so the synthetic points land in normal's bucket.
        let points = synthesize_points_for_manual_type(SkinType::Sensitive);
        assert_eq!(points, synthesize_points_for_manual_type(SkinType::Normal));
        assert_eq!(classify_by_points(points), SkinType::Normal);
    }

    #[test]
    fn test_quiz_scenario_four_plus_three_is_oily() {
        let result = quiz_result(4, 3);
        assert_eq!(result.total_points, 7);
        assert_eq!(classify_by_points(result.total_points), SkinType::Oily);

        let display = resolve_display_data(Some(&result));
        assert_eq!(display.title, "Oily");
    }

    #[test]
    fn test_missing_result_degrades_to_normal() {
        let display = resolve_display_data(None);
        assert_eq!(display.title, "Normal");
    }

    #[test]
    fn test_single_manual_type_uses_direct_lookup() {
        let result = TestResult::from_manual_selection(&[SkinType::Sensitive]).unwrap();
        let display = resolve_display_data(Some(&result));
        assert_eq!(display.title, "Sensitive");
    }

    #[test]
    fn test_combined_dry_sensitive_display() {
        let result =
            TestResult::from_manual_selection(&[SkinType::Dry, SkinType::Sensitive]).unwrap();
        assert_eq!(result.total_points, 2); // synthesized from dry

        let display = resolve_display_data(Some(&result));
        assert_eq!(display.title, "Dry + Sensitive");
        // The known-pair narrative, not the generic fallback.
        assert!(display.explanation.contains("weakened barrier"));
        assert!(!display.explanation.contains("more than one type"));
    }

    #[test]
    fn test_combined_signs_are_three_unique_first_type_first() {
        let result =
            TestResult::from_manual_selection(&[SkinType::Oily, SkinType::Sensitive]).unwrap();
        let display = resolve_display_data(Some(&result));

        assert_eq!(display.signs.len(), 3);
        let unique: std::collections::HashSet<&String> = display.signs.iter().collect();
        assert_eq!(unique.len(), 3);

        // The first type's signs lead the combined list.
        let oily_signs = SkinType::Oily.display_data().signs;
        assert_eq!(display.signs[0], oily_signs[0]);
    }

    #[test]
    fn test_unknown_pair_gets_generic_narrative() {
        let result =
            TestResult::from_manual_selection(&[SkinType::Oily, SkinType::Dry]).unwrap();
        let display = resolve_display_data(Some(&result));

        assert_eq!(display.title, "Oily + Dry");
        assert!(display.explanation.contains("Oily + Dry"));
    }

    #[test]
    fn test_resolve_skin_type_keeps_manual_declaration() {
        let manual = TestResult::from_manual_selection(&[SkinType::Sensitive]).unwrap();
        // Points would classify as Normal; the declared type wins.
        assert_eq!(resolve_skin_type(&manual), SkinType::Sensitive);

        let two = TestResult::from_manual_selection(&[SkinType::Dry, SkinType::Sensitive]).unwrap();
        assert_eq!(resolve_skin_type(&two), SkinType::Dry);
    }

    #[test]
    fn test_resolve_skin_type_classifies_quiz_results() {
        assert_eq!(resolve_skin_type(&quiz_result(4, 4)), SkinType::Oily);
        assert_eq!(resolve_skin_type(&quiz_result(1, 1)), SkinType::Dry);
    }

    #[test]
    fn test_pair_narrative_matches_on_set_not_order() {
        let forward =
            TestResult::from_manual_selection(&[SkinType::Sensitive, SkinType::Dry]).unwrap();
        let display = resolve_display_data(Some(&forward));

        // Same narrative regardless of declaration order.
        assert!(display.explanation.contains("weakened barrier"));
        // Title still respects declaration order.
        assert_eq!(display.title, "Sensitive + Dry");
    }
}
