#[cfg(test)]
mod tests {
    use crate::quiz::{questions_for, QuizAnswer, TestKind, TestResult, TestType};
    use crate::skin_type::{SkinType, MAX_QUIZ_POINTS};

    fn answer(points: u32) -> QuizAnswer {
        QuizAnswer {
            id: format!("opt-{points}"),
            text: format!("option worth {points}"),
            points,
        }
    }

    #[test]
    fn test_total_points_is_sum_of_answers() {
        let result = TestResult::from_answers(
            TestKind::Test2,
            vec![
                ("after_cleansing".to_string(), answer(3)),
                ("blotting".to_string(), answer(2)),
            ],
        )
        .unwrap();

        assert_eq!(result.test_type, TestType::Quiz);
        assert_eq!(result.total_points, 5);
        assert_eq!(result.max_points, 8);
        assert_eq!(result.metadata.questions_count, 2);
        assert_eq!(result.metadata.answered_count, 2);
        assert_eq!(result.metadata.average_score, 2.5);
        assert!(!result.metadata.is_manual_selection);
    }

    #[test]
    fn test_empty_answers_rejected() {
        assert!(TestResult::from_answers(TestKind::Test1, vec![]).is_err());
    }

    #[test]
    fn test_manual_selection_synthesizes_points() {
        let result = TestResult::from_manual_selection(&[SkinType::Oily]).unwrap();

        assert_eq!(result.test_type, TestType::Manual);
        assert_eq!(result.test_name, "Known Skin Type");
        assert_eq!(result.total_points, 8);
        assert_eq!(result.max_points, MAX_QUIZ_POINTS);
        assert!(result.answers.is_empty());
        assert!(result.metadata.is_manual_selection);
        assert_eq!(result.metadata.selected_skin_types, vec![SkinType::Oily]);
        assert_eq!(result.metadata.questions_count, 0);
    }

    #[test]
    fn test_manual_selection_uses_first_type_for_points() {
        let result =
            TestResult::from_manual_selection(&[SkinType::Dry, SkinType::Sensitive]).unwrap();
        assert_eq!(result.total_points, 2);
        assert_eq!(
            result.metadata.selected_skin_types,
            vec![SkinType::Dry, SkinType::Sensitive]
        );
    }

    #[test]
    fn test_manual_selection_bounds() {
        assert!(TestResult::from_manual_selection(&[]).is_err());
        assert!(TestResult::from_manual_selection(&[
            SkinType::Dry,
            SkinType::Oily,
            SkinType::Normal
        ])
        .is_err());
        assert!(
            TestResult::from_manual_selection(&[SkinType::Dry, SkinType::Dry]).is_err()
        );
    }

    #[test]
    fn test_question_banks_have_two_questions_scored_one_to_four() {
        for kind in [TestKind::Test1, TestKind::Test2, TestKind::Test3] {
            let questions = questions_for(kind);
            assert_eq!(questions.len(), 2);

            for question in questions {
                let mut points: Vec<u32> =
                    question.options.iter().map(|o| o.points).collect();
                points.sort_unstable();
                assert_eq!(points, vec![1, 2, 3, 4], "{}", question.key);
            }
        }
    }

    #[test]
    fn test_option_ids_are_unique_within_bank() {
        for kind in [TestKind::Test1, TestKind::Test2, TestKind::Test3] {
            let ids: std::collections::HashSet<&str> = questions_for(kind)
                .iter()
                .flat_map(|q| q.options.iter().map(|o| o.id))
                .collect();
            assert_eq!(ids.len(), 8);
        }
    }

    #[test]
    fn test_screen_counts() {
        assert_eq!(TestKind::Test1.screen_count(), 1);
        assert_eq!(TestKind::Test2.screen_count(), 2);
        assert_eq!(TestKind::Test3.screen_count(), 2);
    }
}
