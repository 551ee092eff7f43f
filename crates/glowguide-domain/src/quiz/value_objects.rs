use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::quiz::questions::QuizOption;
use crate::shared::DomainError;
use crate::skin_type::{synthesize_points_for_manual_type, SkinType, MAX_QUIZ_POINTS};

/// The three self-assessment quizzes a user can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestKind {
    Test1,
    Test2,
    Test3,
}

impl TestKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            TestKind::Test1 => "Skin Type Quiz",
            TestKind::Test2 => "Day Response Check",
            TestKind::Test3 => "Evening Feel Check",
        }
    }

    /// Test 1 collects both answers on one screen; the other two split
    /// their questions across sequential screens.
    pub fn screen_count(&self) -> usize {
        match self {
            TestKind::Test1 => 1,
            TestKind::Test2 | TestKind::Test3 => 2,
        }
    }
}

/// How a result came to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestType {
    Quiz,
    Manual,
}

/// A single answered quiz option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizAnswer {
    pub id: String,
    pub text: String,
    pub points: u32,
}

impl QuizAnswer {
    pub fn from_option(option: &QuizOption) -> Self {
        Self {
            id: option.id.to_string(),
            text: option.text.to_string(),
            points: option.points,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultMetadata {
    pub questions_count: u32,
    pub answered_count: u32,
    pub average_score: f64,
    #[serde(default)]
    pub is_manual_selection: bool,
    #[serde(default)]
    pub selected_skin_types: Vec<SkinType>,
}

/// A completed assessment, whether built from quiz answers or synthesized
/// from a manual selection. Both paths funnel into this one shape so the
/// results screen has a uniform input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    pub test_name: String,
    pub test_type: TestType,
    pub completed_at: DateTime<Utc>,
    pub total_points: u32,
    pub max_points: u32,
    pub answers: BTreeMap<String, QuizAnswer>,
    pub metadata: ResultMetadata,
}

impl TestResult {
    /// Build a result from answered quiz questions.
    ///
    /// `total_points` is always the sum of the constituent answers and
    /// `average_score` their mean; callers never supply either directly.
    pub fn from_answers(
        kind: TestKind,
        answers: Vec<(String, QuizAnswer)>,
    ) -> Result<Self, DomainError> {
        if answers.is_empty() {
            return Err(DomainError::Validation(
                "A quiz result needs at least one answered question".to_string(),
            ));
        }

        let answers: BTreeMap<String, QuizAnswer> = answers.into_iter().collect();
        let total_points: u32 = answers.values().map(|a| a.points).sum();
        let questions_count = answers.len() as u32;

        Ok(Self {
            test_name: kind.display_name().to_string(),
            test_type: TestType::Quiz,
            completed_at: Utc::now(),
            total_points,
            max_points: questions_count * 4,
            metadata: ResultMetadata {
                questions_count,
                answered_count: questions_count,
                average_score: f64::from(total_points) / f64::from(questions_count),
                is_manual_selection: false,
                selected_skin_types: Vec::new(),
            },
            answers,
        })
    }

    /// Build a synthetic result for a manual skin-type declaration.
    ///
    /// The point total is fabricated from the first declared type so the
    /// result still classifies consistently downstream; the declared types
    /// themselves are carried out-of-band in the metadata.
    pub fn from_manual_selection(types: &[SkinType]) -> Result<Self, DomainError> {
        if types.is_empty() || types.len() > 2 {
            return Err(DomainError::InvalidSelection(format!(
                "Manual selection requires 1 or 2 skin types, got {}",
                types.len()
            )));
        }
        if types.len() == 2 && types[0] == types[1] {
            return Err(DomainError::InvalidSelection(
                "Manual selection cannot declare the same skin type twice".to_string(),
            ));
        }

        Ok(Self {
            test_name: "Known Skin Type".to_string(),
            test_type: TestType::Manual,
            completed_at: Utc::now(),
            total_points: synthesize_points_for_manual_type(types[0]),
            max_points: MAX_QUIZ_POINTS,
            answers: BTreeMap::new(),
            metadata: ResultMetadata {
                questions_count: 0,
                answered_count: 0,
                average_score: 0.0,
                is_manual_selection: true,
                selected_skin_types: types.to_vec(),
            },
        })
    }
}
