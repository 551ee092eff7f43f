use serde::{Deserialize, Serialize};

use glowguide_domain::quiz::{QuizQuestion, TestResult};
use glowguide_domain::skin_type::{resolve_display_data, resolve_skin_type, SkinTypeDisplay};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkinTypeDisplayDto {
    pub title: String,
    pub description: String,
    pub signs: Vec<String>,
    pub color: String,
    pub explanation: String,
}

impl From<SkinTypeDisplay> for SkinTypeDisplayDto {
    fn from(display: SkinTypeDisplay) -> Self {
        Self {
            title: display.title,
            description: display.description,
            signs: display.signs,
            color: display.color,
            explanation: display.explanation,
        }
    }
}

/// The resolved outcome of a completed assessment, quiz or manual.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentOutcomeDto {
    pub skin_type: String,
    pub total_points: u32,
    pub max_points: u32,
    pub display: SkinTypeDisplayDto,
}

impl AssessmentOutcomeDto {
    pub fn from_result(result: &TestResult) -> Self {
        Self {
            skin_type: resolve_skin_type(result).as_str().to_string(),
            total_points: result.total_points,
            max_points: result.max_points,
            display: resolve_display_data(Some(result)).into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizOptionDto {
    pub id: String,
    pub text: String,
    pub points: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestionDto {
    pub key: String,
    pub prompt: String,
    pub options: Vec<QuizOptionDto>,
}

impl From<&QuizQuestion> for QuizQuestionDto {
    fn from(question: &QuizQuestion) -> Self {
        Self {
            key: question.key.to_string(),
            prompt: question.prompt.to_string(),
            options: question
                .options
                .iter()
                .map(|o| QuizOptionDto {
                    id: o.id.to_string(),
                    text: o.text.to_string(),
                    points: o.points,
                })
                .collect(),
        }
    }
}
