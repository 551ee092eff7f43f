mod analysis_dto;
mod assessment_dto;
mod progress_dto;
mod routine_dto;

pub use analysis_dto::{AnalysisReportDto, PredictionDto};
pub use assessment_dto::{
    AssessmentOutcomeDto, QuizOptionDto, QuizQuestionDto, SkinTypeDisplayDto,
};
pub use progress_dto::ProgressDto;
pub use routine_dto::{ProductDto, RecommendationsDto, RoutineDto};
