mod analysis_service;
mod profile_service;
mod routine_service;

pub use analysis_service::AnalysisService;
pub use profile_service::ProfileService;
pub use routine_service::RoutineService;
