use std::sync::Arc;

use tracing::{info, warn};

use glowguide_domain::detection::AcneDetector;
use glowguide_domain::shared::DomainError;

use crate::application::dtos::AnalysisReportDto;

pub struct AnalysisService {
    detector: Arc<dyn AcneDetector>,
}

impl AnalysisService {
    pub fn new(detector: Arc<dyn AcneDetector>) -> Self {
        Self { detector }
    }

    /// Analyze a photo: one detection call, then, only when something was
    /// found, one call for the annotated overlay. The calls are sequential;
    /// a failed overlay fetch downgrades the report rather than failing it.
    pub async fn analyze(&self, image: &[u8]) -> Result<AnalysisReportDto, DomainError> {
        let report = self.detector.detect(image).await?;
        info!(
            total_found = report.total_found,
            "Photo analysis completed"
        );

        let annotated = if report.has_detections() {
            match self.detector.annotated_image(image).await {
                Ok(bytes) => Some(bytes),
                Err(e) => {
                    warn!(error = %e, "Annotated image unavailable, returning plain report");
                    None
                }
            }
        } else {
            None
        };

        Ok(AnalysisReportDto::from_report(&report, annotated.as_deref()))
    }
}
