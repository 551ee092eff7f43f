use async_trait::async_trait;

use crate::detection::DetectionReport;
use crate::shared::DomainError;

/// Gateway to the external acne-detection service.
///
/// Implemented over HTTP in the infrastructure layer; tests substitute a
/// stub. The two calls are always made sequentially, never concurrently,
/// and the annotated variant is only requested after a detection-bearing
/// report.
#[async_trait]
pub trait AcneDetector: Send + Sync {
    /// Run detection on an encoded photo. Single attempt, no retry.
    async fn detect(&self, image: &[u8]) -> Result<DetectionReport, DomainError>;

    /// Fetch the annotated-image variant of the same photo. Optional
    /// enhancement: callers treat a failure here as non-fatal.
    async fn annotated_image(&self, image: &[u8]) -> Result<Vec<u8>, DomainError>;
}
