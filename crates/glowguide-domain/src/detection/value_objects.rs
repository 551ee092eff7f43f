use serde::{Deserialize, Serialize};

/// Predictions below this confidence are discarded before anything else
/// looks at them. This filtering belongs to us, not to the remote service.
pub const MIN_CONFIDENCE: f32 = 0.3;

/// One detected region, as returned by the detection service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    #[serde(rename = "class")]
    pub label: String,
    pub confidence: f32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// The detection outcome the app consumes. `total_found` counts only the
/// predictions that survived the confidence filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionReport {
    pub success: bool,
    pub predictions: Vec<Prediction>,
    pub total_found: usize,
    pub processing_time: f64,
}

impl DetectionReport {
    /// Apply the confidence filter to raw service predictions and compute
    /// the derived count.
    pub fn from_raw(predictions: Vec<Prediction>, processing_time: f64) -> Self {
        let predictions: Vec<Prediction> = predictions
            .into_iter()
            .filter(|p| p.confidence >= MIN_CONFIDENCE)
            .collect();
        let total_found = predictions.len();

        Self {
            success: true,
            predictions,
            total_found,
            processing_time,
        }
    }

    pub fn has_detections(&self) -> bool {
        self.total_found > 0
    }
}
