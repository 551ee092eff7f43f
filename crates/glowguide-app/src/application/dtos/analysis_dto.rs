use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

use glowguide_domain::detection::{DetectionReport, Prediction};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionDto {
    pub label: String,
    pub confidence: f32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl From<&Prediction> for PredictionDto {
    fn from(p: &Prediction) -> Self {
        Self {
            label: p.label.clone(),
            confidence: p.confidence,
            x: p.x,
            y: p.y,
            width: p.width,
            height: p.height,
        }
    }
}

/// What the results screen renders after a photo analysis. The annotated
/// overlay is base64 so the whole report stays one JSON payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReportDto {
    pub success: bool,
    pub total_found: usize,
    pub processing_time: f64,
    pub predictions: Vec<PredictionDto>,
    pub annotated_image: Option<String>,
}

impl AnalysisReportDto {
    pub fn from_report(report: &DetectionReport, annotated: Option<&[u8]>) -> Self {
        Self {
            success: report.success,
            total_found: report.total_found,
            processing_time: report.processing_time,
            predictions: report.predictions.iter().map(PredictionDto::from).collect(),
            annotated_image: annotated.map(|bytes| BASE64.encode(bytes)),
        }
    }
}
