mod types;

use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::{header, Client, Response};
use tracing::{debug, instrument};

use glowguide_domain::detection::{AcneDetector, DetectionReport};
use glowguide_domain::shared::DomainError;

use types::{RawDetectionResponse, USER_AGENT};

/// Hosted model the app ships against. Deployments that bring their own
/// model override the whole config.
const DEFAULT_ENDPOINT: &str = "https://detect.roboflow.com/skin-analysis/2";

/// Where the detection service lives and how to authenticate to it.
#[derive(Debug, Clone)]
pub struct DetectionConfig {
    pub endpoint: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl DetectionConfig {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Config pointed at the bundled model. The key is read from
    /// `GLOWGUIDE_DETECTION_API_KEY` so it never has to live in source.
    pub fn from_env() -> Self {
        let api_key = std::env::var("GLOWGUIDE_DETECTION_API_KEY").unwrap_or_default();
        Self::new(DEFAULT_ENDPOINT, api_key)
    }
}

/// HTTP implementation of the [`AcneDetector`] gateway.
///
/// Each call is a single attempt; there is no retry layer. The service
/// takes the photo as a base64 body and selects the response shape via a
/// `format` query parameter.
pub struct HttpAcneDetector {
    client: Client,
    config: DetectionConfig,
}

impl HttpAcneDetector {
    pub fn new(config: DetectionConfig) -> Result<Self, DomainError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                DomainError::Infrastructure(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }

    async fn post_image(&self, image: &[u8], format: &str) -> Result<Response, DomainError> {
        let body = BASE64.encode(image);

        let response = self
            .client
            .post(&self.config.endpoint)
            .query(&[
                ("api_key", self.config.api_key.as_str()),
                ("format", format),
            ])
            .header(
                header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DomainError::Network(format!("Detection request timed out: {e}"))
                } else {
                    DomainError::Network(format!("Detection request failed: {e}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            let detail = &detail[..detail.len().min(200)];
            return Err(DomainError::DetectionService(format!(
                "Detection service returned {status}: {detail}"
            )));
        }

        Ok(response)
    }
}

#[async_trait]
impl AcneDetector for HttpAcneDetector {
    #[instrument(skip(self, image), fields(image_bytes = image.len()))]
    async fn detect(&self, image: &[u8]) -> Result<DetectionReport, DomainError> {
        let response = self.post_image(image, "json").await?;

        let raw: RawDetectionResponse = response.json().await.map_err(|e| {
            DomainError::DetectionService(format!("Unreadable detection response: {e}"))
        })?;

        let report = DetectionReport::from_raw(raw.predictions, raw.time);
        debug!(
            total_found = report.total_found,
            processing_time = report.processing_time,
            "Detection completed"
        );

        Ok(report)
    }

    #[instrument(skip(self, image), fields(image_bytes = image.len()))]
    async fn annotated_image(&self, image: &[u8]) -> Result<Vec<u8>, DomainError> {
        let response = self.post_image(image, "image").await?;

        let bytes = response.bytes().await.map_err(|e| {
            DomainError::Network(format!("Failed to read annotated image: {e}"))
        })?;

        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn detector_for(server: &mockito::ServerGuard) -> HttpAcneDetector {
        HttpAcneDetector::new(DetectionConfig::new(server.url(), "test-key")).unwrap()
    }

    #[tokio::test]
    async fn test_detect_filters_low_confidence_predictions() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("api_key".into(), "test-key".into()),
                Matcher::UrlEncoded("format".into(), "json".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "predictions": [
                        {"class": "acne", "confidence": 0.91, "x": 120.0, "y": 80.0, "width": 30.0, "height": 30.0},
                        {"class": "acne", "confidence": 0.12, "x": 40.0, "y": 40.0, "width": 20.0, "height": 20.0}
                    ],
                    "time": 0.42
                }"#,
            )
            .create_async()
            .await;

        let detector = detector_for(&server);
        let report = detector.detect(b"fake-jpeg").await.unwrap();

        mock.assert_async().await;
        assert!(report.success);
        assert_eq!(report.total_found, 1);
        assert_eq!(report.predictions[0].confidence, 0.91);
        assert_eq!(report.processing_time, 0.42);
    }

    #[tokio::test]
    async fn test_detect_sends_base64_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .match_query(Matcher::Any)
            .match_body(Matcher::Exact(BASE64.encode(b"fake-jpeg")))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"predictions": [], "time": 0.1}"#)
            .create_async()
            .await;

        let detector = detector_for(&server);
        let report = detector.detect(b"fake-jpeg").await.unwrap();

        mock.assert_async().await;
        assert!(!report.has_detections());
    }

    #[tokio::test]
    async fn test_detect_maps_server_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/")
            .match_query(Matcher::Any)
            .with_status(502)
            .with_body("bad gateway")
            .create_async()
            .await;

        let detector = detector_for(&server);
        let err = detector.detect(b"fake-jpeg").await.unwrap_err();

        assert!(matches!(err, DomainError::DetectionService(_)));
        assert!(err.message().contains("502"));
    }

    #[tokio::test]
    async fn test_detect_rejects_malformed_response() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let detector = detector_for(&server);
        let err = detector.detect(b"fake-jpeg").await.unwrap_err();

        assert!(matches!(err, DomainError::DetectionService(_)));
    }

    #[tokio::test]
    async fn test_annotated_image_returns_raw_bytes() {
        let annotated = vec![0xFFu8, 0xD8, 0xFF, 0xE0, 0x01, 0x02];

        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("api_key".into(), "test-key".into()),
                Matcher::UrlEncoded("format".into(), "image".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "image/jpeg")
            .with_body(annotated.clone())
            .create_async()
            .await;

        let detector = detector_for(&server);
        let bytes = detector.annotated_image(b"fake-jpeg").await.unwrap();

        mock.assert_async().await;
        assert_eq!(bytes, annotated);
    }
}
