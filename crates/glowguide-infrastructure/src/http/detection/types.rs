use serde::Deserialize;

use glowguide_domain::detection::Prediction;

/// The wire shape of the detection service's JSON response. Only the
/// fields we consume; the service sends more.
#[derive(Debug, Deserialize)]
pub(super) struct RawDetectionResponse {
    #[serde(default)]
    pub predictions: Vec<Prediction>,
    #[serde(default)]
    pub time: f64,
}

pub(super) const USER_AGENT: &str = concat!("glowguide/", env!("CARGO_PKG_VERSION"));
