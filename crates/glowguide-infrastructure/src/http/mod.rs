mod detection;

pub use detection::{DetectionConfig, HttpAcneDetector};
