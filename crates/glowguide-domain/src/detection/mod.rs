mod gateway;
mod value_objects;

pub use gateway::AcneDetector;
pub use value_objects::{DetectionReport, Prediction, MIN_CONFIDENCE};
