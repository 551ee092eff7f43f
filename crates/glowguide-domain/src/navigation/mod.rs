mod answers;
mod main_flow;
mod navigator;
mod steps;

#[cfg(test)]
mod navigator_test;
#[cfg(test)]
mod steps_test;

pub use answers::OnboardingAnswers;
pub use main_flow::{MainEvent, MainStep, ResultsEntry};
pub use navigator::{Navigator, OnboardingTarget, Screen, TestResults};
pub use steps::{OnboardingStep, ONBOARDING_SEQUENCE};
