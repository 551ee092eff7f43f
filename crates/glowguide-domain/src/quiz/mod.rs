mod questions;
mod value_objects;

#[cfg(test)]
mod value_objects_test;

pub use questions::{questions_for, QuizOption, QuizQuestion};
pub use value_objects::{QuizAnswer, ResultMetadata, TestKind, TestResult, TestType};
