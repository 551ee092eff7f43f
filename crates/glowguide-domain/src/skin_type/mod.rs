mod classifier;
mod value_objects;

#[cfg(test)]
mod classifier_test;
#[cfg(test)]
mod value_objects_test;

pub use classifier::{
    classify_by_points, resolve_display_data, resolve_skin_type,
    synthesize_points_for_manual_type, MAX_QUIZ_POINTS,
};
pub use value_objects::{SkinType, SkinTypeDisplay};
