mod aggregate;
mod repository;

pub use aggregate::SkinProfile;
pub use repository::PreferenceRepository;
