// Domain layer - Pure business logic
// No dependencies on infrastructure or presentation layers

pub mod detection;
pub mod navigation;
pub mod profile;
pub mod quiz;
pub mod routine;
pub mod shared;
pub mod skin_type;

// Re-exports for convenience
pub use shared::DomainError;
pub use skin_type::SkinType;
