use std::sync::Arc;

use glowguide_domain::profile::PreferenceRepository;
use glowguide_domain::routine::{products_for, routine_for, RoutineLevel, RoutineStepKind};
use glowguide_domain::shared::DomainError;
use glowguide_domain::skin_type::SkinType;

use crate::application::dtos::{ProductDto, RecommendationsDto, RoutineDto};

pub struct RoutineService {
    repo: Arc<dyn PreferenceRepository>,
}

impl RoutineService {
    pub fn new(repo: Arc<dyn PreferenceRepository>) -> Self {
        Self { repo }
    }

    /// Recommendations for the stored profile.
    pub async fn recommendations(&self) -> Result<RecommendationsDto, DomainError> {
        let profile = self.repo.load_profile().await?;
        Ok(Self::build(profile.skin_type, profile.routine_level))
    }

    /// Recommendations for an explicit selection, bypassing the store.
    pub fn recommendations_for(
        &self,
        skin_type: SkinType,
        level: RoutineLevel,
    ) -> RecommendationsDto {
        Self::build(skin_type, level)
    }

    fn build(skin_type: SkinType, level: RoutineLevel) -> RecommendationsDto {
        let routine = routine_for(skin_type, level);

        let products = RoutineStepKind::ALL
            .iter()
            .flat_map(|&step| {
                products_for(skin_type, step)
                    .iter()
                    .map(move |p| ProductDto::from_product(p, step))
            })
            .collect();

        RecommendationsDto {
            routine: RoutineDto::from_routine(skin_type, level, routine),
            products,
        }
    }
}
