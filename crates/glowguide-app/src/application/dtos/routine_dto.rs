use serde::{Deserialize, Serialize};

use glowguide_domain::routine::{Product, Routine, RoutineLevel, RoutineStepKind};
use glowguide_domain::skin_type::SkinType;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutineDto {
    pub skin_type: String,
    pub level: String,
    pub morning: Vec<String>,
    pub evening: Vec<String>,
    pub benefits: Vec<String>,
}

impl RoutineDto {
    pub fn from_routine(skin_type: SkinType, level: RoutineLevel, routine: &Routine) -> Self {
        Self {
            skin_type: skin_type.as_str().to_string(),
            level: level.as_str().to_string(),
            morning: routine.morning.iter().map(|s| s.to_string()).collect(),
            evening: routine.evening.iter().map(|s| s.to_string()).collect(),
            benefits: routine.benefits.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub benefits: Vec<String>,
    pub step: String,
}

impl ProductDto {
    pub fn from_product(product: &Product, step: RoutineStepKind) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.to_string(),
            description: product.description.to_string(),
            benefits: product.benefits.iter().map(|s| s.to_string()).collect(),
            step: step.as_str().to_string(),
        }
    }
}

/// The routine plus its product shelf, grouped in one payload for the
/// recommendations screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationsDto {
    pub routine: RoutineDto,
    pub products: Vec<ProductDto>,
}
