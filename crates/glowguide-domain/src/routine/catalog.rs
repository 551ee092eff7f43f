use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::shared::DomainError;
use crate::skin_type::SkinType;

/// How involved the user wants their routine to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutineLevel {
    Basic,
    Moderate,
    Comprehensive,
}

impl RoutineLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoutineLevel::Basic => "basic",
            RoutineLevel::Moderate => "moderate",
            RoutineLevel::Comprehensive => "comprehensive",
        }
    }
}

impl FromStr for RoutineLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "basic" => Ok(RoutineLevel::Basic),
            "moderate" => Ok(RoutineLevel::Moderate),
            "comprehensive" => Ok(RoutineLevel::Comprehensive),
            _ => Err(DomainError::Validation(format!(
                "Invalid routine level: {s}. Must be basic, moderate or comprehensive"
            ))),
        }
    }
}

/// An ordered morning/evening routine plus what it targets. Immutable
/// reference data; read, never written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Routine {
    pub morning: &'static [&'static str],
    pub evening: &'static [&'static str],
    pub benefits: &'static [&'static str],
}

/// Look up the routine for a skin type at a given level.
pub fn routine_for(skin_type: SkinType, level: RoutineLevel) -> &'static Routine {
    match (skin_type, level) {
        (SkinType::Oily, RoutineLevel::Basic) => &OILY_BASIC,
        (SkinType::Oily, RoutineLevel::Moderate) => &OILY_MODERATE,
        (SkinType::Oily, RoutineLevel::Comprehensive) => &OILY_COMPREHENSIVE,
        (SkinType::Dry, RoutineLevel::Basic) => &DRY_BASIC,
        (SkinType::Dry, RoutineLevel::Moderate) => &DRY_MODERATE,
        (SkinType::Dry, RoutineLevel::Comprehensive) => &DRY_COMPREHENSIVE,
        (SkinType::Combination, RoutineLevel::Basic) => &COMBINATION_BASIC,
        (SkinType::Combination, RoutineLevel::Moderate) => &COMBINATION_MODERATE,
        (SkinType::Combination, RoutineLevel::Comprehensive) => &COMBINATION_COMPREHENSIVE,
        (SkinType::Normal, RoutineLevel::Basic) => &NORMAL_BASIC,
        (SkinType::Normal, RoutineLevel::Moderate) => &NORMAL_MODERATE,
        (SkinType::Normal, RoutineLevel::Comprehensive) => &NORMAL_COMPREHENSIVE,
        (SkinType::Sensitive, RoutineLevel::Basic) => &SENSITIVE_BASIC,
        (SkinType::Sensitive, RoutineLevel::Moderate) => &SENSITIVE_MODERATE,
        (SkinType::Sensitive, RoutineLevel::Comprehensive) => &SENSITIVE_COMPREHENSIVE,
    }
}

static OILY_BASIC: Routine = Routine {
    morning: &["Gel cleanser", "Oil-free moisturizer", "Mattifying SPF 30+"],
    evening: &["Gel cleanser", "Lightweight night moisturizer"],
    benefits: &["Shine control", "Fewer clogged pores"],
};

static OILY_MODERATE: Routine = Routine {
    morning: &[
        "Gel cleanser",
        "Niacinamide serum",
        "Oil-free moisturizer",
        "Mattifying SPF 30+",
    ],
    evening: &[
        "Gel cleanser",
        "BHA exfoliant (2-3x weekly)",
        "Lightweight night moisturizer",
    ],
    benefits: &["Shine control", "Fewer clogged pores", "Smoother texture"],
};

static OILY_COMPREHENSIVE: Routine = Routine {
    morning: &[
        "Gel cleanser",
        "Balancing toner",
        "Niacinamide serum",
        "Oil-free moisturizer",
        "Mattifying SPF 50",
    ],
    evening: &[
        "Oil cleanser",
        "Gel cleanser",
        "BHA exfoliant (2-3x weekly)",
        "Retinoid (alternate nights)",
        "Lightweight night moisturizer",
        "Clay mask (weekly)",
    ],
    benefits: &[
        "Shine control",
        "Fewer clogged pores",
        "Smoother texture",
        "Breakout prevention",
    ],
};

static DRY_BASIC: Routine = Routine {
    morning: &["Cream cleanser", "Rich moisturizer", "Hydrating SPF 30+"],
    evening: &["Cream cleanser", "Night cream"],
    benefits: &["All-day comfort", "Less flaking"],
};

static DRY_MODERATE: Routine = Routine {
    morning: &[
        "Cream cleanser",
        "Hyaluronic acid serum",
        "Rich moisturizer",
        "Hydrating SPF 30+",
    ],
    evening: &[
        "Cream cleanser",
        "Hyaluronic acid serum",
        "Ceramide night cream",
    ],
    benefits: &["All-day comfort", "Less flaking", "Stronger barrier"],
};

static DRY_COMPREHENSIVE: Routine = Routine {
    morning: &[
        "Cream cleanser",
        "Hydrating toner",
        "Hyaluronic acid serum",
        "Rich moisturizer",
        "Facial oil (2-3 drops)",
        "Hydrating SPF 30+",
    ],
    evening: &[
        "Cleansing balm",
        "Hydrating toner",
        "Hyaluronic acid serum",
        "Ceramide night cream",
        "Overnight mask (weekly)",
    ],
    benefits: &[
        "All-day comfort",
        "Less flaking",
        "Stronger barrier",
        "Plumper, smoother look",
    ],
};

static COMBINATION_BASIC: Routine = Routine {
    morning: &["Balancing cleanser", "Lightweight moisturizer", "SPF 30+"],
    evening: &["Balancing cleanser", "Lightweight night moisturizer"],
    benefits: &["Balanced zones", "Less midday shine"],
};

static COMBINATION_MODERATE: Routine = Routine {
    morning: &[
        "Balancing cleanser",
        "Niacinamide serum (T-zone)",
        "Lightweight moisturizer",
        "SPF 30+",
    ],
    evening: &[
        "Balancing cleanser",
        "BHA exfoliant on T-zone (2x weekly)",
        "Richer cream on cheeks",
    ],
    benefits: &["Balanced zones", "Less midday shine", "Comfortable cheeks"],
};

static COMBINATION_COMPREHENSIVE: Routine = Routine {
    morning: &[
        "Balancing cleanser",
        "Balancing toner",
        "Niacinamide serum (T-zone)",
        "Lightweight moisturizer",
        "SPF 50",
    ],
    evening: &[
        "Oil cleanser",
        "Balancing cleanser",
        "BHA exfoliant on T-zone (2x weekly)",
        "Hydrating serum on cheeks",
        "Zone-targeted moisturizers",
        "Multi-mask (weekly)",
    ],
    benefits: &[
        "Balanced zones",
        "Less midday shine",
        "Comfortable cheeks",
        "Even texture",
    ],
};

static NORMAL_BASIC: Routine = Routine {
    morning: &["Gentle cleanser", "Daily moisturizer", "SPF 30+"],
    evening: &["Gentle cleanser", "Night moisturizer"],
    benefits: &["Maintained balance", "Daily protection"],
};

static NORMAL_MODERATE: Routine = Routine {
    morning: &[
        "Gentle cleanser",
        "Vitamin C serum",
        "Daily moisturizer",
        "SPF 30+",
    ],
    evening: &[
        "Gentle cleanser",
        "AHA exfoliant (2x weekly)",
        "Night moisturizer",
    ],
    benefits: &["Maintained balance", "Daily protection", "Brighter tone"],
};

static NORMAL_COMPREHENSIVE: Routine = Routine {
    morning: &[
        "Gentle cleanser",
        "Antioxidant toner",
        "Vitamin C serum",
        "Daily moisturizer",
        "SPF 50",
    ],
    evening: &[
        "Oil cleanser",
        "Gentle cleanser",
        "AHA exfoliant (2x weekly)",
        "Retinoid (alternate nights)",
        "Night moisturizer",
        "Hydrating mask (weekly)",
    ],
    benefits: &[
        "Maintained balance",
        "Daily protection",
        "Brighter tone",
        "Early-aging prevention",
    ],
};

static SENSITIVE_BASIC: Routine = Routine {
    morning: &["Fragrance-free cleanser", "Soothing moisturizer", "Mineral SPF 30+"],
    evening: &["Fragrance-free cleanser", "Barrier-repair cream"],
    benefits: &["Fewer reactions", "Calmer skin"],
};

static SENSITIVE_MODERATE: Routine = Routine {
    morning: &[
        "Fragrance-free cleanser",
        "Centella serum",
        "Soothing moisturizer",
        "Mineral SPF 30+",
    ],
    evening: &[
        "Fragrance-free cleanser",
        "Panthenol serum",
        "Barrier-repair cream",
    ],
    benefits: &["Fewer reactions", "Calmer skin", "Stronger barrier"],
};

static SENSITIVE_COMPREHENSIVE: Routine = Routine {
    morning: &[
        "Fragrance-free cleanser",
        "Soothing mist",
        "Centella serum",
        "Soothing moisturizer",
        "Mineral SPF 50",
    ],
    evening: &[
        "Micellar water",
        "Fragrance-free cleanser",
        "Panthenol serum",
        "Barrier-repair cream",
        "Soothing mask (weekly)",
    ],
    benefits: &[
        "Fewer reactions",
        "Calmer skin",
        "Stronger barrier",
        "Reduced redness",
    ],
};
