use tracing::warn;

use crate::quiz::TestResult;
use crate::skin_type::{SkinType, SkinTypeDisplay};

/// Highest total the two-question quizzes can produce (2 questions x 4 points).
pub const MAX_QUIZ_POINTS: u32 = 8;

/// Bucket a quiz point total into a skin type.
///
/// Thresholds are inclusive on the lower bound of each bracket:
/// `>= 7` oily, `5..=6` combination, `3..=4` normal, `< 3` dry.
/// There is no sensitive bucket on this path; sensitivity is only recorded
/// through manual selection.
pub fn classify_by_points(total_points: u32) -> SkinType {
    if total_points >= 7 {
        SkinType::Oily
    } else if total_points >= 5 {
        SkinType::Combination
    } else if total_points >= 3 {
        SkinType::Normal
    } else {
        SkinType::Dry
    }
}

/// Map a manually declared skin type to a point total that re-derives the
/// same type through [`classify_by_points`], so both entry paths share one
/// downstream representation.
///
/// `Sensitive` deliberately reuses `Normal`'s bucket: the scoring scale
/// cannot distinguish the two, and the declared types ride along in the
/// result metadata instead.
pub fn synthesize_points_for_manual_type(skin_type: SkinType) -> u32 {
    match skin_type {
        SkinType::Oily => 8,
        SkinType::Combination => 5,
        SkinType::Normal => 3,
        SkinType::Dry => 2,
        SkinType::Sensitive => 3,
    }
}

/// Resolve the single skin type a completed assessment settles on. Manual
/// selections keep their first declared type; quiz results go through the
/// point buckets.
pub fn resolve_skin_type(result: &TestResult) -> SkinType {
    if result.metadata.is_manual_selection {
        match result.metadata.selected_skin_types.first() {
            Some(declared) => *declared,
            None => {
                warn!("Manual selection recorded no skin types, defaulting to normal");
                SkinType::Normal
            }
        }
    } else {
        classify_by_points(result.total_points)
    }
}

/// Resolve the display copy for a completed assessment.
///
/// Handles three entry paths: manual selection of two types (combined
/// display), manual selection of one type (direct lookup), and the quiz
/// path (classify by points, then look up). A missing result degrades to
/// the `Normal` display instead of failing.
pub fn resolve_display_data(result: Option<&TestResult>) -> SkinTypeDisplay {
    let Some(result) = result else {
        warn!("Resolving display data without a test result, defaulting to normal");
        return SkinType::Normal.display_data();
    };

    if result.metadata.is_manual_selection {
        match result.metadata.selected_skin_types.as_slice() {
            [] => {
                warn!("Manual selection recorded no skin types, defaulting to normal");
                return SkinType::Normal.display_data();
            }
            [single] => return single.display_data(),
            types => return combined_display(types),
        }
    }

    classify_by_points(result.total_points).display_data()
}

/// Build the combined display for two manually selected types: titles joined
/// with " + ", the union of both sign lists truncated to the first 3 unique
/// entries (first type's signs first), and a pair-specific narrative when
/// the combination is a known one.
fn combined_display(types: &[SkinType]) -> SkinTypeDisplay {
    let first = types[0];
    let base = first.display_data();

    let title = types
        .iter()
        .map(|t| t.title())
        .collect::<Vec<_>>()
        .join(" + ");

    let mut signs: Vec<String> = Vec::with_capacity(3);
    for skin_type in types {
        for sign in skin_type.signs() {
            if signs.len() == 3 {
                break;
            }
            if !signs.iter().any(|s| s == sign) {
                signs.push((*sign).to_string());
            }
        }
    }

    let explanation = match pair_narrative(types) {
        Some(narrative) => narrative.to_string(),
        None => format!(
            "Your skin shows characteristics of more than one type: {title}. Each side \
             needs its own care, so your routine combines the gentler picks from both \
             profiles rather than treating your whole face the same way."
        ),
    };

    SkinTypeDisplay {
        description: format!("Your skin combines {title} characteristics."),
        title,
        signs,
        color: base.color,
        explanation,
    }
}

/// Fixed narratives for the recognized two-type combinations. Matching is on
/// the set of declared types, not their order.
fn pair_narrative(types: &[SkinType]) -> Option<&'static str> {
    if types.len() != 2 {
        return None;
    }

    let has = |t: SkinType| types.contains(&t);

    if has(SkinType::Dry) && has(SkinType::Sensitive) {
        Some(
            "Dry and sensitive skin share a weakened barrier: the same gaps that let \
             moisture escape also let irritants in. Fragrance-free, ceramide-rich \
             products do double duty here, repairing the barrier while keeping \
             reactions at bay. Avoid foaming cleansers and exfoliate sparingly.",
        )
    } else if has(SkinType::Oily) && has(SkinType::Sensitive) {
        Some(
            "Oily yet sensitive skin is a balancing act: many oil-control ingredients \
             are exactly the ones that trigger irritation. Lightweight gel textures, \
             azelaic acid, and niacinamide manage shine without the sting. Introduce \
             one active at a time and keep the rest of the routine bland.",
        )
    } else if has(SkinType::Combination) && has(SkinType::Sensitive) {
        Some(
            "Combination skin with sensitivity means treating zones differently while \
             keeping every product gentle. Reserve mattifying steps for the T-zone, \
             cushion the cheeks with soothing hydration, and skip multi-acid \
             exfoliants that hit the whole face at once.",
        )
    } else if has(SkinType::Normal) && has(SkinType::Sensitive) {
        Some(
            "Your skin is balanced in oil and moisture but quick to react. The \
             maintenance routine of normal skin works for you as long as every \
             formula stays fragrance-free and low on strong actives. When in doubt, \
             patch test first; your barrier will thank you.",
        )
    } else {
        None
    }
}
