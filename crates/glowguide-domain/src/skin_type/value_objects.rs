use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::shared::DomainError;

/// The five recognized skin types.
///
/// `Sensitive` is only reachable through manual selection; the point-based
/// quiz classifier never produces it because no quiz question discriminates
/// sensitivity from normal skin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkinType {
    Oily,
    Dry,
    Combination,
    Normal,
    Sensitive,
}

impl SkinType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkinType::Oily => "oily",
            SkinType::Dry => "dry",
            SkinType::Combination => "combination",
            SkinType::Normal => "normal",
            SkinType::Sensitive => "sensitive",
        }
    }

    /// Static display copy for this skin type.
    pub fn display_data(&self) -> SkinTypeDisplay {
        let data = static_display(*self);
        SkinTypeDisplay {
            title: data.title.to_string(),
            description: data.description.to_string(),
            signs: data.signs.iter().map(|s| s.to_string()).collect(),
            color: data.color.to_string(),
            explanation: data.explanation.to_string(),
        }
    }

    pub(crate) fn signs(&self) -> &'static [&'static str; 3] {
        &static_display(*self).signs
    }

    pub(crate) fn title(&self) -> &'static str {
        static_display(*self).title
    }
}

impl FromStr for SkinType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "oily" => Ok(SkinType::Oily),
            "dry" => Ok(SkinType::Dry),
            "combination" => Ok(SkinType::Combination),
            "normal" => Ok(SkinType::Normal),
            "sensitive" => Ok(SkinType::Sensitive),
            _ => Err(DomainError::Validation(format!(
                "Invalid skin type: {s}. Must be one of oily, dry, combination, normal, sensitive"
            ))),
        }
    }
}

impl std::fmt::Display for SkinType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resolved display copy handed to the results screen.
///
/// Owned strings rather than static references because the combined
/// (two-type) variant synthesizes its title, signs and explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkinTypeDisplay {
    pub title: String,
    pub description: String,
    pub signs: Vec<String>,
    pub color: String,
    pub explanation: String,
}

struct StaticDisplay {
    title: &'static str,
    description: &'static str,
    signs: [&'static str; 3],
    color: &'static str,
    explanation: &'static str,
}

fn static_display(skin_type: SkinType) -> &'static StaticDisplay {
    match skin_type {
        SkinType::Oily => &OILY,
        SkinType::Dry => &DRY,
        SkinType::Combination => &COMBINATION,
        SkinType::Normal => &NORMAL,
        SkinType::Sensitive => &SENSITIVE,
    }
}

static OILY: StaticDisplay = StaticDisplay {
    title: "Oily",
    description: "Your skin produces more sebum than it needs, especially in the T-zone.",
    signs: [
        "Shiny appearance within a few hours of cleansing",
        "Enlarged, visible pores",
        "Prone to blackheads and breakouts",
    ],
    color: "#F5A623",
    explanation: "Oily skin happens when sebaceous glands are overactive. The extra sebum \
        can clog pores and trigger breakouts, but it also keeps your skin naturally \
        protected from moisture loss. A routine built around gentle cleansing and \
        lightweight, non-comedogenic hydration keeps the shine in check without \
        stripping your skin.",
};

static DRY: StaticDisplay = StaticDisplay {
    title: "Dry",
    description: "Your skin makes less sebum than it needs, leaving the barrier under-protected.",
    signs: [
        "Feels tight, especially after washing",
        "Visible flaking or rough patches",
        "Fine lines appear more pronounced",
    ],
    color: "#4A90D9",
    explanation: "Dry skin lacks the lipids it needs to hold on to moisture and shield \
        itself from the environment. Rich moisturizers, barrier-repairing ingredients \
        like ceramides, and avoiding hot water or harsh cleansers help restore comfort \
        and flexibility.",
};

static COMBINATION: StaticDisplay = StaticDisplay {
    title: "Combination",
    description: "Your skin behaves differently across zones: oily in some, dry in others.",
    signs: [
        "Oily T-zone with drier cheeks",
        "Pores look larger around the nose",
        "Occasional breakouts alongside flaky areas",
    ],
    color: "#7ED321",
    explanation: "Combination skin means your sebaceous glands are more active in the \
        forehead, nose and chin than elsewhere. The key is balance: targeted care for \
        the oily zones and richer hydration where your skin runs dry, instead of one \
        heavy-handed product everywhere.",
};

static NORMAL: StaticDisplay = StaticDisplay {
    title: "Normal",
    description: "Your skin is well balanced: neither too oily nor too dry.",
    signs: [
        "Even tone and smooth texture",
        "Barely visible pores",
        "Rarely reacts or breaks out",
    ],
    color: "#9B9B9B",
    explanation: "Balanced sebum production and good circulation keep normal skin \
        comfortable through the day. Your routine's job is maintenance: consistent \
        cleansing, daily SPF, and hydration that preserves the balance you already \
        have.",
};

static SENSITIVE: StaticDisplay = StaticDisplay {
    title: "Sensitive",
    description: "Your skin reacts easily to products, weather, and friction.",
    signs: [
        "Redness or stinging after new products",
        "Flushes easily with heat or cold",
        "Prone to itching and tightness",
    ],
    color: "#E76D83",
    explanation: "Sensitive skin has a more permeable barrier and a nervous system that \
        fires sooner, so fragrance, alcohol and strong actives can set off redness or \
        stinging. Short ingredient lists, patch testing, and soothing ingredients like \
        panthenol and centella keep reactions to a minimum.",
};
