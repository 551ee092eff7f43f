use serde::{Deserialize, Serialize};

use crate::skin_type::SkinType;

/// The routine step slots that carry product recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutineStepKind {
    Cleanser,
    Treatment,
    Moisturizer,
    Sunscreen,
}

impl RoutineStepKind {
    pub const ALL: [RoutineStepKind; 4] = [
        RoutineStepKind::Cleanser,
        RoutineStepKind::Treatment,
        RoutineStepKind::Moisturizer,
        RoutineStepKind::Sunscreen,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoutineStepKind::Cleanser => "cleanser",
            RoutineStepKind::Treatment => "treatment",
            RoutineStepKind::Moisturizer => "moisturizer",
            RoutineStepKind::Sunscreen => "sunscreen",
        }
    }
}

/// A product recommendation. Pure reference data, read-only at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub benefits: &'static [&'static str],
}

/// The five recommendations for a skin type at a routine step.
pub fn products_for(skin_type: SkinType, kind: RoutineStepKind) -> &'static [Product; 5] {
    match (skin_type, kind) {
        (SkinType::Oily, RoutineStepKind::Cleanser) => &OILY_CLEANSERS,
        (SkinType::Oily, RoutineStepKind::Treatment) => &OILY_TREATMENTS,
        (SkinType::Oily, RoutineStepKind::Moisturizer) => &OILY_MOISTURIZERS,
        (SkinType::Oily, RoutineStepKind::Sunscreen) => &OILY_SUNSCREENS,
        (SkinType::Dry, RoutineStepKind::Cleanser) => &DRY_CLEANSERS,
        (SkinType::Dry, RoutineStepKind::Treatment) => &DRY_TREATMENTS,
        (SkinType::Dry, RoutineStepKind::Moisturizer) => &DRY_MOISTURIZERS,
        (SkinType::Dry, RoutineStepKind::Sunscreen) => &DRY_SUNSCREENS,
        (SkinType::Combination, RoutineStepKind::Cleanser) => &COMBINATION_CLEANSERS,
        (SkinType::Combination, RoutineStepKind::Treatment) => &COMBINATION_TREATMENTS,
        (SkinType::Combination, RoutineStepKind::Moisturizer) => &COMBINATION_MOISTURIZERS,
        (SkinType::Combination, RoutineStepKind::Sunscreen) => &COMBINATION_SUNSCREENS,
        (SkinType::Normal, RoutineStepKind::Cleanser) => &NORMAL_CLEANSERS,
        (SkinType::Normal, RoutineStepKind::Treatment) => &NORMAL_TREATMENTS,
        (SkinType::Normal, RoutineStepKind::Moisturizer) => &NORMAL_MOISTURIZERS,
        (SkinType::Normal, RoutineStepKind::Sunscreen) => &NORMAL_SUNSCREENS,
        (SkinType::Sensitive, RoutineStepKind::Cleanser) => &SENSITIVE_CLEANSERS,
        (SkinType::Sensitive, RoutineStepKind::Treatment) => &SENSITIVE_TREATMENTS,
        (SkinType::Sensitive, RoutineStepKind::Moisturizer) => &SENSITIVE_MOISTURIZERS,
        (SkinType::Sensitive, RoutineStepKind::Sunscreen) => &SENSITIVE_SUNSCREENS,
    }
}

static OILY_CLEANSERS: [Product; 5] = [
    Product {
        id: "oily-cleanser-1",
        name: "Clarifying Gel Wash",
        description: "Foaming gel with salicylic acid that lifts excess sebum without stripping.",
        benefits: &["Shine control", "Unclogs pores"],
    },
    Product {
        id: "oily-cleanser-2",
        name: "Green Clay Cleanser",
        description: "Kaolin-based cream wash that absorbs oil as it cleans.",
        benefits: &["Oil absorption", "Gentle on the barrier"],
    },
    Product {
        id: "oily-cleanser-3",
        name: "Charcoal Foam Cleanser",
        description: "Airy foam with charcoal for a deep but quick morning cleanse.",
        benefits: &["Deep cleanse", "Refreshed feel"],
    },
    Product {
        id: "oily-cleanser-4",
        name: "Zinc PCA Daily Wash",
        description: "Low-pH gel with zinc PCA to slow midday shine.",
        benefits: &["Sebum regulation", "pH friendly"],
    },
    Product {
        id: "oily-cleanser-5",
        name: "Tea Tree Gel Cleanser",
        description: "Light gel with tea tree leaf water for blemish-prone days.",
        benefits: &["Blemish care", "Cooling finish"],
    },
];

static OILY_TREATMENTS: [Product; 5] = [
    Product {
        id: "oily-treatment-1",
        name: "2% BHA Liquid",
        description: "Leave-on salicylic acid that clears congestion inside the pore.",
        benefits: &["Unclogs pores", "Smoother texture"],
    },
    Product {
        id: "oily-treatment-2",
        name: "10% Niacinamide Serum",
        description: "Concentrated niacinamide with zinc to visibly tighten pores.",
        benefits: &["Pore refinement", "Shine control"],
    },
    Product {
        id: "oily-treatment-3",
        name: "Retinal Night Serum",
        description: "Encapsulated retinaldehyde for breakouts and texture, low irritation.",
        benefits: &["Breakout prevention", "Renewed texture"],
    },
    Product {
        id: "oily-treatment-4",
        name: "Azelaic Acid 10% Booster",
        description: "Cream-gel azelaic acid for marks left behind by blemishes.",
        benefits: &["Fades marks", "Evens tone"],
    },
    Product {
        id: "oily-treatment-5",
        name: "Weekly Clay Mask",
        description: "Bentonite and kaolin mask that resets an oily week in ten minutes.",
        benefits: &["Deep cleanse", "Instant mattifying"],
    },
];

static OILY_MOISTURIZERS: [Product; 5] = [
    Product {
        id: "oily-moisturizer-1",
        name: "Oil-Free Hydrating Gel",
        description: "Water-light gel with hyaluronic acid, zero added oils.",
        benefits: &["Weightless hydration", "No clogged pores"],
    },
    Product {
        id: "oily-moisturizer-2",
        name: "Mattifying Day Lotion",
        description: "Silica-smoothed lotion that keeps the T-zone matte till evening.",
        benefits: &["All-day matte", "Primer-like finish"],
    },
    Product {
        id: "oily-moisturizer-3",
        name: "Niacinamide Water Cream",
        description: "Bouncy water cream that hydrates while balancing sebum.",
        benefits: &["Balanced hydration", "Pore care"],
    },
    Product {
        id: "oily-moisturizer-4",
        name: "Green Tea Emulsion",
        description: "Fast-absorbing emulsion with green tea antioxidants.",
        benefits: &["Antioxidant care", "Light finish"],
    },
    Product {
        id: "oily-moisturizer-5",
        name: "Probiotic Gel Cream",
        description: "Gel cream with ferment extracts that supports a clearer microbiome.",
        benefits: &["Microbiome support", "Soothes breakouts"],
    },
];

static OILY_SUNSCREENS: [Product; 5] = [
    Product {
        id: "oily-sunscreen-1",
        name: "Matte Finish SPF 50",
        description: "Invisible gel sunscreen that doubles as a mattifying primer.",
        benefits: &["High protection", "Matte finish"],
    },
    Product {
        id: "oily-sunscreen-2",
        name: "Oil-Control Sun Fluid",
        description: "Ultra-light fluid with sebum-absorbing powders.",
        benefits: &["No shine", "No white cast"],
    },
    Product {
        id: "oily-sunscreen-3",
        name: "Airy Sun Gel SPF 50+",
        description: "Watery gel that layers cleanly under makeup.",
        benefits: &["Layers well", "Feels like nothing"],
    },
    Product {
        id: "oily-sunscreen-4",
        name: "Niacinamide Sun Serum",
        description: "Serum-textured SPF with niacinamide for pore care on the go.",
        benefits: &["Skincare + SPF", "Pore care"],
    },
    Product {
        id: "oily-sunscreen-5",
        name: "Mineral Matte Stick",
        description: "Zinc oxide stick for midday touch-ups over makeup.",
        benefits: &["Easy reapplication", "Mineral filter"],
    },
];

static DRY_CLEANSERS: [Product; 5] = [
    Product {
        id: "dry-cleanser-1",
        name: "Ceramide Cream Cleanser",
        description: "Non-foaming cream that cleans while replenishing lipids.",
        benefits: &["No tightness", "Barrier support"],
    },
    Product {
        id: "dry-cleanser-2",
        name: "Nourishing Cleansing Balm",
        description: "Melting balm that dissolves SPF and leaves a soft veil.",
        benefits: &["Thorough cleanse", "Comfort finish"],
    },
    Product {
        id: "dry-cleanser-3",
        name: "Oat Milk Gentle Wash",
        description: "Creamy oat wash for mornings when skin feels tight.",
        benefits: &["Soothing", "Gentle cleanse"],
    },
    Product {
        id: "dry-cleanser-4",
        name: "Hyaluronic Cleansing Gel",
        description: "Low-foam gel with humectants that cleanse without dehydrating.",
        benefits: &["Retains moisture", "Fresh feel"],
    },
    Product {
        id: "dry-cleanser-5",
        name: "Rich Cleansing Oil",
        description: "Squalane-based oil cleanse for evening double cleansing.",
        benefits: &["Dissolves makeup", "Extra nourishment"],
    },
];

static DRY_TREATMENTS: [Product; 5] = [
    Product {
        id: "dry-treatment-1",
        name: "Multi-Weight HA Serum",
        description: "Five sizes of hyaluronic acid for hydration at every depth.",
        benefits: &["Deep hydration", "Plumper look"],
    },
    Product {
        id: "dry-treatment-2",
        name: "Ceramide Concentrate",
        description: "Ampoule of ceramides and cholesterol in skin-identical ratio.",
        benefits: &["Barrier repair", "Lasting comfort"],
    },
    Product {
        id: "dry-treatment-3",
        name: "Polyglutamic Acid Essence",
        description: "Essence that seals in ten times its weight in water.",
        benefits: &["Moisture seal", "Glowy finish"],
    },
    Product {
        id: "dry-treatment-4",
        name: "Gentle Lactic Acid 5%",
        description: "Buffered lactic acid that smooths flaking without a sting.",
        benefits: &["Smooths flakes", "Hydrating exfoliation"],
    },
    Product {
        id: "dry-treatment-5",
        name: "Overnight Recovery Mask",
        description: "Sleeping mask with panthenol for a reset while you rest.",
        benefits: &["Overnight repair", "Morning softness"],
    },
];

static DRY_MOISTURIZERS: [Product; 5] = [
    Product {
        id: "dry-moisturizer-1",
        name: "Ceramide Rich Cream",
        description: "Dense cream that rebuilds the lipid barrier day after day.",
        benefits: &["Barrier repair", "All-day comfort"],
    },
    Product {
        id: "dry-moisturizer-2",
        name: "Shea Butter Balm",
        description: "Occlusive balm for cheeks and patches that flake first.",
        benefits: &["Spot nourishment", "Wind protection"],
    },
    Product {
        id: "dry-moisturizer-3",
        name: "Squalane Day Cream",
        description: "Breathable day cream with squalane and glycerin.",
        benefits: &["Non-greasy", "Steady hydration"],
    },
    Product {
        id: "dry-moisturizer-4",
        name: "Urea 5% Smoothing Cream",
        description: "Urea cream that softens rough, thickened areas.",
        benefits: &["Softens texture", "Locks moisture"],
    },
    Product {
        id: "dry-moisturizer-5",
        name: "Night Lipid Complex",
        description: "Evening cream with omega fatty acids for overnight recovery.",
        benefits: &["Overnight repair", "Reduced tightness"],
    },
];

static DRY_SUNSCREENS: [Product; 5] = [
    Product {
        id: "dry-sunscreen-1",
        name: "Hydra Cream SPF 30",
        description: "Sunscreen-moisturizer hybrid with hyaluronic acid.",
        benefits: &["Two in one", "Dewy finish"],
    },
    Product {
        id: "dry-sunscreen-2",
        name: "Glow Sun Milk SPF 50",
        description: "Nourishing milk that leaves a luminous (not greasy) sheen.",
        benefits: &["Radiant finish", "High protection"],
    },
    Product {
        id: "dry-sunscreen-3",
        name: "Ceramide Sun Cream",
        description: "Barrier-friendly cream SPF for reactive winter skin.",
        benefits: &["Barrier care", "No dryness"],
    },
    Product {
        id: "dry-sunscreen-4",
        name: "Moist Sun Essence",
        description: "Essence-texture SPF that layers over serums without pilling.",
        benefits: &["No pilling", "Comfortable wear"],
    },
    Product {
        id: "dry-sunscreen-5",
        name: "Overcast Day Fluid SPF 30",
        description: "Light everyday fluid for year-round habit building.",
        benefits: &["Daily protection", "Effortless wear"],
    },
];

static COMBINATION_CLEANSERS: [Product; 5] = [
    Product {
        id: "combination-cleanser-1",
        name: "Balancing Gel-Cream Wash",
        description: "Hybrid texture that degreases the T-zone and spares the cheeks.",
        benefits: &["Zone balance", "No tight cheeks"],
    },
    Product {
        id: "combination-cleanser-2",
        name: "PHA Daily Cleanser",
        description: "Mild polyhydroxy acid wash for gentle daily turnover.",
        benefits: &["Gentle exfoliation", "Even texture"],
    },
    Product {
        id: "combination-cleanser-3",
        name: "Amino Acid Foam",
        description: "Soft foam with amino acid surfactants, low-stripping.",
        benefits: &["Mild cleanse", "Fresh T-zone"],
    },
    Product {
        id: "combination-cleanser-4",
        name: "Micellar Cleansing Water",
        description: "No-rinse option for light mornings and quick evenings.",
        benefits: &["Quick cleanse", "No residue"],
    },
    Product {
        id: "combination-cleanser-5",
        name: "Green Tea Cleansing Oil",
        description: "Light cleansing oil that emulsifies fully, no film left behind.",
        benefits: &["Dissolves SPF", "Non-comedogenic"],
    },
];

static COMBINATION_TREATMENTS: [Product; 5] = [
    Product {
        id: "combination-treatment-1",
        name: "Niacinamide 5% Serum",
        description: "Everyday strength niacinamide that both zones tolerate.",
        benefits: &["Balances sebum", "Evens tone"],
    },
    Product {
        id: "combination-treatment-2",
        name: "T-Zone BHA Gel",
        description: "Targeted salicylic gel for the forehead, nose and chin only.",
        benefits: &["Targeted care", "Fewer blackheads"],
    },
    Product {
        id: "combination-treatment-3",
        name: "Hydrating B5 Serum",
        description: "Panthenol serum for the cheeks' dry afternoons.",
        benefits: &["Cheek comfort", "Lightweight"],
    },
    Product {
        id: "combination-treatment-4",
        name: "Mandelic Acid 8%",
        description: "Large-molecule AHA that smooths without over-exfoliating dry zones.",
        benefits: &["Gentle smoothing", "Brighter look"],
    },
    Product {
        id: "combination-treatment-5",
        name: "Dual-Zone Mask Set",
        description: "Clay for the center, hydrogel for the sides, used together.",
        benefits: &["Multi-masking", "Weekly reset"],
    },
];

static COMBINATION_MOISTURIZERS: [Product; 5] = [
    Product {
        id: "combination-moisturizer-1",
        name: "Balancing Fluid",
        description: "Self-adjusting emulsion that hydrates where skin asks for it.",
        benefits: &["Adaptive hydration", "Fast absorption"],
    },
    Product {
        id: "combination-moisturizer-2",
        name: "Water Gel Cream",
        description: "Cooling gel cream light enough for the T-zone.",
        benefits: &["Light hydration", "No shine"],
    },
    Product {
        id: "combination-moisturizer-3",
        name: "Cheek Comfort Cream",
        description: "Richer cream meant for the drier sides of the face.",
        benefits: &["Zone targeting", "Comfortable cheeks"],
    },
    Product {
        id: "combination-moisturizer-4",
        name: "Hyaluronic Lotion",
        description: "Middle-weight lotion for days when zones behave alike.",
        benefits: &["Even hydration", "Layers well"],
    },
    Product {
        id: "combination-moisturizer-5",
        name: "Oat Ceramide Emulsion",
        description: "Calming emulsion that steadies a reactive T-zone.",
        benefits: &["Calming", "Barrier support"],
    },
];

static COMBINATION_SUNSCREENS: [Product; 5] = [
    Product {
        id: "combination-sunscreen-1",
        name: "Balanced Finish SPF 50",
        description: "Semi-matte sunscreen that flatters both zones.",
        benefits: &["Semi-matte", "High protection"],
    },
    Product {
        id: "combination-sunscreen-2",
        name: "Fresh Sun Gel",
        description: "Gel SPF that disappears on the T-zone.",
        benefits: &["Invisible wear", "No grease"],
    },
    Product {
        id: "combination-sunscreen-3",
        name: "Hydra-Matte Sun Lotion",
        description: "Hydrating base with a soft-matte top layer.",
        benefits: &["Hybrid finish", "Comfortable wear"],
    },
    Product {
        id: "combination-sunscreen-4",
        name: "Tone-Up Sun Cream",
        description: "Light tone-evening SPF for no-makeup days.",
        benefits: &["Evens tone", "Daily protection"],
    },
    Product {
        id: "combination-sunscreen-5",
        name: "Sun Cushion Compact",
        description: "Cushion-applied SPF for clean midday top-ups.",
        benefits: &["Easy reapplication", "Portable"],
    },
];

static NORMAL_CLEANSERS: [Product; 5] = [
    Product {
        id: "normal-cleanser-1",
        name: "Daily Gentle Gel",
        description: "The dependable everyday gel that never over- or under-cleans.",
        benefits: &["Balanced cleanse", "Everyday staple"],
    },
    Product {
        id: "normal-cleanser-2",
        name: "Vitamin C Brightening Wash",
        description: "Morning wash with vitamin C derivatives for extra glow.",
        benefits: &["Brightening", "Fresh start"],
    },
    Product {
        id: "normal-cleanser-3",
        name: "Creamy Comfort Cleanser",
        description: "Cushiony cream wash for colder months.",
        benefits: &["Seasonal comfort", "No tightness"],
    },
    Product {
        id: "normal-cleanser-4",
        name: "Enzyme Powder Wash",
        description: "Papain powder that activates with water for weekly polish.",
        benefits: &["Gentle polish", "Smoother feel"],
    },
    Product {
        id: "normal-cleanser-5",
        name: "Botanical Cleansing Oil",
        description: "Evening oil cleanse that keeps the balance intact.",
        benefits: &["Dissolves SPF", "Maintains balance"],
    },
];

static NORMAL_TREATMENTS: [Product; 5] = [
    Product {
        id: "normal-treatment-1",
        name: "15% Vitamin C Serum",
        description: "L-ascorbic acid with ferulic for daily antioxidant defense.",
        benefits: &["Antioxidant defense", "Brighter tone"],
    },
    Product {
        id: "normal-treatment-2",
        name: "Retinol 0.3% Night Serum",
        description: "Entry-strength retinol for long-term skin quality.",
        benefits: &["Prevention", "Refined texture"],
    },
    Product {
        id: "normal-treatment-3",
        name: "Glycolic Toning Solution",
        description: "Twice-weekly AHA toner for steady glow maintenance.",
        benefits: &["Radiance", "Smoothing"],
    },
    Product {
        id: "normal-treatment-4",
        name: "Peptide Firming Serum",
        description: "Multi-peptide blend that keeps skin bouncy.",
        benefits: &["Firmness", "Early-aging care"],
    },
    Product {
        id: "normal-treatment-5",
        name: "Hydration Boost Ampoule",
        description: "Beta-glucan ampoule for weeks that run your skin down.",
        benefits: &["Moisture boost", "Recovery"],
    },
];

static NORMAL_MOISTURIZERS: [Product; 5] = [
    Product {
        id: "normal-moisturizer-1",
        name: "Everyday Balance Cream",
        description: "Medium-weight cream that suits every season.",
        benefits: &["Reliable hydration", "Suits all seasons"],
    },
    Product {
        id: "normal-moisturizer-2",
        name: "Antioxidant Day Lotion",
        description: "Day lotion with vitamin E and green tea.",
        benefits: &["Daily defense", "Light wear"],
    },
    Product {
        id: "normal-moisturizer-3",
        name: "Night Renewal Cream",
        description: "Evening cream with bakuchiol for overnight upkeep.",
        benefits: &["Overnight renewal", "Gentle actives"],
    },
    Product {
        id: "normal-moisturizer-4",
        name: "Gel-Cream Hydrator",
        description: "Lighter option for humid months.",
        benefits: &["Summer weight", "Fresh finish"],
    },
    Product {
        id: "normal-moisturizer-5",
        name: "Barrier Support Emulsion",
        description: "Ceramide emulsion for when skin acts out of character.",
        benefits: &["Barrier insurance", "Calming"],
    },
];

static NORMAL_SUNSCREENS: [Product; 5] = [
    Product {
        id: "normal-sunscreen-1",
        name: "Daily Defense SPF 50",
        description: "The do-everything daily sunscreen with no drawbacks.",
        benefits: &["High protection", "Natural finish"],
    },
    Product {
        id: "normal-sunscreen-2",
        name: "Antioxidant Sun Fluid",
        description: "SPF plus vitamin E for city days.",
        benefits: &["Pollution defense", "Light texture"],
    },
    Product {
        id: "normal-sunscreen-3",
        name: "Glow Veil SPF 30",
        description: "Subtly radiant finish for low-key days.",
        benefits: &["Soft glow", "Comfortable"],
    },
    Product {
        id: "normal-sunscreen-4",
        name: "Sport Sun Stick",
        description: "Water-resistant stick for outdoor weekends.",
        benefits: &["Water resistant", "Easy carry"],
    },
    Product {
        id: "normal-sunscreen-5",
        name: "Sheer Mineral Lotion",
        description: "Modern zinc formula without the classic white cast.",
        benefits: &["Mineral filter", "Sheer wear"],
    },
];

static SENSITIVE_CLEANSERS: [Product; 5] = [
    Product {
        id: "sensitive-cleanser-1",
        name: "Zero-Fragrance Cream Wash",
        description: "Shortest possible ingredient list, nothing to react to.",
        benefits: &["Minimal formula", "No irritation"],
    },
    Product {
        id: "sensitive-cleanser-2",
        name: "Thermal Water Gel Cleanser",
        description: "Soothing spring-water gel for flushed mornings.",
        benefits: &["Calming", "Soft cleanse"],
    },
    Product {
        id: "sensitive-cleanser-3",
        name: "Colloidal Oat Cleanser",
        description: "Oat-buffered wash that comforts as it cleans.",
        benefits: &["Comforting", "Barrier kind"],
    },
    Product {
        id: "sensitive-cleanser-4",
        name: "Micellar Sensitive Water",
        description: "Rinse-free cleansing for days when water alone stings.",
        benefits: &["No-rinse", "Ultra gentle"],
    },
    Product {
        id: "sensitive-cleanser-5",
        name: "Ceramide Milk Cleanser",
        description: "Milky texture that never disturbs the acid mantle.",
        benefits: &["pH respectful", "Nourishing"],
    },
];

static SENSITIVE_TREATMENTS: [Product; 5] = [
    Product {
        id: "sensitive-treatment-1",
        name: "Centella Repair Serum",
        description: "Cica concentrate that visibly calms redness.",
        benefits: &["Redness relief", "Repair support"],
    },
    Product {
        id: "sensitive-treatment-2",
        name: "Panthenol 10% Ampoule",
        description: "High-dose B5 for compromised, stinging skin.",
        benefits: &["Intensive soothing", "Barrier recovery"],
    },
    Product {
        id: "sensitive-treatment-3",
        name: "Azelaic 5% Gentle Gel",
        description: "The rare active sensitive skin tends to tolerate.",
        benefits: &["Tone evening", "Low irritation"],
    },
    Product {
        id: "sensitive-treatment-4",
        name: "Beta-Glucan Essence",
        description: "Hydrating essence that strengthens skin's own defenses.",
        benefits: &["Resilience", "Deep hydration"],
    },
    Product {
        id: "sensitive-treatment-5",
        name: "SOS Soothing Mask",
        description: "Single-use hydrogel for reaction emergencies.",
        benefits: &["Rapid calm", "Cooling"],
    },
];

static SENSITIVE_MOISTURIZERS: [Product; 5] = [
    Product {
        id: "sensitive-moisturizer-1",
        name: "Barrier Repair Cream",
        description: "Ceramide-dominant cream tested on reactive skin.",
        benefits: &["Barrier repair", "Proven gentle"],
    },
    Product {
        id: "sensitive-moisturizer-2",
        name: "Minimalist Moisture Gel",
        description: "Nine ingredients, nothing fragranced, nothing essential-oil based.",
        benefits: &["Minimal formula", "Light comfort"],
    },
    Product {
        id: "sensitive-moisturizer-3",
        name: "Redness Neutral Cream",
        description: "Green-tinted soothing cream that visually offsets flush.",
        benefits: &["Visual calming", "Soothing"],
    },
    Product {
        id: "sensitive-moisturizer-4",
        name: "Thermal Rich Cream",
        description: "Spring-water cream for tight, weather-beaten days.",
        benefits: &["Weather shield", "Comfort"],
    },
    Product {
        id: "sensitive-moisturizer-5",
        name: "Overnight Calm Balm",
        description: "Night balm that lets irritated skin recover by morning.",
        benefits: &["Overnight recovery", "Occlusive care"],
    },
];

static SENSITIVE_SUNSCREENS: [Product; 5] = [
    Product {
        id: "sensitive-sunscreen-1",
        name: "Pure Mineral SPF 50",
        description: "Zinc-only filter, fragrance-free, for the most reactive skin.",
        benefits: &["Mineral only", "No irritation"],
    },
    Product {
        id: "sensitive-sunscreen-2",
        name: "Soothing Sun Cream",
        description: "Mineral SPF with centella for redness-prone days.",
        benefits: &["Calming", "Daily protection"],
    },
    Product {
        id: "sensitive-sunscreen-3",
        name: "Baby-Grade Sun Lotion",
        description: "Formulated to infant standards, gentle enough for eyelids.",
        benefits: &["Ultra gentle", "Family safe"],
    },
    Product {
        id: "sensitive-sunscreen-4",
        name: "No-Cast Mineral Fluid",
        description: "Modern micronized zinc without the chalky look.",
        benefits: &["Sheer mineral", "Comfortable"],
    },
    Product {
        id: "sensitive-sunscreen-5",
        name: "Barrier Sun Balm",
        description: "SPF balm that doubles as wind and cold protection.",
        benefits: &["Weather shield", "Nourishing"],
    },
];
