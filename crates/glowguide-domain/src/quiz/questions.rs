use crate::quiz::TestKind;

/// One selectable answer, scored on an oiliness scale of 1 (driest) to 4.
#[derive(Debug, Clone, Copy)]
pub struct QuizOption {
    pub id: &'static str,
    pub text: &'static str,
    pub points: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct QuizQuestion {
    pub key: &'static str,
    pub prompt: &'static str,
    pub options: [QuizOption; 4],
}

/// Static question bank for a quiz. Every quiz asks exactly two questions,
/// so the maximum total is 8 points.
pub fn questions_for(kind: TestKind) -> &'static [QuizQuestion; 2] {
    match kind {
        TestKind::Test1 => &TEST1_QUESTIONS,
        TestKind::Test2 => &TEST2_QUESTIONS,
        TestKind::Test3 => &TEST3_QUESTIONS,
    }
}

static TEST1_QUESTIONS: [QuizQuestion; 2] = [
    QuizQuestion {
        key: "oiliness",
        prompt: "How does your skin feel by midday?",
        options: [
            QuizOption {
                id: "oiliness_tight",
                text: "Tight and dry, sometimes flaky",
                points: 1,
            },
            QuizOption {
                id: "oiliness_comfortable",
                text: "Comfortable, neither oily nor dry",
                points: 2,
            },
            QuizOption {
                id: "oiliness_tzone",
                text: "Shiny in the T-zone only",
                points: 3,
            },
            QuizOption {
                id: "oiliness_all_over",
                text: "Shiny and greasy all over",
                points: 4,
            },
        ],
    },
    QuizQuestion {
        key: "appearance",
        prompt: "How do your pores look in the mirror?",
        options: [
            QuizOption {
                id: "appearance_invisible",
                text: "Barely visible anywhere",
                points: 1,
            },
            QuizOption {
                id: "appearance_small",
                text: "Small, only visible up close",
                points: 2,
            },
            QuizOption {
                id: "appearance_nose",
                text: "Noticeable around the nose and chin",
                points: 3,
            },
            QuizOption {
                id: "appearance_enlarged",
                text: "Enlarged across most of my face",
                points: 4,
            },
        ],
    },
];

static TEST2_QUESTIONS: [QuizQuestion; 2] = [
    QuizQuestion {
        key: "after_cleansing",
        prompt: "How does your skin feel an hour after cleansing, with nothing applied?",
        options: [
            QuizOption {
                id: "cleansing_tight",
                text: "Tight, rough, or itchy",
                points: 1,
            },
            QuizOption {
                id: "cleansing_fine",
                text: "Fine, I barely notice it",
                points: 2,
            },
            QuizOption {
                id: "cleansing_mixed",
                text: "Oily on the forehead and nose, fine elsewhere",
                points: 3,
            },
            QuizOption {
                id: "cleansing_oily",
                text: "Already getting oily again",
                points: 4,
            },
        ],
    },
    QuizQuestion {
        key: "blotting",
        prompt: "If you press a tissue to your face mid-afternoon, what do you see?",
        options: [
            QuizOption {
                id: "blotting_nothing",
                text: "Nothing, the tissue stays dry",
                points: 1,
            },
            QuizOption {
                id: "blotting_trace",
                text: "A faint trace of oil",
                points: 2,
            },
            QuizOption {
                id: "blotting_center",
                text: "Oil from the center of my face",
                points: 3,
            },
            QuizOption {
                id: "blotting_soaked",
                text: "Visible oil from everywhere I press",
                points: 4,
            },
        ],
    },
];

static TEST3_QUESTIONS: [QuizQuestion; 2] = [
    QuizQuestion {
        key: "evening_feel",
        prompt: "By the end of the day, how does your skin usually feel?",
        options: [
            QuizOption {
                id: "evening_parched",
                text: "Parched, I want to moisturize immediately",
                points: 1,
            },
            QuizOption {
                id: "evening_normal",
                text: "About the same as the morning",
                points: 2,
            },
            QuizOption {
                id: "evening_shiny_zones",
                text: "Shiny in patches, dull in others",
                points: 3,
            },
            QuizOption {
                id: "evening_greasy",
                text: "Greasy enough that makeup slides off",
                points: 4,
            },
        ],
    },
    QuizQuestion {
        key: "absorption",
        prompt: "How does your skin take to moisturizer?",
        options: [
            QuizOption {
                id: "absorption_drinks",
                text: "Drinks it in and could take more",
                points: 1,
            },
            QuizOption {
                id: "absorption_even",
                text: "Absorbs evenly within a minute",
                points: 2,
            },
            QuizOption {
                id: "absorption_slow_tzone",
                text: "Sits on my T-zone but absorbs elsewhere",
                points: 3,
            },
            QuizOption {
                id: "absorption_sits",
                text: "Sits on top and feels heavy",
                points: 4,
            },
        ],
    },
];
