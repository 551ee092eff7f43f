#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use crate::skin_type::SkinType;

    const ALL_TYPES: [SkinType; 5] = [
        SkinType::Oily,
        SkinType::Dry,
        SkinType::Combination,
        SkinType::Normal,
        SkinType::Sensitive,
    ];

    #[test]
    fn test_from_str_round_trips() {
        for skin_type in ALL_TYPES {
            assert_eq!(SkinType::from_str(skin_type.as_str()).unwrap(), skin_type);
        }
        assert_eq!(SkinType::from_str("OILY").unwrap(), SkinType::Oily);
        assert!(SkinType::from_str("glowing").is_err());
    }

    #[test]
    fn test_serde_uses_lowercase_tags() {
        let json = serde_json::to_string(&SkinType::Combination).unwrap();
        assert_eq!(json, "\"combination\"");

        let parsed: SkinType = serde_json::from_str("\"sensitive\"").unwrap();
        assert_eq!(parsed, SkinType::Sensitive);
    }

    #[test]
    fn test_every_type_has_exactly_three_signs() {
        for skin_type in ALL_TYPES {
            let display = skin_type.display_data();
            assert_eq!(display.signs.len(), 3, "{skin_type} should have 3 signs");
            assert!(!display.title.is_empty());
            assert!(!display.description.is_empty());
            assert!(!display.explanation.is_empty());
            assert!(display.color.starts_with('#'));
        }
    }

    #[test]
    fn test_titles_are_distinct() {
        let titles: std::collections::HashSet<String> =
            ALL_TYPES.iter().map(|t| t.display_data().title).collect();
        assert_eq!(titles.len(), ALL_TYPES.len());
    }
}
