//! Unit tests for token and emblem detection.

use super::*;

fn extract(text: &str) -> Vec<TokenMatch> {
    PatternTokenExtractor.extract("Test Card", Some(text))
}

mod creature_token_tests {
    use super::*;

    #[test]
    fn excerpt_starts_at_power_toughness() {
        let matches = extract("Create a 3/3 green Beast creature token.");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].kind, Some(TokenKind::Creature));
        assert_eq!(matches[0].excerpt, "3/3 green Beast creature token.");
        assert_eq!(matches[0].card_name, "Test Card");
    }

    #[test]
    fn multi_word_subtypes_and_plural() {
        let matches = extract(
            "When this enters, create two 1/1 colorless Thopter artifact creature tokens with flying.",
        );
        assert_eq!(matches.len(), 1);
        assert_eq!(
            matches[0].excerpt,
            "1/1 colorless Thopter artifact creature tokens with flying."
        );
    }

    #[test]
    fn excerpt_stops_at_end_of_line() {
        let matches = extract("Create a 2/2 green Frog Lizard creature token.\nFlying");
        assert_eq!(matches[0].excerpt, "2/2 green Frog Lizard creature token.");
    }

    #[test]
    fn pump_effects_are_not_tokens() {
        assert!(extract("Target creature gets +3/+3 until end of turn.").is_empty());
    }
}

mod other_token_tests {
    use super::*;

    #[test]
    fn named_token_type() {
        let matches = extract("Whenever you cast a spell, create a Treasure token.");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].kind, Some(TokenKind::Other));
        assert_eq!(matches[0].excerpt, "Treasure token");
    }

    #[test]
    fn creature_token_is_not_reported_twice() {
        let matches = extract("Create a 1/1 white Soldier creature token.");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].kind, Some(TokenKind::Creature));
    }

    #[test]
    fn determiners_are_skipped() {
        assert!(extract("Sacrifice the token at the beginning of the next end step.").is_empty());
        assert!(extract("Exile target token.").is_empty());
    }

    #[test]
    fn copy_token_is_not_a_token_type() {
        let text = "Sacrifice that copy token at the beginning of the next end step.";
        assert!(extract(text).is_empty());

        let matches = extract("Exile the copy token, then create a Treasure token.");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].excerpt, "Treasure token");
    }

    #[test]
    fn first_named_token_wins() {
        let matches = extract("Create a Food token. Then create a Clue token.");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].excerpt, "Food token");
    }
}

mod emblem_tests {
    use super::*;

    #[test]
    fn emblem_clause() {
        let matches = extract("−6: You get an emblem with \"Spells you cast cost {B} less.\"");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].kind, Some(TokenKind::Emblem));
        assert_eq!(
            matches[0].excerpt,
            "emblem with \"Spells you cast cost {B} less.\""
        );
    }
}

#[test]
fn categories_are_reported_in_fixed_order() {
    let text = "+1: Create a Clue token.\n\
                −2: Create a 2/2 black Zombie creature token.\n\
                −7: You get an emblem with \"Zombies you control get +1/+1.\"";
    let kinds: Vec<Option<TokenKind>> = extract(text).iter().map(|m| m.kind).collect();
    assert_eq!(
        kinds,
        vec![
            Some(TokenKind::Creature),
            Some(TokenKind::Other),
            Some(TokenKind::Emblem)
        ]
    );
}

#[test]
fn extraction_is_deterministic() {
    let text = "Create a 2/2 black Zombie creature token and a Treasure token.";
    assert_eq!(extract(text), extract(text));
    assert_eq!(extract(text).len(), 2);
}

#[test]
fn missing_or_empty_text_yields_nothing() {
    assert!(PatternTokenExtractor.extract("Plains", None).is_empty());
    assert!(PatternTokenExtractor.extract("Vanilla", Some("")).is_empty());
    assert!(extract("Flying, vigilance").is_empty());
}

#[test]
fn empty_deck_result_becomes_placeholder() {
    let rows = or_no_tokens(Vec::new());
    assert_eq!(rows.len(), 1);
    assert!(rows[0].is_none());
    assert_eq!(rows[0].card_name, "None");
    assert_eq!(rows[0].excerpt, "None");
}

#[test]
fn non_empty_result_is_unchanged() {
    let found = vec![TokenMatch::new(
        "Pia Nalaar",
        "1/1 colorless Thopter artifact creature token with flying.",
        TokenKind::Creature,
    )];
    assert_eq!(or_no_tokens(found.clone()), found);
}
