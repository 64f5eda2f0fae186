//! Unit tests for mana counting and land recommendations.

use super::*;

fn creature(mana_cost: &str, cmc: f64) -> CardRecord {
    CardRecord::new("Test Creature", "Creature — Human", cmc).with_mana_cost(mana_cost)
}

fn profile(w: u32, u: u32, b: u32, r: u32, g: u32) -> ManaProfile {
    let mut profile = ManaProfile::new();
    for (color, count) in Color::ALL.into_iter().zip([w, u, b, r, g]) {
        profile.set(color, count);
    }
    profile
}

mod count_mana_symbols_tests {
    use super::*;

    #[test]
    fn counts_color_letters() {
        assert_eq!(count_mana_symbols("{4}{W}{U}{B}{R}{G}"), profile(1, 1, 1, 1, 1));
    }

    #[test]
    fn ignores_generic_and_colorless() {
        assert_eq!(count_mana_symbols("{X}{C}{10}"), ManaProfile::new());
    }

    #[test]
    fn phyrexian_symbols_count_as_their_color() {
        assert_eq!(count_mana_symbols("{1}{G/P}{G/P}"), profile(0, 0, 0, 0, 2));
    }

    #[test]
    fn hybrid_symbols_are_not_counted() {
        assert_eq!(count_mana_symbols("{2/W}{R/W}{R/W}"), ManaProfile::new());
    }

    #[test]
    fn split_card_costs_count_both_halves() {
        assert_eq!(count_mana_symbols("{1}{R} // {2}{U}"), profile(0, 1, 0, 1, 0));
    }

    #[test]
    fn sum_equals_number_of_color_tokens() {
        let cost = "{2}{W}{W}{U}{B/P}{S}";
        assert_eq!(count_mana_symbols(cost).total(), 4);
    }
}

mod mana_profile_tests {
    use super::*;

    #[test]
    fn white_weenie() {
        let card = creature("{1}{W}{W}", 3.0);
        let profile = mana_profile(&card).unwrap();
        assert_eq!(profile.get(Color::White), 2);
        assert_eq!(profile.total(), 2);
    }

    #[test]
    fn basic_land_contributes_nothing() {
        let card = CardRecord::new("Plains", "Basic Land - Plains", 0.0);
        assert_eq!(mana_profile(&card), None);
    }

    #[test]
    fn land_creature_with_cost_contributes_nothing() {
        let card = CardRecord::new("Dryad Arbor", "Land Creature — Forest Dryad", 1.0)
            .with_mana_cost("{G}");
        assert_eq!(mana_profile(&card), None);
    }

    #[test]
    fn zero_cost_spell_contributes_nothing() {
        let card = CardRecord::new("Ornithopter", "Artifact Creature — Thopter", 0.0)
            .with_mana_cost("{0}");
        assert_eq!(mana_profile(&card), None);
    }

    #[test]
    fn colorless_spell_contributes_empty_profile() {
        let card = CardRecord::new("Sol Ring", "Artifact", 1.0).with_mana_cost("{1}");
        assert_eq!(mana_profile(&card), Some(ManaProfile::new()));
    }

    #[test]
    fn missing_mana_cost_counts_nothing() {
        let card = CardRecord::new("Ancestral Vision", "Sorcery", 1.0);
        assert_eq!(mana_profile(&card), Some(ManaProfile::new()));
    }
}

mod color_counts_tests {
    use super::*;

    #[test]
    fn add_and_scale() {
        let mut totals = profile(1, 0, 0, 0, 2);
        totals.add(&profile(1, 1, 0, 0, 0).scaled(3));
        assert_eq!(totals, profile(4, 3, 0, 0, 2));
    }

    #[test]
    fn arithmetic_saturates() {
        let mut totals = profile(u32::MAX, 1, 0, 0, 0).scaled(2);
        assert_eq!(totals, profile(u32::MAX, 2, 0, 0, 0));

        totals.add(&profile(1, 0, 0, 0, 0));
        totals.increment(Color::White);
        assert_eq!(totals.get(Color::White), u32::MAX);
        assert_eq!(totals.total(), u32::MAX);
    }

    #[test]
    fn serializes_by_symbol() {
        let json = serde_json::to_string(&profile(2, 0, 0, 1, 0)).unwrap();
        assert_eq!(json, r#"{"W":2,"U":0,"B":0,"R":1,"G":0}"#);
    }

    #[test]
    fn color_names() {
        assert_eq!(Color::Blue.basic_land(), "Island");
        assert_eq!(Color::Blue.basic_land_plural(), "Islands");
        assert_eq!(Color::White.basic_land_plural(), "Plains");
        assert_eq!(Color::from_symbol("G"), Some(Color::Green));
        assert_eq!(Color::from_symbol("C"), None);
    }
}

mod recommend_lands_tests {
    use super::*;

    #[test]
    fn even_split() {
        let rec = recommend_lands(&profile(2, 2, 0, 0, 0), 60, 100).unwrap();
        assert_eq!(rec.open_slots, 40);
        assert_eq!(rec.percentages, profile(50, 50, 0, 0, 0));
        assert_eq!(rec.lands, profile(20, 20, 0, 0, 0));
        assert_eq!(rec.total_lands(), 40);
    }

    #[test]
    fn percentages_round_half_to_even() {
        // 1/8 = 12.5% -> 12, 7/8 = 87.5% -> 88
        let rec = recommend_lands(&profile(1, 7, 0, 0, 0), 63, 100).unwrap();
        assert_eq!(rec.percentages, profile(12, 88, 0, 0, 0));
        // 0.12 * 37 = 4.44 -> 4, 0.88 * 37 = 32.56 -> 33
        assert_eq!(rec.lands, profile(4, 33, 0, 0, 0));
    }

    #[test]
    fn percentages_may_not_sum_to_hundred() {
        let rec = recommend_lands(&profile(1, 1, 1, 0, 0), 64, 100).unwrap();
        assert_eq!(rec.percentages, profile(33, 33, 33, 0, 0));
        assert_eq!(rec.lands, profile(12, 12, 12, 0, 0));
    }

    #[test]
    fn respects_target_deck_size() {
        let rec = recommend_lands(&profile(0, 0, 0, 3, 1), 40, 60).unwrap();
        assert_eq!(rec.open_slots, 20);
        assert_eq!(rec.lands, profile(0, 0, 0, 15, 5));
    }

    #[test]
    fn oversized_deck_recommends_no_lands() {
        let rec = recommend_lands(&profile(3, 1, 0, 0, 0), 105, 100).unwrap();
        assert_eq!(rec.open_slots, -5);
        assert_eq!(rec.lands, ColorCounts::new());
        assert_eq!(rec.recommended().count(), 0);
    }

    #[test]
    fn no_colored_symbols_is_an_error() {
        let result = recommend_lands(&ManaProfile::new(), 60, 100);
        assert!(matches!(result, Err(DeckError::NoManaData)));
    }

    #[test]
    fn recommended_skips_zero_colors() {
        let rec = recommend_lands(&profile(0, 1, 0, 0, 1), 60, 100).unwrap();
        let colors: Vec<(Color, u32)> = rec.recommended().collect();
        assert_eq!(colors, vec![(Color::Blue, 20), (Color::Green, 20)]);
    }
}
