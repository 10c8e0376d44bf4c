//! Property-based tests for the match engine and shuffle.
//!
//! These tests use proptest to verify invariants hold across
//! random decks and random flip sequences.

use memory_match::{FisherYates, FlipOutcome, MemoryMatch, ShuffleStrategy};
use proptest::prelude::*;

prop_compose! {
    /// A deck of `pairs` pairs, values `0..pairs` each appearing twice.
    fn arbitrary_deck()(pairs in 1..8usize) -> Vec<u8> {
        (0..pairs * 2).map(|i| (i / 2) as u8).collect()
    }
}

prop_compose! {
    fn deck_and_flips()(deck in arbitrary_deck())
        (flips in prop::collection::vec(0..deck.len(), 0..64), deck in Just(deck))
        -> (Vec<u8>, Vec<usize>) {
        (deck, flips)
    }
}

proptest! {
    #[test]
    fn shuffle_is_a_permutation(seed in any::<u64>(), len in 0..64usize) {
        let mut data: Vec<usize> = (0..len).collect();
        FisherYates::new(seed).shuffle(&mut data);

        let mut sorted = data.clone();
        sorted.sort_unstable();
        prop_assert_eq!(sorted, (0..len).collect::<Vec<_>>());
    }

    #[test]
    fn shuffle_moves_every_card(seed in any::<u64>(), len in 2..64usize) {
        let mut data: Vec<usize> = (0..len).collect();
        FisherYates::new(seed).shuffle(&mut data);

        for (pos, value) in data.iter().enumerate() {
            prop_assert_ne!(pos, *value);
        }
    }

    #[test]
    fn selection_never_persists_two_cards((deck, flips) in deck_and_flips(), seed in any::<u64>()) {
        let mut game = MemoryMatch::builder(deck).seed(seed).build();

        for index in flips {
            game.flip_card(index).unwrap();
            let revealed = game.revealed();

            prop_assert!(revealed.len() <= 1);
            for i in &revealed {
                prop_assert!(!game.is_matched(*i));
            }
        }
    }

    #[test]
    fn matched_set_grows_by_pairs((deck, flips) in deck_and_flips(), seed in any::<u64>()) {
        let mut game = MemoryMatch::builder(deck).seed(seed).build();
        let mut previous = game.matched();

        for index in flips {
            let outcome = game.flip_card(index).unwrap();
            let current = game.matched();

            prop_assert!(previous.is_subset(&current));
            prop_assert_eq!(current.len() % 2, 0);

            match outcome {
                FlipOutcome::Matched { first, second, .. } => {
                    prop_assert_eq!(current.len(), previous.len() + 2);
                    prop_assert!(current.contains(&first) && current.contains(&second));
                    prop_assert_eq!(game.card(first), game.card(second));
                }
                FlipOutcome::Mismatched { first, second } => {
                    prop_assert_eq!(current.len(), previous.len());
                    prop_assert_ne!(game.card(first), game.card(second));
                }
                _ => {
                    prop_assert_eq!(current.len(), previous.len());
                }
            }

            previous = current;
        }
    }

    #[test]
    fn game_over_iff_all_matched((deck, flips) in deck_and_flips(), seed in any::<u64>()) {
        let mut game = MemoryMatch::builder(deck).seed(seed).build();
        prop_assert!(!game.is_game_over());

        for index in flips {
            game.flip_card(index).unwrap();
            prop_assert_eq!(game.is_game_over(), game.matched().len() == game.len());
        }
    }

    #[test]
    fn ignored_flips_change_nothing((deck, flips) in deck_and_flips(), seed in any::<u64>()) {
        let mut game = MemoryMatch::builder(deck).seed(seed).build();

        for index in flips {
            let revealed = game.revealed();
            let matched = game.matched();
            let over = game.is_game_over();

            if game.flip_card(index).unwrap().is_ignored() {
                prop_assert_eq!(game.revealed(), revealed);
                prop_assert_eq!(game.matched(), matched);
                prop_assert_eq!(game.is_game_over(), over);
            }
        }
    }

    #[test]
    fn reset_restores_initial_state((deck, flips) in deck_and_flips(), seed in any::<u64>()) {
        let mut game = MemoryMatch::builder(deck.clone()).seed(seed).build();

        for index in flips {
            game.flip_card(index).unwrap();
        }
        game.reset_game();

        prop_assert!(game.revealed().is_empty());
        prop_assert!(game.matched().is_empty());
        prop_assert!(!game.is_game_over());

        let mut cards = game.cards();
        cards.sort_unstable();
        prop_assert_eq!(cards, deck);
    }

    #[test]
    fn solving_in_order_ends_the_game(deck in arbitrary_deck(), seed in any::<u64>()) {
        let mut game = MemoryMatch::builder(deck).seed(seed).build();
        let cards = game.cards();

        for first in 0..cards.len() {
            if game.is_matched(first) {
                continue;
            }
            let partner = (first + 1..cards.len())
                .find(|&i| cards[i] == cards[first] && !game.is_matched(i))
                .unwrap();

            game.flip_card(first).unwrap();
            game.flip_card(partner).unwrap();
        }

        prop_assert!(game.is_game_over());
        prop_assert_eq!(game.pairs_found(), cards.len() / 2);
    }

    #[test]
    fn out_of_range_is_rejected(deck in arbitrary_deck(), extra in 0..16usize) {
        let mut game = MemoryMatch::builder(deck).seed(1).build();
        let index = game.len() + extra;

        prop_assert!(game.flip_card(index).is_err());
        prop_assert!(game.revealed().is_empty());
    }
}
