//! Card drawing: the daily card and the three-card spread.
//!
//! Pure functions over an injected date and random source. No clock reads,
//! no global generator.

use chrono::{Datelike, NaiveDate};
use rand::Rng;
use rand::seq::index;
use thiserror::Error;

use crate::deck::Deck;
use crate::types::{Spread, SpreadKind};

/// Cards in a past/present/future spread.
pub const THREE_CARD_COUNT: usize = 3;

/// Precondition failures when drawing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrawError {
    #[error("spread needs {needed} cards but the deck has only {available}")]
    TooFewCards { needed: usize, available: usize },
}

/// Index of the daily card: day of month modulo deck size.
///
/// Different days may land on the same card; that is expected.
pub fn daily_index(deck: &Deck, date: NaiveDate) -> usize {
    date.day() as usize % deck.len()
}

/// Draw the card of the day.
///
/// Deterministic: any two dates sharing a day of month give the same card.
pub fn draw_daily(deck: &Deck, date: NaiveDate) -> Spread {
    let card = deck.cards()[daily_index(deck, date)].clone();
    tracing::debug!(%date, card_id = card.id, "daily card");

    Spread {
        kind: SpreadKind::Daily,
        cards: vec![card],
    }
}

/// Draw three distinct cards, in past/present/future order.
///
/// Sampling is uniform without replacement; `index::sample` returns a
/// fully shuffled selection, so each card is equally likely in each slot.
pub fn draw_three<R: Rng + ?Sized>(deck: &Deck, rng: &mut R) -> Result<Spread, DrawError> {
    if deck.len() < THREE_CARD_COUNT {
        return Err(DrawError::TooFewCards {
            needed: THREE_CARD_COUNT,
            available: deck.len(),
        });
    }

    let cards: Vec<_> = index::sample(rng, deck.len(), THREE_CARD_COUNT)
        .into_iter()
        .map(|i| deck.cards()[i].clone())
        .collect();

    tracing::debug!(
        card_ids = ?cards.iter().map(|c| c.id).collect::<Vec<_>>(),
        "three-card spread"
    );

    Ok(Spread {
        kind: SpreadKind::ThreeCard,
        cards,
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::tests::test_deck;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::{HashMap, HashSet};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    // -- Daily --

    #[test]
    fn day_seven_of_five_card_deck_is_third_card() {
        let deck = test_deck(5);
        let spread = draw_daily(&deck, date(2024, 3, 7));
        assert_eq!(spread.kind, SpreadKind::Daily);
        assert_eq!(spread.cards.len(), 1);
        assert_eq!(spread.cards[0].id, 3);
    }

    #[test]
    fn same_day_of_month_gives_same_card() {
        let deck = Deck::builtin();
        let a = draw_daily(&deck, date(2023, 1, 14));
        let b = draw_daily(&deck, date(2025, 11, 14));
        assert_eq!(a, b);
    }

    #[test]
    fn colliding_days_are_accepted() {
        // 2 mod 5 == 7 mod 5
        let deck = test_deck(5);
        let a = draw_daily(&deck, date(2024, 6, 2));
        let b = draw_daily(&deck, date(2024, 6, 7));
        assert_eq!(a.cards[0].id, b.cards[0].id);
    }

    #[test]
    fn month_end_days_wrap_around_deck() {
        let deck = test_deck(5);
        // 29, 30, 31 mod 5 -> indices 4, 0, 1
        assert_eq!(draw_daily(&deck, date(2024, 1, 29)).cards[0].id, 5);
        assert_eq!(draw_daily(&deck, date(2024, 4, 30)).cards[0].id, 1);
        assert_eq!(draw_daily(&deck, date(2024, 12, 31)).cards[0].id, 2);
    }

    #[test]
    fn daily_works_on_single_card_deck() {
        let deck = test_deck(1);
        assert_eq!(draw_daily(&deck, date(2024, 2, 29)).cards[0].id, 1);
    }

    // -- Three card --

    #[test]
    fn three_card_spread_is_distinct_members() {
        let deck = test_deck(5);
        let mut rng = StdRng::seed_from_u64(7);
        let spread = draw_three(&deck, &mut rng).unwrap();

        assert_eq!(spread.kind, SpreadKind::ThreeCard);
        assert_eq!(spread.cards.len(), 3);
        let ids: HashSet<u32> = spread.cards.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), 3);
        assert!(spread.cards.iter().all(|c| deck.cards().contains(c)));
    }

    #[test]
    fn three_card_on_exactly_three_uses_whole_deck() {
        let deck = test_deck(3);
        let mut rng = StdRng::seed_from_u64(1);
        let spread = draw_three(&deck, &mut rng).unwrap();
        let mut ids: Vec<u32> = spread.cards.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn three_card_fails_fast_on_small_deck() {
        let deck = test_deck(2);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            draw_three(&deck, &mut rng),
            Err(DrawError::TooFewCards {
                needed: 3,
                available: 2
            })
        );
    }

    #[test]
    fn same_seed_gives_same_spread() {
        let deck = Deck::builtin();
        let a = draw_three(&deck, &mut StdRng::seed_from_u64(99)).unwrap();
        let b = draw_three(&deck, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn thousand_draws_are_always_valid() {
        let deck = test_deck(5);
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..1000 {
            let spread = draw_three(&deck, &mut rng).unwrap();
            assert_eq!(spread.cards.len(), 3);
            let ids: HashSet<u32> = spread.cards.iter().map(|c| c.id).collect();
            assert_eq!(ids.len(), 3, "duplicate card in {:?}", ids);
        }
    }

    #[test]
    fn positions_are_roughly_uniform() {
        const TRIALS: usize = 20_000;
        let deck = test_deck(5);
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts: HashMap<(usize, u32), usize> = HashMap::new();

        for _ in 0..TRIALS {
            let spread = draw_three(&deck, &mut rng).unwrap();
            for (pos, card) in spread.cards.iter().enumerate() {
                *counts.entry((pos, card.id)).or_default() += 1;
            }
        }

        // Expected 4000 per (position, card); allow 10% drift.
        let expected = TRIALS / deck.len();
        for pos in 0..THREE_CARD_COUNT {
            for card in deck.cards() {
                let n = counts.get(&(pos, card.id)).copied().unwrap_or(0);
                assert!(
                    n.abs_diff(expected) < expected / 10,
                    "card {} at position {} seen {} times",
                    card.id,
                    pos,
                    n
                );
            }
        }
    }
}
