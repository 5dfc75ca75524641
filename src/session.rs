//! View-state controller: what is on screen right now.
//!
//! A `Session` is created when the view mounts and dropped when it goes
//! away. It owns the active section, the current reading and the daily
//! card cached at mount. All transitions are synchronous and total except
//! the three-card draw, which can hit the deck-size precondition.

use chrono::NaiveDate;
use rand::Rng;

use crate::deck::Deck;
use crate::draw::{self, DrawError};
use crate::types::{Card, Spread};

/// Which content block is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    /// Menu with the three reading options.
    #[default]
    Main,
    /// One or three drawn cards.
    Reading,
    /// The full deck browser.
    Deck,
}

/// A user trigger the controller knows how to handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    DrawDaily,
    DrawThree,
    Browse,
    Back,
    Reset,
}

/// Ephemeral per-mount state.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    section: Section,
    reading: Option<Spread>,
    daily: Spread,
}

impl Session {
    /// Mount the view: land on the menu and fix today's card.
    pub fn mount(deck: &Deck, today: NaiveDate) -> Self {
        let daily = draw::draw_daily(deck, today);

        tracing::info!(%today, daily_card = %daily.cards[0].name, "session mounted");

        Session {
            section: Section::Main,
            reading: None,
            daily,
        }
    }

    pub fn section(&self) -> Section {
        self.section
    }

    /// Cards currently displayed, empty outside a reading.
    pub fn selected_cards(&self) -> &[Card] {
        self.reading
            .as_ref()
            .map(|r| r.cards.as_slice())
            .unwrap_or_default()
    }

    /// The reading being displayed, if any.
    pub fn reading(&self) -> Option<&Spread> {
        self.reading.as_ref()
    }

    pub fn show_reading(&self) -> bool {
        self.reading.is_some()
    }

    /// Card cached for the lifetime of the session.
    pub fn daily_card(&self) -> &Card {
        // draw_daily always yields exactly one card
        &self.daily.cards[0]
    }

    // ------------------------------------------------------------------------
    // OPERATIONS
    // ------------------------------------------------------------------------

    /// Show the cached daily card.
    pub fn draw_daily(&mut self) {
        self.show(self.daily.clone());
    }

    /// Draw a fresh three-card spread. State is untouched on error.
    pub fn draw_three<R: Rng + ?Sized>(&mut self, deck: &Deck, rng: &mut R) -> Result<(), DrawError> {
        let spread = draw::draw_three(deck, rng)?;
        self.show(spread);
        Ok(())
    }

    pub fn go_to_deck(&mut self) {
        self.enter(Section::Deck);
    }

    /// Leave the deck browser without touching the selection.
    pub fn back(&mut self) {
        self.enter(Section::Main);
    }

    /// Clear the reading and return to the menu. Idempotent.
    pub fn reset(&mut self) {
        self.reading = None;
        self.enter(Section::Main);
    }

    /// Dispatch a trigger to the matching operation.
    pub fn apply<R: Rng + ?Sized>(
        &mut self,
        trigger: Trigger,
        deck: &Deck,
        rng: &mut R,
    ) -> Result<(), DrawError> {
        match trigger {
            Trigger::DrawDaily => self.draw_daily(),
            Trigger::DrawThree => self.draw_three(deck, rng)?,
            Trigger::Browse => self.go_to_deck(),
            Trigger::Back => self.back(),
            Trigger::Reset => self.reset(),
        }
        Ok(())
    }

    fn show(&mut self, spread: Spread) {
        tracing::info!(kind = ?spread.kind, cards = spread.cards.len(), "reading drawn");
        self.reading = Some(spread);
        self.enter(Section::Reading);
    }

    fn enter(&mut self, section: Section) {
        if self.section != section {
            tracing::debug!(from = ?self.section, to = ?section, "section change");
        }
        self.section = section;
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::tests::test_deck;
    use crate::types::SpreadKind;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 7).unwrap()
    }

    fn mounted() -> (Session, Deck) {
        let deck = test_deck(5);
        (Session::mount(&deck, today()), deck)
    }

    #[test]
    fn mount_lands_on_main_with_nothing_selected() {
        let (session, _) = mounted();
        assert_eq!(session.section(), Section::Main);
        assert!(session.selected_cards().is_empty());
        assert!(!session.show_reading());
    }

    #[test]
    fn mount_caches_daily_card_from_date() {
        let (session, _) = mounted();
        assert_eq!(session.daily_card().id, 3);
    }

    #[test]
    fn mount_agrees_with_draw_daily_late_in_month() {
        let deck = test_deck(5);
        for day in [29, 30, 31] {
            let date = NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
            let session = Session::mount(&deck, date);
            assert_eq!(session.daily_card(), &draw::draw_daily(&deck, date).cards[0]);
        }
        // 31 % 5 == 1
        let session = Session::mount(&deck, NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
        assert_eq!(session.daily_card().id, 2);
    }

    #[test]
    fn draw_daily_shows_cached_card() {
        let (mut session, _) = mounted();
        session.draw_daily();

        assert_eq!(session.section(), Section::Reading);
        assert!(session.show_reading());
        assert_eq!(session.selected_cards().len(), 1);
        assert_eq!(session.selected_cards()[0].id, 3);
        assert_eq!(session.reading().map(|r| r.kind), Some(SpreadKind::Daily));
    }

    #[test]
    fn draw_three_then_reset_round_trip() {
        let (mut session, deck) = mounted();
        let mut rng = StdRng::seed_from_u64(5);

        session.draw_three(&deck, &mut rng).unwrap();
        assert_eq!(session.section(), Section::Reading);
        assert_eq!(session.selected_cards().len(), 3);
        assert_eq!(session.reading().map(|r| r.kind), Some(SpreadKind::ThreeCard));

        session.reset();
        assert_eq!(session.section(), Section::Main);
        assert!(session.selected_cards().is_empty());
        assert!(!session.show_reading());
    }

    #[test]
    fn draw_three_replaces_previous_selection() {
        let (mut session, deck) = mounted();
        session.draw_daily();
        session
            .draw_three(&deck, &mut StdRng::seed_from_u64(1))
            .unwrap();
        assert_eq!(session.selected_cards().len(), 3);
    }

    #[test]
    fn failed_draw_leaves_state_untouched() {
        let deck = test_deck(2);
        let mut session = Session::mount(&deck, today());
        let before = session.clone();

        let result = session.draw_three(&deck, &mut StdRng::seed_from_u64(1));
        assert!(result.is_err());
        assert_eq!(session, before);
    }

    #[test]
    fn reset_is_idempotent() {
        let (mut session, _) = mounted();
        session.draw_daily();
        session.reset();
        let once = session.clone();
        session.reset();
        assert_eq!(session, once);
    }

    #[test]
    fn go_to_deck_then_reset_returns_to_main() {
        let (mut session, deck) = mounted();
        session
            .draw_three(&deck, &mut StdRng::seed_from_u64(3))
            .unwrap();
        session.go_to_deck();
        assert_eq!(session.section(), Section::Deck);

        session.reset();
        assert_eq!(session.section(), Section::Main);
        assert!(session.selected_cards().is_empty());
    }

    #[test]
    fn back_from_deck_returns_to_main() {
        let (mut session, _) = mounted();
        session.go_to_deck();
        session.back();
        assert_eq!(session.section(), Section::Main);
    }

    #[test]
    fn daily_card_survives_other_draws() {
        let (mut session, deck) = mounted();
        let daily = session.daily_card().clone();
        session
            .draw_three(&deck, &mut StdRng::seed_from_u64(8))
            .unwrap();
        session.reset();
        assert_eq!(session.daily_card(), &daily);
    }

    #[test]
    fn apply_dispatches_triggers() {
        let (mut session, deck) = mounted();
        let mut rng = StdRng::seed_from_u64(11);

        session.apply(Trigger::Browse, &deck, &mut rng).unwrap();
        assert_eq!(session.section(), Section::Deck);

        session.apply(Trigger::Back, &deck, &mut rng).unwrap();
        assert_eq!(session.section(), Section::Main);

        session.apply(Trigger::DrawThree, &deck, &mut rng).unwrap();
        assert_eq!(session.selected_cards().len(), 3);

        session.apply(Trigger::Reset, &deck, &mut rng).unwrap();
        assert!(session.selected_cards().is_empty());

        session.apply(Trigger::DrawDaily, &deck, &mut rng).unwrap();
        assert_eq!(session.selected_cards().len(), 1);
    }
}
