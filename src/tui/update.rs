//! Pure state transitions: (Section, Action) → Transition.
//!
//! Fully testable without a terminal. Each section defines which actions
//! it accepts. Unhandled actions are a no-op.

use crate::session::{Section, Trigger};

use super::state::{Action, Transition};

/// Pure state transition function.
///
/// `cursor` and `deck_len` describe the deck browser; other sections
/// ignore them.
pub fn update(section: Section, cursor: usize, deck_len: usize, action: Action) -> Transition {
    if action == Action::Quit {
        return Transition::Quit;
    }

    match section {
        Section::Main => update_main(action),
        Section::Reading => update_reading(action),
        Section::Deck => update_deck(cursor, deck_len, action),
    }
}

// ============================================================================
// PER-SECTION HANDLERS
// ============================================================================

/// Main menu: the three options, by number or by letter.
fn update_main(action: Action) -> Transition {
    match action {
        Action::NumberKey(1) | Action::DrawDaily => Transition::Trigger(Trigger::DrawDaily),
        Action::NumberKey(2) | Action::DrawThree => Transition::Trigger(Trigger::DrawThree),
        Action::NumberKey(3) | Action::OpenDeck => Transition::Trigger(Trigger::Browse),
        Action::Home => Transition::Trigger(Trigger::Reset),
        _ => Transition::Stay,
    }
}

/// Reading: the only way out is a new reading (reset).
fn update_reading(action: Action) -> Transition {
    match action {
        Action::Home | Action::Back => Transition::Trigger(Trigger::Reset),
        _ => Transition::Stay,
    }
}

/// Deck browser: cursor movement, back to menu, or home.
fn update_deck(cursor: usize, len: usize, action: Action) -> Transition {
    match action {
        Action::MoveUp => Transition::Cursor(cursor.saturating_sub(1)),
        Action::MoveDown => {
            let new_cursor = if len == 0 { 0 } else { (cursor + 1).min(len - 1) };
            Transition::Cursor(new_cursor)
        }
        Action::Back => Transition::Trigger(Trigger::Back),
        Action::Home => Transition::Trigger(Trigger::Reset),
        _ => Transition::Stay,
    }
}

// ============================================================================
// TESTS
// ============================================================================
