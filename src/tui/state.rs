//! TUI state algebra: pure types, zero effects.
//!
//! The session (section, reading, daily card) is owned by
//! [`crate::session::Session`]. `App` adds what only the terminal view
//! needs: the deck browser cursor, a status message and the quit flag.

use crate::deck::Deck;
use crate::session::{Section, Session, Trigger};

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug)]
pub struct App {
    /// The fixed deck for this run.
    pub deck: Deck,

    /// View-state controller.
    pub session: Session,

    /// Focused row in the deck browser.
    pub deck_cursor: usize,

    /// Last error to show in the footer, cleared on the next key.
    pub status: Option<String>,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

impl App {
    pub fn new(deck: Deck, session: Session) -> Self {
        App {
            deck,
            session,
            deck_cursor: 0,
            status: None,
            should_quit: false,
        }
    }

    pub fn section(&self) -> Section {
        self.session.section()
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
///
/// The effects layer maps key presses to Actions.
/// The transition function decides what each Action means per Section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move cursor up in the deck list.
    MoveUp,
    /// Move cursor down in the deck list.
    MoveDown,
    /// Menu choice by number (1-3).
    NumberKey(u8),
    /// Draw the card of the day.
    DrawDaily,
    /// Draw a three-card spread.
    DrawThree,
    /// Open the deck browser.
    OpenDeck,
    /// Navigate back one level.
    Back,
    /// Clear the reading and go home.
    Home,
    /// Quit the application.
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
///
/// The update function returns this; the effects boundary applies it.
/// Triggers go to the session, which may need the random source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Nothing changes.
    Stay,
    /// Hand a trigger to the session controller.
    Trigger(Trigger),
    /// Move the deck browser cursor.
    Cursor(usize),
    /// Quit the application.
    Quit,
}

// ============================================================================
// TESTS
// ============================================================================
