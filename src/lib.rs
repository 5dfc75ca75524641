//! tarot-mystic: a terminal tarot reader.
//!
//! Daily card, three-card spread and a deck browser over a fixed deck.

pub mod config;
pub mod deck;
pub mod draw;
pub mod error;
pub mod logging;
pub mod report;
pub mod session;
pub mod tui;
pub mod types;
