//! Deck source resolution.
//!
//! Precedence: explicit `--deck` path, then the user config file, then
//! the built-in deck. A missing config file is not an error; a present
//! but broken one is.

use std::path::{Path, PathBuf};

use crate::deck::{Deck, DeckError};

/// Where the active deck came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckSource {
    /// Path given on the command line.
    Explicit(PathBuf),
    /// `deck.json` in the user config directory.
    UserConfig(PathBuf),
    /// Compiled-in Major Arcana.
    Builtin,
}

impl std::fmt::Display for DeckSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeckSource::Explicit(p) => write!(f, "{}", p.display()),
            DeckSource::UserConfig(p) => write!(f, "{} (user config)", p.display()),
            DeckSource::Builtin => write!(f, "built-in deck"),
        }
    }
}

/// Default user deck location, e.g. `~/.config/tarot-mystic/deck.json`.
///
/// Falls back to the current directory if no config dir is available.
pub fn default_deck_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tarot-mystic")
        .join("deck.json")
}

/// Pick the deck source without reading any file.
pub fn resolve_source(explicit: Option<PathBuf>, user_config: &Path) -> DeckSource {
    match explicit {
        Some(path) => DeckSource::Explicit(path),
        None if user_config.exists() => DeckSource::UserConfig(user_config.to_path_buf()),
        None => DeckSource::Builtin,
    }
}

/// Load the deck from a resolved source.
pub fn load_deck(source: &DeckSource) -> Result<Deck, DeckError> {
    let deck = match source {
        DeckSource::Explicit(path) | DeckSource::UserConfig(path) => Deck::load(path)?,
        DeckSource::Builtin => Deck::builtin(),
    };

    tracing::info!(source = %source, cards = deck.len(), "deck loaded");
    Ok(deck)
}

// ============================================================================
// TESTS
// ============================================================================
