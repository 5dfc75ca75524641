//! The card deck: built-in data plus validated construction.
//!
//! A `Deck` is non-empty and its ids are unique. Both invariants are
//! checked once, at construction; everything downstream relies on them.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::types::Card;

/// Suit shared by every built-in card.
pub const MAJOR_ARCANA: &str = "Старшие Арканы";

/// Errors from building or loading a deck.
#[derive(Debug, Error)]
pub enum DeckError {
    #[error("deck has no cards")]
    Empty,

    #[error("duplicate card id {0}")]
    DuplicateId(u32),

    #[error("failed to read deck file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse deck file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Fixed, ordered, non-empty collection of cards with unique ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build a deck, rejecting empty input and repeated ids.
    pub fn new(cards: Vec<Card>) -> Result<Self, DeckError> {
        if cards.is_empty() {
            return Err(DeckError::Empty);
        }

        let mut seen = HashSet::with_capacity(cards.len());
        for card in &cards {
            if !seen.insert(card.id) {
                return Err(DeckError::DuplicateId(card.id));
            }
        }

        Ok(Deck { cards })
    }

    /// The five Major Arcana the reader ships with.
    pub fn builtin() -> Self {
        Deck {
            cards: builtin_cards(),
        }
    }

    /// Load a deck from a JSON array of cards.
    pub fn load(path: &Path) -> Result<Self, DeckError> {
        let content = fs::read_to_string(path).map_err(|e| DeckError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        let cards: Vec<Card> = serde_json::from_str(&content).map_err(|e| DeckError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        Deck::new(cards)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false for a constructed deck.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }
}

// ============================================================================
// BUILT-IN DATA
// ============================================================================

fn card(id: u32, name: &str, meaning: &str, description: &str, keywords: [&str; 4]) -> Card {
    Card {
        id,
        name: name.to_string(),
        suit: MAJOR_ARCANA.to_string(),
        meaning: meaning.to_string(),
        description: description.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        reversed: false,
    }
}

fn builtin_cards() -> Vec<Card> {
    vec![
        card(
            1,
            "Дурак",
            "Новые начинания, спонтанность, свобода",
            "Карта новых возможностей и неожиданных путей. Призывает к принятию решений сердцем.",
            ["начало", "свобода", "риск", "доверие"],
        ),
        card(
            2,
            "Маг",
            "Сила воли, концентрация, мастерство",
            "Символ личной силы и способности воплощать идеи в реальность.",
            ["воля", "действие", "мастерство", "фокус"],
        ),
        card(
            3,
            "Верховная Жрица",
            "Интуиция, мудрость, тайные знания",
            "Карта глубокой интуиции и скрытой мудрости. Призывает прислушаться к внутреннему голосу.",
            ["интуиция", "мудрость", "тайна", "подсознание"],
        ),
        card(
            4,
            "Императрица",
            "Творчество, плодородие, материнство",
            "Символ творческой энергии и изобилия во всех сферах жизни.",
            ["творчество", "изобилие", "забота", "рост"],
        ),
        card(
            5,
            "Император",
            "Власть, стабильность, контроль",
            "Карта лидерства и структуры. Символизирует порядок и авторитет.",
            ["власть", "порядок", "стабильность", "контроль"],
        ),
    ]
}

// ============================================================================
// TESTS
// ============================================================================
