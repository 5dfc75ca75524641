//! Domain types for tarot-mystic.

use serde::{Deserialize, Serialize};

// ============================================================================
// CARDS
// ============================================================================

/// A single tarot card. Immutable once the deck is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique within a deck.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Grouping label ("Старшие Арканы" for the built-in deck).
    pub suit: String,
    /// Short interpretation.
    pub meaning: String,
    /// Longer interpretation.
    pub description: String,
    /// Ordered keywords, most important first.
    pub keywords: Vec<String>,
    /// Orientation flag. Carried in the data, never set by any logic.
    #[serde(default)]
    pub reversed: bool,
}

// ============================================================================
// SPREADS
// ============================================================================

/// Which kind of reading produced a spread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpreadKind {
    /// One card, keyed by calendar day.
    Daily,
    /// Past, present, future.
    ThreeCard,
}

/// Positional meaning inside a three-card spread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpreadPosition {
    Past,
    Present,
    Future,
}

impl SpreadPosition {
    /// Positions in draw order.
    pub const ALL: [SpreadPosition; 3] = [
        SpreadPosition::Past,
        SpreadPosition::Present,
        SpreadPosition::Future,
    ];

    /// Position for the card at `index` in a three-card spread.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            SpreadPosition::Past => "Прошлое",
            SpreadPosition::Present => "Настоящее",
            SpreadPosition::Future => "Будущее",
        }
    }
}

/// Cards drawn for one reading, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Spread {
    pub kind: SpreadKind,
    pub cards: Vec<Card>,
}

impl Spread {
    /// Position label for the card at `index`, if the spread has positions.
    ///
    /// Daily spreads are unlabelled.
    pub fn position(&self, index: usize) -> Option<SpreadPosition> {
        match self.kind {
            SpreadKind::Daily => None,
            SpreadKind::ThreeCard => SpreadPosition::from_index(index),
        }
    }
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Output format for non-interactive commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable pretty output.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_follow_past_present_future() {
        assert_eq!(SpreadPosition::from_index(0), Some(SpreadPosition::Past));
        assert_eq!(SpreadPosition::from_index(1), Some(SpreadPosition::Present));
        assert_eq!(SpreadPosition::from_index(2), Some(SpreadPosition::Future));
        assert_eq!(SpreadPosition::from_index(3), None);
    }

    #[test]
    fn daily_spread_has_no_positions() {
        let spread = Spread {
            kind: SpreadKind::Daily,
            cards: Vec::new(),
        };
        assert_eq!(spread.position(0), None);
    }

    #[test]
    fn three_card_spread_labels_positions() {
        let spread = Spread {
            kind: SpreadKind::ThreeCard,
            cards: Vec::new(),
        };
        assert_eq!(spread.position(2).map(SpreadPosition::label), Some("Будущее"));
    }

    #[test]
    fn card_reversed_defaults_to_false() {
        let json = r#"{
            "id": 9,
            "name": "Отшельник",
            "suit": "Старшие Арканы",
            "meaning": "Поиск",
            "description": "Уединение.",
            "keywords": ["поиск"]
        }"#;
        let card: Card = serde_json::from_str(json).expect("valid card JSON");
        assert_eq!(card.id, 9);
        assert!(!card.reversed);
    }
}
