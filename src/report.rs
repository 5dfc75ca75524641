//! Text output for the non-interactive commands.
//!
//! Pure functions: (data, OutputFormat) → String.
//! No I/O, no side effects.

use serde::Serialize;

use crate::deck::Deck;
use crate::types::{Card, OutputFormat, Spread, SpreadKind};

/// Format a drawn spread for output.
pub fn format_spread(spread: &Spread, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_spread_human(spread),
        OutputFormat::Json => to_json(&SpreadJson::from(spread)),
    }
}

/// Format the whole deck for output.
pub fn format_deck(deck: &Deck, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_deck_human(deck),
        OutputFormat::Json => to_json(&deck.cards()),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

/// Heading and subtitle for a reading.
pub fn spread_heading(kind: SpreadKind) -> (&'static str, &'static str) {
    match kind {
        SpreadKind::Daily => ("Ваша карта дня", "Послание звёзд на сегодняшний день"),
        SpreadKind::ThreeCard => ("Ваш расклад", "Взгляд в прошлое, настоящее и будущее"),
    }
}

fn format_spread_human(spread: &Spread) -> String {
    let (title, subtitle) = spread_heading(spread.kind);

    let mut out = String::new();
    out.push_str(&format!("=== {} ===\n", title));
    out.push_str(&format!("{}\n\n", subtitle));

    for (i, card) in spread.cards.iter().enumerate() {
        match spread.position(i) {
            Some(pos) => out.push_str(&format!("[{}] {}\n", pos.label(), card.name)),
            None => out.push_str(&format!("{}\n", card.name)),
        }
        out.push_str(&format_card_body(card));
        out.push('\n');
    }

    out
}

fn format_card_body(card: &Card) -> String {
    let mut out = String::new();
    out.push_str(&format!("  {}\n", card.suit));
    out.push_str(&format!("  Значение:       {}\n", card.meaning));
    out.push_str(&format!("  Толкование:     {}\n", card.description));
    out.push_str(&format!("  Ключевые слова: {}\n", card.keywords.join(", ")));
    out
}

fn format_deck_human(deck: &Deck) -> String {
    let mut out = String::new();
    out.push_str("=== Колода Таро ===\n");

    for card in deck.cards() {
        let keywords: Vec<&str> = card.keywords.iter().take(2).map(String::as_str).collect();
        out.push_str(&format!("{:>3}. {} ({})\n", card.id, card.name, card.suit));
        out.push_str(&format!("     {}\n", card.meaning));
        if !keywords.is_empty() {
            out.push_str(&format!("     {}\n", keywords.join(" • ")));
        }
    }

    out.push_str(&format!("\nВсего карт: {}\n", deck.len()));
    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

#[derive(Serialize)]
struct SpreadJson<'a> {
    kind: SpreadKind,
    cards: Vec<PositionedCard<'a>>,
}

#[derive(Serialize)]
struct PositionedCard<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    position: Option<&'static str>,
    #[serde(flatten)]
    card: &'a Card,
}

impl<'a> From<&'a Spread> for SpreadJson<'a> {
    fn from(spread: &'a Spread) -> Self {
        SpreadJson {
            kind: spread.kind,
            cards: spread
                .cards
                .iter()
                .enumerate()
                .map(|(i, card)| PositionedCard {
                    position: spread.position(i).map(|p| p.label()),
                    card,
                })
                .collect(),
        }
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    // Plain data with string keys; serialization cannot fail
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| panic!("Failed to serialize to JSON: {}", e))
}

// ============================================================================
// TESTS
// ============================================================================
