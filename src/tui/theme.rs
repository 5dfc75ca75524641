//! TUI color semantics and style constants.
//!
//! Color semantics:
//! - Magenta: accent (card names, section headings)
//! - Yellow: highlights (daily card badge, position labels)
//! - Cyan: interactive elements (keybinding hints)
//! - Dim: de-emphasized (suits, descriptions, quote)
//! - Bold: important (titles)

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// SEMANTIC STYLES
// ============================================================================

/// Accent: card names and section headings.
pub const STYLE_ACCENT: Style = Style::new().fg(Color::Magenta).add_modifier(Modifier::BOLD);

/// Highlight: badges, spread positions.
pub const STYLE_HIGHLIGHT: Style = Style::new().fg(Color::Yellow);

/// Interactive element / keybinding hint: cyan.
pub const STYLE_INTERACTIVE: Style = Style::new().fg(Color::Cyan);

/// De-emphasized text: dark gray.
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

/// Important text: bold.
pub const STYLE_IMPORTANT: Style = Style::new().add_modifier(Modifier::BOLD);

/// Keyword chips.
pub const STYLE_KEYWORD: Style = Style::new().fg(Color::Black).bg(Color::Gray);

/// Errors shown in the status line.
pub const STYLE_ERROR: Style = Style::new().fg(Color::Red);

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Title bar / header.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Cursor row in a list.
pub const STYLE_CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Card and panel borders.
pub const STYLE_BORDER: Style = Style::new().fg(Color::Magenta);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// TESTS
// ============================================================================
