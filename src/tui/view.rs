//! Pure rendering: map App state to ratatui widget trees.
//!
//! Each section has a dedicated render function. The main `render()`
//! dispatches on the session's active section. Widget-building functions
//! are pure (state in, widgets out); the only effect is
//! Frame::render_widget() which writes to the terminal buffer.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::deck::Deck;
use crate::report::spread_heading;
use crate::session::{Section, Session};
use crate::types::{Card, Spread};

use super::state::App;
use super::theme;

const APP_NAME: &str = "Таро Мистик";
const TAGLINE: &str = "Откройте тайны своего пути";
const QUOTE: &str = "\"Карты Таро не предсказывают будущее — они освещают путь к нему через понимание настоящего.\"";

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the current section to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    // Header, content, help line
    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .split(area);

    frame.render_widget(render_header(), chunks[0]);
    frame.render_widget(render_help(app), chunks[2]);

    let content_area = chunks[1];

    match app.section() {
        Section::Main => render_main(&app.session, frame, content_area),
        Section::Reading => {
            if let Some(spread) = app.session.reading() {
                render_reading(spread, frame, content_area);
            }
        }
        Section::Deck => render_deck(&app.deck, app.deck_cursor, frame, content_area),
    }
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

fn render_header() -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::from(vec![
            Span::styled("✦ ", theme::STYLE_ACCENT),
            Span::styled(APP_NAME, theme::STYLE_TITLE),
        ]),
        Line::from(Span::styled(format!("  {}", TAGLINE), theme::STYLE_DIM)),
    ])
}

/// Help line with the keys for the current section, or the last error.
fn render_help(app: &App) -> Paragraph<'static> {
    if let Some(status) = &app.status {
        return Paragraph::new(Span::styled(status.clone(), theme::STYLE_ERROR));
    }

    let help_text = match app.section() {
        Section::Main => "[1] карта дня  [2] три карты  [3] колода  [q] выход",
        Section::Reading => "[r] новое гадание  [h] домой  [q] выход",
        Section::Deck => "[j/k] выбор  [Esc] назад  [h] домой  [q] выход",
    };

    Paragraph::new(Span::styled(help_text, theme::STYLE_HELP))
}

fn keyword_spans(keywords: &[String]) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(keywords.len() * 2);
    for keyword in keywords {
        spans.push(Span::styled(format!(" {} ", keyword), theme::STYLE_KEYWORD));
        spans.push(Span::raw(" "));
    }
    spans
}

// ============================================================================
// SECTION: MAIN
// ============================================================================

fn render_main(session: &Session, frame: &mut Frame, area: Rect) {
    let daily = session.daily_card();

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("  Добро пожаловать", theme::STYLE_ACCENT)),
        Line::from(Span::styled(
            "  Позвольте картам Таро раскрыть тайны вашего прошлого, настоящего и будущего",
            theme::STYLE_DIM,
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("  [1] ", theme::STYLE_INTERACTIVE),
            Span::styled("Карта дня", theme::STYLE_IMPORTANT),
            Span::raw("  "),
            Span::styled(format!(" {} ", daily.name), theme::STYLE_HIGHLIGHT),
        ]),
        Line::from(Span::styled(
            "      Получите руководство на сегодняшний день",
            theme::STYLE_DIM,
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("  [2] ", theme::STYLE_INTERACTIVE),
            Span::styled("Расклад \"Три карты\"", theme::STYLE_IMPORTANT),
        ]),
        Line::from(Span::styled(
            "      Прошлое • Настоящее • Будущее",
            theme::STYLE_DIM,
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("  [3] ", theme::STYLE_INTERACTIVE),
            Span::styled("Колода Таро", theme::STYLE_IMPORTANT),
        ]),
        Line::from(Span::styled(
            "      Изучите значения всех карт",
            theme::STYLE_DIM,
        )),
        Line::from(""),
        Line::from(Span::styled(format!("  {}", QUOTE), theme::STYLE_DIM)),
    ];

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

// ============================================================================
// SECTION: READING
// ============================================================================

fn render_reading(spread: &Spread, frame: &mut Frame, area: Rect) {
    let (title, subtitle) = spread_heading(spread.kind);

    let chunks = Layout::vertical([
        Constraint::Length(3), // heading
        Constraint::Min(0),    // cards
    ])
    .split(area);

    let heading = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {}", title), theme::STYLE_ACCENT)),
        Line::from(Span::styled(format!("  {}", subtitle), theme::STYLE_DIM)),
    ]);
    frame.render_widget(heading, chunks[0]);

    let n = spread.cards.len().max(1);
    let columns = Layout::horizontal(vec![Constraint::Ratio(1, n as u32); n]).split(chunks[1]);

    for (i, (card, column)) in spread.cards.iter().zip(columns.iter()).enumerate() {
        let position = spread.position(i).map(|p| p.label());
        frame.render_widget(card_panel(card, position), *column);
    }
}

/// A bordered panel with everything known about one card.
fn card_panel(card: &Card, position: Option<&'static str>) -> Paragraph<'static> {
    let mut lines = vec![
        Line::from(Span::styled(card.name.clone(), theme::STYLE_ACCENT)),
        Line::from(Span::styled(card.suit.clone(), theme::STYLE_DIM)),
    ];
    if let Some(position) = position {
        lines.push(Line::from(Span::styled(position, theme::STYLE_HIGHLIGHT)));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("ЗНАЧЕНИЕ", theme::STYLE_ACCENT)));
    lines.push(Line::from(card.meaning.clone()));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("ТОЛКОВАНИЕ", theme::STYLE_ACCENT)));
    lines.push(Line::from(Span::styled(card.description.clone(), theme::STYLE_DIM)));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("КЛЮЧЕВЫЕ СЛОВА", theme::STYLE_ACCENT)));
    lines.push(Line::from(keyword_spans(&card.keywords)));

    Paragraph::new(lines)
        .block(Block::bordered().border_style(theme::STYLE_BORDER))
        .wrap(Wrap { trim: true })
}

// ============================================================================
// SECTION: DECK
// ============================================================================

/// Rows each deck entry takes in the list.
const DECK_ROW_HEIGHT: usize = 3;

fn render_deck(deck: &Deck, cursor: usize, frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // heading
        Constraint::Min(0),    // list + detail
    ])
    .split(area);

    let heading = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled("  Колода Таро", theme::STYLE_ACCENT)),
        Line::from(Span::styled("  Изучите значения всех карт", theme::STYLE_DIM)),
    ]);
    frame.render_widget(heading, chunks[0]);

    let panes = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    let mut lines: Vec<Line> = Vec::with_capacity(deck.len() * DECK_ROW_HEIGHT);
    for (i, card) in deck.cards().iter().enumerate() {
        let mut head = vec![
            Span::raw("  "),
            Span::styled(card.name.clone(), theme::STYLE_ACCENT),
            Span::raw("  "),
            Span::styled(card.suit.clone(), theme::STYLE_DIM),
        ];
        let meaning = Line::from(vec![
            Span::raw("    "),
            Span::styled(card.meaning.clone(), theme::STYLE_DIM),
        ]);
        let mut tail = vec![Span::raw("    ")];
        tail.extend(keyword_spans(&card.keywords[..card.keywords.len().min(2)]));

        if i == cursor {
            head.insert(0, Span::styled(">", theme::STYLE_INTERACTIVE));
            lines.push(Line::from(head).style(theme::STYLE_CURSOR));
        } else {
            head.insert(0, Span::raw(" "));
            lines.push(Line::from(head));
        }
        lines.push(meaning);
        lines.push(Line::from(tail));
    }

    // Scroll: keep the focused entry visible
    let visible_rows = panes[0].height as usize;
    let cursor_bottom = (cursor + 1) * DECK_ROW_HEIGHT;
    let scroll_offset = cursor_bottom.saturating_sub(visible_rows);

    let list = Paragraph::new(lines).scroll((scroll_offset as u16, 0));
    frame.render_widget(list, panes[0]);

    if let Some(card) = deck.get(cursor) {
        frame.render_widget(card_panel(card, None), panes[1]);
    }
}

// ============================================================================
// TESTS
// ============================================================================
