//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only TUI module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui,
//! and is where the random source meets the session.
//!
//! Single-threaded: block on the next key, transition, redraw.

use std::io;

use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use rand::Rng;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use super::state::{Action, App, Transition};
use super::update::update;
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        // Navigation
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Esc | KeyCode::Backspace => Some(Action::Back),
        KeyCode::Home | KeyCode::Char('h') | KeyCode::Char('r') => Some(Action::Home),

        // Menu
        KeyCode::Char(c @ '1'..='3') => Some(Action::NumberKey(c as u8 - b'0')),
        KeyCode::Char('d') => Some(Action::DrawDaily),
        KeyCode::Char('t') => Some(Action::DrawThree),
        KeyCode::Char('b') => Some(Action::OpenDeck),

        KeyCode::Char('q') => Some(Action::Quit),

        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Apply one action to the app. Returns nothing; errors land in `app.status`.
pub fn handle_action<R: Rng + ?Sized>(app: &mut App, action: Action, rng: &mut R) {
    app.status = None;

    let transition = update(app.section(), app.deck_cursor, app.deck.len(), action);

    match transition {
        Transition::Stay => {}
        Transition::Quit => app.should_quit = true,
        Transition::Cursor(cursor) => app.deck_cursor = cursor,
        Transition::Trigger(trigger) => {
            if let Err(e) = app.session.apply(trigger, &app.deck, rng) {
                tracing::warn!(error = %e, ?trigger, "trigger failed");
                app.status = Some(format!("Ошибка: {}", e));
            }
        }
    }
}

/// Run the TUI event loop until the user quits.
pub fn run<R: Rng + ?Sized>(mut app: App, rng: &mut R) -> io::Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let result = event_loop(&mut terminal, &mut app, rng);

    restore_terminal()?;
    result
}

fn event_loop<R: Rng + ?Sized>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    rng: &mut R,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| render(app, frame))?;

        if app.should_quit {
            return Ok(());
        }

        // Ignore mouse, resize and key-release events
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        if let Some(action) = map_key(key) {
            handle_action(app, action, rng);
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
