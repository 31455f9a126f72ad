//! Binary entry point and terminal event loop.
//!
//! This is the thin runtime shell around the bookrack library: it parses the
//! command line, initializes tracing and application state, puts the
//! terminal into TUI mode, and runs a blocking read-dispatch-render loop
//! until the user quits.
//!
//! # Event Mapping
//!
//! Raw key events are translated to library events per interaction mode, so
//! the same key can mean different things in different overlays:
//!
//! - Browsing: `j`/`k` navigate, `Enter` opens the detail overlay, `m`
//!   reveals the next page, `/` opens search, `s` opens settings, `q` quits
//! - Searching: characters edit the title field, `Tab` cycles fields,
//!   `Left`/`Right` cycle the focused dropdown, `Enter` submits, `Esc`
//!   cancels
//! - Settings: `j`/`k` toggle the theme choice, `Enter` applies, `Esc`
//!   cancels
//! - Detail: `Esc`, `Enter`, or `q` closes
//!
//! `Ctrl+C` quits from any mode.

use std::io::{self, Write};

use clap::Parser;
use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use bookrack::{handle_event, initialize, terminal, ui, Action, AppState, Config, Event, Mode};

/// Browse a bundled book catalog in the terminal.
#[derive(Debug, Parser)]
#[command(name = "bookrack", version, about)]
struct Args {
    /// Initial theme, overriding ambient detection.
    #[arg(long, value_parser = ["day", "night"])]
    theme: Option<String>,

    /// Path to a custom TOML palette file.
    #[arg(long)]
    theme_file: Option<String>,

    /// Log filter directive (e.g. "debug", "bookrack=trace").
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> bookrack::Result<()> {
    let args = Args::parse();
    let config = Config {
        theme: args.theme,
        theme_file: args.theme_file,
        log_level: args.log_level,
    };

    bookrack::observability::init_tracing(&config);
    let mut app = initialize(&config);

    terminal::setup_panic_hook();
    terminal::enter_tui_mode()?;
    let result = run(&mut app);
    terminal::leave_tui_mode();

    result
}

/// The blocking event loop: draw, read one event, dispatch, repeat.
fn run(app: &mut AppState) -> bookrack::Result<()> {
    draw(app)?;

    loop {
        match event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                let Some(app_event) = map_key_event(app, &key) else {
                    continue;
                };

                match handle_event(app, &app_event) {
                    Ok((should_render, actions)) => {
                        for action in actions {
                            match action {
                                Action::Quit => return Ok(()),
                            }
                        }
                        if should_render {
                            draw(app)?;
                        }
                    }
                    Err(e) => {
                        tracing::debug!(error = %e, "error handling event");
                    }
                }
            }
            TermEvent::Resize(..) => draw(app)?,
            _ => {}
        }
    }
}

/// Renders one frame at the current terminal size and flushes it.
fn draw(app: &AppState) -> bookrack::Result<()> {
    let (cols, rows) = crossterm::terminal::size()?;
    ui::render(app, rows as usize, cols as usize);
    io::stdout().flush()?;
    Ok(())
}

/// Maps a raw key event to a library event for the current mode.
///
/// Returns `None` for keys that mean nothing in the current mode.
fn map_key_event(app: &AppState, key: &KeyEvent) -> Option<Event> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Event::Quit),
            _ => None,
        };
    }

    match &app.mode {
        Mode::Browsing => match key.code {
            KeyCode::Down | KeyCode::Char('j') => Some(Event::MoveDown),
            KeyCode::Up | KeyCode::Char('k') => Some(Event::MoveUp),
            KeyCode::Enter => Some(Event::OpenDetail),
            KeyCode::Char('/') => Some(Event::OpenSearch),
            KeyCode::Char('s') => Some(Event::OpenSettings),
            KeyCode::Char('m') | KeyCode::Char(' ') => Some(Event::LoadMore),
            KeyCode::Char('q') => Some(Event::Quit),
            _ => None,
        },
        Mode::Searching(_) => match key.code {
            KeyCode::Esc => Some(Event::CancelSearch),
            KeyCode::Enter => Some(Event::SubmitSearch),
            KeyCode::Tab | KeyCode::Down => Some(Event::FocusNextField),
            KeyCode::BackTab | KeyCode::Up => Some(Event::FocusPrevField),
            KeyCode::Left => Some(Event::PrevOption),
            KeyCode::Right => Some(Event::NextOption),
            KeyCode::Backspace => Some(Event::Backspace),
            KeyCode::Char(c) => Some(Event::Char(c)),
            _ => None,
        },
        Mode::Settings(_) => match key.code {
            KeyCode::Esc => Some(Event::CancelSettings),
            KeyCode::Enter => Some(Event::SubmitSettings),
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Right => Some(Event::NextOption),
            KeyCode::Up | KeyCode::Char('k') | KeyCode::Left => Some(Event::PrevOption),
            _ => None,
        },
        Mode::Detail(_) => match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Some(Event::CloseDetail),
            _ => None,
        },
    }
}
