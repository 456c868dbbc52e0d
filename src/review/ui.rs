//! TUI event loop for the review screen.
use super::app::App;
use super::terminal::TerminalGuard;
use super::EVENT_POLL_MS;
use crate::session::{CandidatesFile, Judgment, SessionFile};
use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::backend::CrosstermBackend;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

pub(super) fn run_tui(
    session_path: PathBuf,
    candidates: CandidatesFile,
    file: SessionFile,
) -> Result<()> {
    let mut app = App::new(session_path, candidates, file);

    let guard = TerminalGuard::enter()?;
    let mut terminal = {
        let stdout = io::stdout();
        let backend = CrosstermBackend::new(stdout);
        ratatui::Terminal::new(backend).context("init terminal")?
    };

    loop {
        terminal
            .draw(|frame| app.draw(frame))
            .context("draw review ui")?;

        if event::poll(Duration::from_millis(EVENT_POLL_MS)).context("poll event")? {
            if let Event::Key(key) = event::read().context("read event")? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(action) = action_from_key(key, app.is_decision_visible()) {
                    match action {
                        Action::Quit => {
                            if app.is_help_visible() {
                                app.toggle_help();
                            } else {
                                app.save()?;
                                break;
                            }
                        }
                        Action::Up => app.move_selection(-1),
                        Action::Down => app.move_selection(1),
                        Action::PageUp => app.move_selection(-5),
                        Action::PageDown => app.move_selection(5),
                        Action::Judge(judgment) => app.judge(judgment),
                        Action::Commit => {
                            if let Err(err) = app.commit() {
                                app.set_message(format!("commit failed: {err}"));
                            }
                        }
                        Action::QueryMore => {
                            if let Err(err) = app.query_more() {
                                app.set_message(format!("next batch failed: {err}"));
                            }
                        }
                        Action::SeedSet => {
                            if let Err(err) = app.return_to_seed_set() {
                                app.set_message(format!("navigation failed: {err}"));
                            }
                        }
                        Action::NewSearch => {
                            if let Err(err) = app.start_new_search() {
                                app.set_message(format!("navigation failed: {err}"));
                            }
                        }
                        Action::ToggleHelp => app.toggle_help(),
                    }
                }
            }
        }

        if app.outcome().is_some() {
            break;
        }
    }

    drop(guard);
    terminal.show_cursor().ok();
    if let Some(target) = app.outcome() {
        println!("navigated to {target}");
    }
    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
enum Action {
    Quit,
    Up,
    Down,
    PageUp,
    PageDown,
    Judge(Judgment),
    Commit,
    QueryMore,
    SeedSet,
    NewSearch,
    ToggleHelp,
}

fn action_from_key(key: KeyEvent, decision_visible: bool) -> Option<Action> {
    if decision_visible {
        return match key.code {
            KeyCode::Char('1') => Some(Action::QueryMore),
            KeyCode::Char('2') => Some(Action::SeedSet),
            KeyCode::Char('3') => Some(Action::NewSearch),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char('?') => Some(Action::ToggleHelp),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Down),
        KeyCode::PageUp => Some(Action::PageUp),
        KeyCode::PageDown => Some(Action::PageDown),
        KeyCode::Char('y') => Some(Action::Judge(Judgment::Yes)),
        KeyCode::Char('n') => Some(Action::Judge(Judgment::No)),
        KeyCode::Char('m') => Some(Action::Judge(Judgment::Maybe)),
        KeyCode::Char('c') => Some(Action::Commit),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        _ => None,
    }
}
