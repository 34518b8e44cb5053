pub mod app;
pub mod event;
pub mod ui;
pub mod widgets;

use crate::parser::KeyBind;
use anyhow::Result;
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::LevelFilter;
use ratatui::prelude::*;
use std::io;

pub use app::{App, KeyBindRow};
pub use event::Action;

/// Setup terminal for TUI mode. Raw mode is left again if any later step fails.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    undo_on_error(enter_screen(), || {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    })
}

/// Run `undo` when `result` is an error, then pass the result through.
fn undo_on_error<T, F: FnOnce()>(result: Result<T>, undo: F) -> Result<T> {
    if result.is_err() {
        undo();
    }
    result
}

fn enter_screen() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal to normal mode
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Show the keybinds full-screen until the user quits.
pub fn run_tui(keybinds: Vec<KeyBind>) -> Result<()> {
    // Disable logging to prevent interference with TUI display
    log::set_max_level(LevelFilter::Off);

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic);
    }));

    let mut app = App::new(keybinds);
    let mut terminal = setup_terminal()?;

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore even when the loop failed, then report the loop's error first
    let restored = restore_terminal(&mut terminal);
    result.and(restored)
}

fn run_event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|f| ui::draw(f, app))?;

        // Nothing changes between key presses, so block on the next event
        if let Event::Key(key) = crossterm::event::read()? {
            if let Some(action) = event::action_for(key) {
                app.apply(action);
            }
        }
    }

    Ok(())
}
