use crate::tui::app::App;
use crate::tui::widgets::{
    help_overlay::render_help,
    keybind_table::{body_height, render_keybind_table},
    status_bar::render_status_bar,
};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// Main draw function for the TUI
pub fn draw(frame: &mut Frame, app: &mut App) {
    let size = frame.area();

    // Table, then a single footer line
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(1)])
        .split(size);

    app.page_size = body_height(chunks[0]).max(1);

    render_keybind_table(frame, chunks[0], app);
    render_status_bar(frame, chunks[1], app);

    if app.show_help {
        render_help(frame, size);
    }
}
