use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the one-line footer below the table
pub fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let position = match app.selected() {
        Some(idx) => format!("{}/{}", idx + 1, app.rows.len()),
        None => "0/0".to_string(),
    };

    let status_line = Line::from(vec![
        Span::raw(" "),
        Span::styled(
            format!("{} keybinds", app.rows.len()),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw("  │  "),
        Span::styled(position, Style::default().fg(Color::DarkGray)),
        Span::raw("  │  "),
        Span::styled("[?] Help  [q] Quit", Style::default().fg(Color::DarkGray)),
    ]);

    frame.render_widget(Paragraph::new(status_line), area);
}
