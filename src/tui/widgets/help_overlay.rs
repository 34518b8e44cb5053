use crate::tui::event::{key_description, Action};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const HELP_ENTRIES: [(Action, &str); 8] = [
    (Action::Up, "Previous row"),
    (Action::Down, "Next row"),
    (Action::PageUp, "Page up"),
    (Action::PageDown, "Page down"),
    (Action::First, "First row"),
    (Action::Last, "Last row"),
    (Action::ToggleHelp, "Toggle this help"),
    (Action::Quit, "Close help / quit"),
];

/// Render the help overlay
pub fn render_help(frame: &mut Frame, area: Rect) {
    // Center the help popup
    let popup_width = 44.min(area.width.saturating_sub(4));
    let popup_height = 14.min(area.height.saturating_sub(4));
    let popup_x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let mut help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (action, label) in HELP_ENTRIES {
        help_text.push(Line::from(vec![
            Span::styled(
                format!("  {:<18}", key_description(action)),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw(label),
        ]));
    }

    help_text.push(Line::from(""));
    help_text.push(Line::from(Span::styled(
        "Press ? or Esc to close",
        Style::default().fg(Color::DarkGray),
    )));

    let help_popup = Paragraph::new(help_text).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(help_popup, popup_area);
}
