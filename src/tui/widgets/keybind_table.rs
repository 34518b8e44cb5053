use crate::tui::app::App;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

pub const HEADERS: [&str; 3] = ["Command", "Modifier", "Key"];

pub const COLUMN_SEPARATOR: &str = "│";

/// Render the keybind table. The header row stays pinned while the body scrolls.
pub fn render_keybind_table(frame: &mut Frame, area: Rect, app: &mut App) {
    let block = Block::default()
        .title(" LeftWM Keybinds ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let header_style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let header = Row::new(with_separators([
        Cell::from(HEADERS[0]).style(header_style),
        Cell::from(HEADERS[1]).style(header_style),
        Cell::from(HEADERS[2]).style(header_style),
    ]))
    .height(1)
    .bottom_margin(1);

    let rows: Vec<Row> = app
        .rows
        .iter()
        .map(|row| {
            Row::new(with_separators([
                Cell::from(row.description.as_str()),
                Cell::from(row.modifiers.as_str()).style(Style::default().fg(Color::Cyan)),
                Cell::from(row.key.as_str()).style(Style::default().fg(Color::Green)),
            ]))
            .height(1)
        })
        .collect();

    // Command column gets twice the share of the others; the 1-wide columns hold the separators
    let widths = [
        Constraint::Fill(2),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(1)
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    frame.render_stateful_widget(table, area, &mut app.table_state);
}

/// Interleave a vertical rule between the three columns
fn with_separators(cells: [Cell<'_>; 3]) -> Vec<Cell<'_>> {
    let [command, modifier, key] = cells;
    vec![
        command,
        separator(),
        modifier,
        separator(),
        key,
    ]
}

fn separator<'a>() -> Cell<'a> {
    Cell::from(COLUMN_SEPARATOR).style(Style::default().fg(Color::DarkGray))
}

/// Rows of the table body that fit in `area` (borders, header and its margin excluded)
pub fn body_height(area: Rect) -> usize {
    area.height.saturating_sub(4) as usize
}
