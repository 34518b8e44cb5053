use crate::descriptions::describe;
use crate::parser::KeyBind;
use crate::tui::event::Action;
use ratatui::widgets::TableState;

/// Rows moved by a page step when the viewport height is not known yet
const DEFAULT_PAGE_SIZE: usize = 10;

/// A keybind as it appears in the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindRow {
    pub description: String,
    pub modifiers: String,
    pub key: String,
}

impl From<KeyBind> for KeyBindRow {
    fn from(kb: KeyBind) -> Self {
        KeyBindRow {
            description: describe(&kb.command, &kb.value),
            modifiers: kb.modifier.join(", "),
            key: kb.key,
        }
    }
}

/// Main application state
pub struct App {
    /// Whether the app is running
    pub running: bool,

    /// Rows in file order
    pub rows: Vec<KeyBindRow>,

    /// Selection and scroll offset of the table
    pub table_state: TableState,

    /// Help overlay visible
    pub show_help: bool,

    /// Rows visible in the table body, used for page steps
    pub page_size: usize,
}

impl App {
    pub fn new(keybinds: Vec<KeyBind>) -> Self {
        let rows: Vec<KeyBindRow> = keybinds.into_iter().map(KeyBindRow::from).collect();
        let selected = if rows.is_empty() { None } else { Some(0) };

        App {
            running: true,
            rows,
            table_state: TableState::default().with_selected(selected),
            show_help: false,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.table_state.selected()
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => {
                if self.show_help {
                    self.show_help = false;
                } else {
                    self.running = false;
                }
            }
            Action::ToggleHelp => self.show_help = !self.show_help,
            Action::Up => self.move_by(-1),
            Action::Down => self.move_by(1),
            Action::PageUp => self.move_by(-(self.page_size.max(1) as isize)),
            Action::PageDown => self.move_by(self.page_size.max(1) as isize),
            Action::First => self.select(0),
            Action::Last => self.select(self.rows.len().saturating_sub(1)),
        }
    }

    fn move_by(&mut self, delta: isize) {
        let current = self.selected().unwrap_or(0) as isize;
        let target = (current + delta).max(0) as usize;
        self.select(target);
    }

    fn select(&mut self, index: usize) {
        if self.rows.is_empty() {
            self.table_state.select(None);
            return;
        }
        self.table_state
            .select(Some(index.min(self.rows.len() - 1)));
    }
}
