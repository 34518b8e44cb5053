pub mod config;
pub mod descriptions;
pub mod parser;
pub mod tui;

pub use descriptions::describe;
pub use parser::{ConfigError, KeyBind};
