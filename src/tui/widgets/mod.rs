pub mod help_overlay;
pub mod keybind_table;
pub mod status_bar;
