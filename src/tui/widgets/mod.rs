// TUI widget modules for each panel.

pub mod help_bar;
pub mod quit_confirm;
pub mod ranking;
pub mod roster;
pub mod status_bar;
