pub mod messages;
pub mod tui;
