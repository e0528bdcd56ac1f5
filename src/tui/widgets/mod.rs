//! Custom TUI widgets

mod messages;

pub use messages::{MessageList, MessageListState};
