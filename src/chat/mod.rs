//! Conversation state for the chat view.

mod controller;
mod message;

pub use controller::{ChatController, Submission};
pub use message::{ChatMessage, Conversation, MessageKind};
