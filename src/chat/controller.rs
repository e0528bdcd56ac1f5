//! Submission flow for the chat view.
//!
//! The controller owns the conversation state and performs the synchronous
//! half of each exchange: appending the user entry and its pending
//! placeholder on submit, and swapping the placeholder for the reply (or an
//! error entry) on resolution. The network half is driven by the caller, so
//! every state transition stays testable without a terminal or a socket.

use super::{ChatMessage, Conversation};

/// An accepted submission: the text to send and the handle of the pending
/// entry its resolution replaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub text: String,
    pub pending_id: String,
}

/// Controller for the chat view.
///
/// Each submission moves through `Pending` to either a reply or an error,
/// terminal either way. Overlapping submissions are neither deduplicated nor
/// queued; each resolves independently through its own pending handle.
#[derive(Debug, Default)]
pub struct ChatController {
    conversation: Conversation,
}

impl ChatController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        self.conversation.messages()
    }

    /// Whether any submission is still awaiting its reply.
    pub fn is_waiting(&self) -> bool {
        self.conversation.is_waiting()
    }

    /// Submit user input.
    ///
    /// Input that is empty after trimming is rejected: `None` is returned
    /// and nothing is appended, so the caller leaves the input field as-is.
    /// Otherwise the trimmed text is appended as a user message followed by
    /// a pending placeholder, and the caller dispatches the request for the
    /// returned submission.
    pub fn submit(&mut self, input: &str) -> Option<Submission> {
        let text = input.trim();
        if text.is_empty() {
            return None;
        }

        self.conversation.add_user(text);
        let pending_id = self.conversation.add_pending();

        Some(Submission {
            text: text.to_string(),
            pending_id,
        })
    }

    /// Resolve a submission: the pending placeholder is removed and the
    /// outcome appended as an assistant reply or an error entry carrying
    /// the failure description.
    pub fn resolve(&mut self, pending_id: &str, outcome: Result<String, String>) {
        self.conversation.remove(pending_id);
        match outcome {
            Ok(reply) => self.conversation.add_assistant(reply),
            Err(failure) => self.conversation.add_error(failure),
        };
    }
}
