//! Chat message types and the conversation list.

/// Kind of a conversation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    User,
    Assistant,
    /// Placeholder shown while a reply is awaited; removed upon resolution.
    Pending,
    Error,
}

/// A single entry in the conversation view.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    /// Handle returned by the append operation; pending entries are removed
    /// through it.
    pub id: String,
    pub kind: MessageKind,
    pub text: String,
}

impl ChatMessage {
    fn new(kind: MessageKind, text: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            text: text.into(),
        }
    }
}

/// Ordered list of messages; insertion order is display order.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Append a user message, returning its handle.
    pub fn add_user(&mut self, text: impl Into<String>) -> String {
        self.push(ChatMessage::new(MessageKind::User, text))
    }

    /// Append a pending placeholder, returning its handle.
    pub fn add_pending(&mut self) -> String {
        self.push(ChatMessage::new(MessageKind::Pending, ""))
    }

    /// Append an assistant reply, returning its handle.
    pub fn add_assistant(&mut self, text: impl Into<String>) -> String {
        self.push(ChatMessage::new(MessageKind::Assistant, text))
    }

    /// Append an error entry, returning its handle.
    pub fn add_error(&mut self, text: impl Into<String>) -> String {
        self.push(ChatMessage::new(MessageKind::Error, text))
    }

    /// Remove a message by handle.
    pub fn remove(&mut self, id: &str) -> Option<ChatMessage> {
        let index = self.messages.iter().position(|m| m.id == id)?;
        Some(self.messages.remove(index))
    }

    /// Whether any submission is still awaiting its reply.
    pub fn is_waiting(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.kind == MessageKind::Pending)
    }

    fn push(&mut self, message: ChatMessage) -> String {
        let id = message.id.clone();
        self.messages.push(message);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_preserves_insertion_order() {
        let mut conv = Conversation::new();
        conv.add_user("first");
        conv.add_pending();
        conv.add_assistant("second");

        let kinds: Vec<MessageKind> = conv.messages().iter().map(|m| m.kind).collect();
        assert_eq!(
            kinds,
            vec![
                MessageKind::User,
                MessageKind::Pending,
                MessageKind::Assistant
            ]
        );
    }

    #[test]
    fn test_remove_by_handle() {
        let mut conv = Conversation::new();
        conv.add_user("keep");
        let pending = conv.add_pending();

        let removed = conv.remove(&pending).unwrap();
        assert_eq!(removed.kind, MessageKind::Pending);
        assert_eq!(conv.messages().len(), 1);
        assert_eq!(conv.messages()[0].text, "keep");

        // Unknown handles remove nothing.
        assert!(conv.remove(&pending).is_none());
    }

    #[test]
    fn test_is_waiting_tracks_pending_entries() {
        let mut conv = Conversation::new();
        assert!(!conv.is_waiting());

        conv.add_user("hello");
        assert!(!conv.is_waiting());

        let pending = conv.add_pending();
        assert!(conv.is_waiting());

        conv.remove(&pending);
        assert!(!conv.is_waiting());
    }
}
