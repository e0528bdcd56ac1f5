//! Message list widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::StatefulWidget,
};

use crate::chat::{ChatMessage, MessageKind};
use crate::tui::theme::Theme;

/// Spinner frames for the pending indicator.
const PENDING_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// State for the message list
#[derive(Debug, Default)]
pub struct MessageListState {
    /// Current scroll offset (in lines)
    pub offset: usize,
    /// Total content height (in lines)
    pub content_height: usize,
    /// Viewport height
    pub viewport_height: usize,
    /// When set, the next render pins the viewport to the end
    follow: bool,
}

impl MessageListState {
    pub fn scroll_up(&mut self, amount: usize) {
        self.follow = false;
        self.offset = self.offset.saturating_sub(amount);
    }

    pub fn scroll_down(&mut self, amount: usize) {
        let max_offset = self.content_height.saturating_sub(self.viewport_height);
        self.offset = (self.offset + amount).min(max_offset);
    }

    /// Scroll to the end of the content.
    ///
    /// The content height on record lags one render behind after an append,
    /// so the next render re-pins the offset against the fresh height.
    pub fn scroll_to_bottom(&mut self) {
        self.follow = true;
        self.offset = self.content_height.saturating_sub(self.viewport_height);
    }
}

/// Widget for rendering the message list
pub struct MessageList<'a> {
    messages: &'a [ChatMessage],
    theme: &'a Theme,
    tick: usize,
}

impl<'a> MessageList<'a> {
    pub fn new(messages: &'a [ChatMessage], theme: &'a Theme) -> Self {
        Self {
            messages,
            theme,
            tick: 0,
        }
    }

    /// Animation tick used to pick the pending spinner frame.
    pub fn tick(mut self, tick: usize) -> Self {
        self.tick = tick;
        self
    }

    fn role_line(&self, kind: MessageKind) -> Line<'static> {
        let (label, color) = match kind {
            MessageKind::User => ("You", self.theme.user),
            MessageKind::Assistant => ("Assistant", self.theme.assistant),
            MessageKind::Error => ("Error", self.theme.error),
            // Pending entries render as a single spinner line instead.
            MessageKind::Pending => ("", self.theme.text_muted),
        };
        Line::from(Span::styled(
            label,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
    }
}

impl StatefulWidget for MessageList<'_> {
    type State = MessageListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let width = (area.width as usize).max(1);
        let offset = state.offset;
        let viewport = area.height as usize;

        let set_line = |virtual_y: usize, line: Line<'static>, buf: &mut Buffer| {
            if virtual_y >= offset && virtual_y - offset < viewport {
                let render_y = (area.y as usize + virtual_y - offset) as u16;
                buf.set_line(area.x, render_y, &line, area.width);
            }
        };

        let mut virtual_y = 0usize;
        for msg in self.messages {
            match msg.kind {
                MessageKind::Pending => {
                    let frame = PENDING_FRAMES[self.tick % PENDING_FRAMES.len()];
                    set_line(
                        virtual_y,
                        Line::from(Span::styled(
                            format!("{frame} Thinking..."),
                            Style::default().fg(self.theme.accent),
                        )),
                        buf,
                    );
                    virtual_y += 1;
                }
                _ => {
                    set_line(virtual_y, self.role_line(msg.kind), buf);
                    virtual_y += 1;

                    for wrapped in textwrap::wrap(&msg.text, width) {
                        set_line(
                            virtual_y,
                            Line::from(Span::styled(
                                wrapped.to_string(),
                                Style::default().fg(self.theme.text),
                            )),
                            buf,
                        );
                        virtual_y += 1;
                    }
                }
            }

            // Spacer between entries
            virtual_y += 1;
        }

        state.content_height = virtual_y;
        state.viewport_height = viewport;
        if state.follow {
            state.offset = state.content_height.saturating_sub(state.viewport_height);
            state.follow = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_clamps_at_bounds() {
        let mut state = MessageListState {
            offset: 0,
            content_height: 10,
            viewport_height: 4,
            follow: false,
        };

        state.scroll_up(3);
        assert_eq!(state.offset, 0);

        state.scroll_down(100);
        assert_eq!(state.offset, 6);
    }

    #[test]
    fn test_scroll_to_bottom_pins_viewport_to_end() {
        let mut state = MessageListState {
            offset: 0,
            content_height: 10,
            viewport_height: 4,
            follow: false,
        };
        state.scroll_to_bottom();
        assert_eq!(state.offset, 6);

        // Content shorter than the viewport stays at the top.
        let mut state = MessageListState {
            offset: 0,
            content_height: 2,
            viewport_height: 4,
            follow: false,
        };
        state.scroll_to_bottom();
        assert_eq!(state.offset, 0);
    }

    #[test]
    fn test_render_counts_wrapped_lines_and_follows() {
        use crate::chat::Conversation;
        use crate::tui::theme::Theme;

        let mut conv = Conversation::new();
        conv.add_user("hello");
        conv.add_pending();

        let theme = Theme::dark();
        let mut state = MessageListState::default();
        state.scroll_to_bottom();

        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        MessageList::new(conv.messages(), &theme).render(area, &mut buf, &mut state);

        // User entry: role line + 1 text line + spacer; pending: 1 line + spacer.
        assert_eq!(state.content_height, 5);
        assert_eq!(state.viewport_height, 3);
        // Follow pinned the viewport to the freshly computed end.
        assert_eq!(state.offset, 2);
    }
}
