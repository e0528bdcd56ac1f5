//! Main UI rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::App;
use super::widgets::MessageList;

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(0),    // Messages
            Constraint::Length(1), // Status
            Constraint::Length(3), // Input
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_messages(frame, app, chunks[1]);
    render_status(frame, app, chunks[2]);
    render_input(frame, app, chunks[3]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "💬 popchat",
            Style::default()
                .fg(app.theme.text)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" │ "),
        Span::styled(app.endpoint(), Style::default().fg(app.theme.text_muted)),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(app.theme.border)),
    );

    frame.render_widget(header, area);
}

fn render_messages(frame: &mut Frame, app: &mut App, area: Rect) {
    let App {
        controller,
        theme,
        message_list_state,
        tick,
        ..
    } = app;

    let list = MessageList::new(controller.messages(), theme).tick(*tick);
    frame.render_stateful_widget(list, area, message_list_state);
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let hint = if app.controller.is_waiting() {
        Span::styled(
            "Waiting for reply...",
            Style::default().fg(app.theme.accent),
        )
    } else {
        Span::styled(
            "Enter send · Shift+Enter newline · PgUp/PgDn scroll · Esc quit",
            Style::default().fg(app.theme.text_muted),
        )
    };

    frame.render_widget(Paragraph::new(Line::from(hint)), area);
}

fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border));
    let inner = block.inner(area);

    frame.render_widget(block, area);
    frame.render_widget(&app.input, inner);
}
