//! Round log panel.

use client_frontend_core::message::MessageLog;
use ratatui::{
    Frame,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

/// Render the newest `visible` log lines, newest on top.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    messages: &MessageLog,
    visible: usize,
    theme: &RatatuiTheme,
) {
    let lines: Vec<Line> = messages
        .recent(visible)
        .map(|entry| Line::styled(entry.text.clone(), theme.message(entry.level)))
        .collect();

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" ROUND LOG "));

    frame.render_widget(paragraph, area);
}
