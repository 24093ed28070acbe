//! Feedback banner ("MEGA BOBER!", "TOO POOR!", ...).

use client_frontend_core::view_model::ViewModel;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect, view_model: &ViewModel, theme: &RatatuiTheme) {
    let paragraph = match view_model.feedback {
        Some(feedback) => {
            Paragraph::new(feedback.text()).style(theme.tone(feedback.tone()))
        }
        None if view_model.is_rolling() => {
            Paragraph::new("Rolling...").style(theme.disabled())
        }
        None => Paragraph::new(""),
    };

    frame.render_widget(
        paragraph
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL)),
        area,
    );
}
