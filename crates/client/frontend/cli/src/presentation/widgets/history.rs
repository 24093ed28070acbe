//! History ribbon: one coloured marker per recent round, newest first.

use client_frontend_core::{format::format_signed, view_model::ViewModel};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect, view_model: &ViewModel, theme: &RatatuiTheme) {
    let line = if view_model.history.is_empty() {
        Line::styled("ROLL TO START", theme.disabled())
    } else {
        let spans: Vec<_> = view_model
            .history
            .iter()
            .flat_map(|marker| {
                [
                    Span::styled(
                        format!("● {}", format_signed(marker.balance_delta)),
                        theme.highlight(marker.highlight),
                    ),
                    Span::raw("  "),
                ]
            })
            .collect();
        Line::from(spans)
    };

    let paragraph =
        Paragraph::new(line).block(Block::default().borders(Borders::ALL).title(" HISTORY "));

    frame.render_widget(paragraph, area);
}
