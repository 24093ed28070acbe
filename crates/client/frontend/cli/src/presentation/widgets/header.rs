//! Header widget displaying the balance, streak and Bober's mood.

use client_frontend_core::{format::{CURRENCY, format_logs}, view_model::ViewModel};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::{GOLD, RatatuiTheme};

/// Render the header panel.
///
/// Displays the mascot, balance with thousands separators, and the streak
/// badge from two wins in a row.
pub fn render(frame: &mut Frame, area: Rect, view_model: &ViewModel, _theme: &RatatuiTheme) {
    let mut spans = vec![
        Span::raw(format!("{} ", view_model.mascot())),
        Span::raw("Balance: "),
        Span::styled(
            format!("{} {CURRENCY}", format_logs(view_model.balance)),
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
        ),
    ];

    if view_model.show_streak_badge() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("🔥 {} WIN STREAK", view_model.streak),
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" LUCKY BOBER "));

    frame.render_widget(paragraph, area);
}
