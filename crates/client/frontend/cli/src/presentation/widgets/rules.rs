//! "HOW TO PLAY" overlay.

use client_frontend_core::view_model::ViewModel;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::presentation::theme::{GOLD, RatatuiTheme};

pub fn render(frame: &mut Frame, area: Rect, view_model: &ViewModel, theme: &RatatuiTheme) {
    let lines = vec![
        Line::from("You and Bober each roll two dice. Higher sum wins."),
        Line::from(""),
        Line::from("Win: you take your wager from Bober."),
        Line::from("Lose: Bober takes your wager."),
        Line::from("Tie: nobody pays."),
        Line::from(""),
        Line::styled(
            format!(
                "Boxcars (6+6): you win {}x your wager!",
                view_model.critical_multiplier
            ),
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            "Snake eyes (1+1): Bober bites your whole balance.",
            theme.highlight(client_frontend_core::Highlight::Wipeout),
        ),
        Line::from(""),
        Line::from("Go broke and Bober refills your pile after a moment."),
    ];

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" HOW TO PLAY "));

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
