//! Wager field, potential wins and the quick-set keys.

use client_frontend_core::{
    format::{CURRENCY, format_logs},
    view_model::ViewModel,
};
use game_core::QuickBet;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    presentation::theme::{GOLD, RatatuiTheme},
    state::{AppMode, AppState},
};

pub fn render(
    frame: &mut Frame,
    area: Rect,
    view_model: &ViewModel,
    app_state: &AppState,
    theme: &RatatuiTheme,
) {
    let locked = view_model.wager_locked();

    let wager = match &app_state.mode {
        AppMode::EditingWager(input) => Span::styled(
            format!("[{}_]", input.as_str()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        _ => Span::styled(
            format!("{} {CURRENCY}", format_logs(view_model.wager)),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    };

    let wager_line = Line::from(vec![
        Span::raw("Wager: "),
        wager,
        Span::raw("   win "),
        Span::styled(
            format!("+{}", format_logs(view_model.potential_win())),
            Style::default().fg(Color::Green),
        ),
        Span::raw("  boxcars "),
        Span::styled(
            format!("+{}", format_logs(view_model.boxcars_win())),
            Style::default().fg(GOLD),
        ),
    ]);

    let mut buttons = Vec::with_capacity(QuickBet::ALL.len() * 2 + 1);
    for (index, bet) in QuickBet::ALL.into_iter().enumerate() {
        let style = if locked {
            theme.disabled()
        } else {
            theme.key_hint()
        };
        buttons.push(Span::styled(format!("[{}] {}", index + 1, bet.label()), style));
        buttons.push(Span::raw("  "));
    }
    buttons.push(Span::styled(
        "[e] type",
        if locked {
            theme.disabled()
        } else {
            theme.key_hint()
        },
    ));

    let title = if locked { " WAGER (locked) " } else { " WAGER " };
    let paragraph = Paragraph::new(vec![wager_line, Line::from(""), Line::from(buttons)])
        .block(Block::default().borders(Borders::ALL).title(title));

    frame.render_widget(paragraph, area);
}
