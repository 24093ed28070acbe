//! Footer with key hints for the current mode.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    presentation::theme::RatatuiTheme,
    state::{AppMode, AppState},
};

pub fn render(frame: &mut Frame, area: Rect, app_state: &AppState, theme: &RatatuiTheme) {
    let hints: &[(&str, &str)] = match app_state.mode {
        AppMode::Normal => &[
            ("space", "roll"),
            ("1-5", "quick bet"),
            ("e", "type wager"),
            ("?", "rules"),
            ("q", "quit"),
        ],
        AppMode::Rules => &[("?/esc", "close"), ("q", "quit")],
        AppMode::EditingWager(_) => &[("0-9", "digits"), ("enter", "set"), ("esc", "cancel")],
    };

    let spans: Vec<_> = hints
        .iter()
        .flat_map(|(key, label)| {
            [
                Span::styled(format!(" {key} "), theme.key_hint()),
                Span::raw(format!("{label}  ")),
            ]
        })
        .collect();

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
