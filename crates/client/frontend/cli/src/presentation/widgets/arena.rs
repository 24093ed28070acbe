//! Both pairs of dice side by side, with the round's winner marked.

use client_frontend_core::view_model::ViewModel;
use game_core::{DicePair, Die, Side};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

const DIE_GLYPHS: [&str; 6] = ["⚀", "⚁", "⚂", "⚃", "⚄", "⚅"];

pub fn render(frame: &mut Frame, area: Rect, view_model: &ViewModel, theme: &RatatuiTheme) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_side(frame, columns[0], view_model, Side::Player, theme);
    render_side(frame, columns[1], view_model, Side::Opponent, theme);
}

fn render_side(
    frame: &mut Frame,
    area: Rect,
    view_model: &ViewModel,
    side: Side,
    theme: &RatatuiTheme,
) {
    let (name, dice) = match side {
        Side::Player => ("YOU", view_model.player_dice),
        Side::Opponent => ("BOBER", view_model.opponent_dice),
    };

    let mut title = format!(" {name} ");
    if let Some(indicator) = view_model.winner_indicator(side) {
        title = format!(" {name} {indicator} ");
    }

    let dice_style = match view_model.phase.outcome() {
        Some(outcome) if view_model.round_winner() == Some(side) => {
            theme.highlight(outcome.into()).add_modifier(Modifier::BOLD)
        }
        _ if view_model.is_rolling() => theme.disabled(),
        _ => Style::default(),
    };

    let mut lines = vec![
        Line::from(""),
        Line::styled(dice_glyphs(dice), dice_style),
        Line::from(format!(
            "{} + {} = {}",
            dice.first,
            dice.second,
            dice.sum()
        )),
    ];
    if let Some((frame_no, total)) = view_model.tumble {
        lines.push(Line::styled(format!("tumbling {frame_no}/{total}"), theme.disabled()));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(title));

    frame.render_widget(paragraph, area);
}

fn die_glyph(die: Die) -> &'static str {
    usize::from(die.face())
        .checked_sub(1)
        .and_then(|index| DIE_GLYPHS.get(index))
        .copied()
        .unwrap_or("?")
}

fn dice_glyphs(dice: DicePair) -> String {
    format!("{}  {}", die_glyph(dice.first), die_glyph(dice.second))
}
