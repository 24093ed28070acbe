//! Ratatui colours for tones, outcomes and log levels.

use client_frontend_core::{message::MessageLevel, view_model::Highlight};
use ratatui::style::{Color, Modifier, Style};
use runtime::FeedbackTone;

/// Gold used for boxcars and the balance.
pub const GOLD: Color = Color::Rgb(255, 200, 40);

/// Ratatui-specific theme.
///
/// This provides consistent color schemes and styling rules for the CLI.
#[derive(Clone, Copy, Debug, Default)]
pub struct RatatuiTheme;

impl RatatuiTheme {
    pub fn new() -> Self {
        Self
    }

    pub fn tone(&self, tone: FeedbackTone) -> Style {
        let color = match tone {
            FeedbackTone::Success => Color::Green,
            FeedbackTone::Danger => Color::Red,
            FeedbackTone::Jackpot => GOLD,
            FeedbackTone::Neutral => Color::Blue,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    pub fn highlight(&self, highlight: Highlight) -> Style {
        let color = match highlight {
            Highlight::Jackpot => GOLD,
            Highlight::Win => Color::Green,
            Highlight::Wipeout => Color::Magenta,
            Highlight::Loss => Color::Red,
            Highlight::Push => Color::Blue,
        };
        Style::default().fg(color)
    }

    pub fn message(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Success => Style::default().fg(Color::Green),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
            MessageLevel::Error => Style::default().fg(Color::LightRed),
        }
    }

    /// Greyed out controls, e.g. wager keys while rolling.
    pub fn disabled(&self) -> Style {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM)
    }

    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }
}
