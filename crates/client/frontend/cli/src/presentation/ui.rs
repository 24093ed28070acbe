//! UI rendering using the widget modules and the ViewModel.
//!
//! This module provides the main render entry point that composes all widgets
//! to create the complete terminal UI.
use anyhow::Result;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::{
    presentation::{terminal::Tui, theme::RatatuiTheme, widgets},
    state::{AppMode, AppState},
};
use client_frontend_core::{message::MessageLog, view_model::ViewModel};

/// Rendering context containing all state and configuration needed for UI rendering.
pub struct RenderContext<'a> {
    pub view_model: &'a ViewModel,
    pub messages: &'a MessageLog,
    pub app_state: &'a AppState,
    pub message_panel_height: u16,
}

/// Render the table, with the rules overlay on top when it is open.
pub fn render_with_view_model(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    let theme = RatatuiTheme::new();

    terminal.draw(|frame| {
        render_table(frame, ctx, &theme);

        if ctx.app_state.mode == AppMode::Rules {
            let area = centered_rect(70, 70, frame.area());
            widgets::rules::render(frame, area, ctx.view_model, &theme);
        }
    })?;

    Ok(())
}

fn render_table(frame: &mut ratatui::Frame, ctx: &RenderContext, theme: &RatatuiTheme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                        // Header
            Constraint::Length(3),                        // Feedback banner
            Constraint::Min(7),                           // Arena
            Constraint::Length(5),                        // Wager controls
            Constraint::Length(3),                        // History ribbon
            Constraint::Length(ctx.message_panel_height), // Round log
            Constraint::Length(1),                        // Footer
        ])
        .split(frame.area());

    widgets::header::render(frame, chunks[0], ctx.view_model, theme);
    widgets::banner::render(frame, chunks[1], ctx.view_model, theme);
    widgets::arena::render(frame, chunks[2], ctx.view_model, theme);
    widgets::controls::render(frame, chunks[3], ctx.view_model, ctx.app_state, theme);
    widgets::history::render(frame, chunks[4], ctx.view_model, theme);

    // Borders take two lines.
    let visible = ctx.message_panel_height.saturating_sub(2) as usize;
    widgets::messages::render(frame, chunks[5], ctx.messages, visible, theme);

    widgets::footer::render(frame, chunks[6], ctx.app_state, theme);
}

/// Create a centered rectangle for modal overlays.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
