//! Widgets composing the table screen. Each exposes `render(frame, area, ...)`.
pub mod arena;
pub mod banner;
pub mod controls;
pub mod footer;
pub mod header;
pub mod history;
pub mod messages;
pub mod rules;
