//! One renderer per route.

pub mod auth;
pub mod dashboard;
pub mod find_maids;
pub mod landing;
pub mod profile;
pub mod sessions;

use ratatui::{
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};

/// Bordered block with a cyan title, shared by all screens.
pub(crate) fn titled(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
}
