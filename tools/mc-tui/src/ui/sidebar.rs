//! Sidebar: user badge + navigation.
//!
//! ```text
//! ┌──────────────────────┐
//! │  Ana                 │
//! │  Verified Member     │
//! ├──────────────────────┤
//! │  [1] Home            │
//! │  [2] Active Sessions │
//! │  [3] Paid Leave ...  │
//! │  [4] Profile       ! │
//! └──────────────────────┘
//! ```

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use shared_types::VerificationStatus;

use crate::domain::sidebar::{display_name, status_caption};
use crate::domain::{Route, NAV_ITEMS};

/// Render the sidebar for the current route and user.
pub fn render(frame: &mut Frame, area: Rect, route: Route, user: Option<&shared_types::User>) {
    let [badge_area, nav_area] =
        Layout::vertical([Constraint::Length(4), Constraint::Min(6)]).areas(area);

    let caption_color = match user.map(|u| u.status) {
        Some(VerificationStatus::Pending) => Color::Yellow,
        Some(VerificationStatus::Approved) => Color::Green,
        _ => Color::DarkGray,
    };
    let badge = Paragraph::new(vec![
        Line::from(Span::styled(
            display_name(user),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            status_caption(user),
            Style::default().fg(caption_color),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(badge, badge_area);

    let needs_profile = user.is_some_and(|u| u.status == VerificationStatus::Pending);
    let items: Vec<ListItem> = NAV_ITEMS
        .iter()
        .map(|item| {
            let active = item.route == Some(route);
            let mut spans = vec![
                Span::styled(
                    format!("[{}] ", item.hotkey),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw(item.label),
            ];
            if !item.is_enabled() {
                spans.push(Span::styled(
                    " (Coming Soon)",
                    Style::default().fg(Color::DarkGray),
                ));
            }
            if item.route == Some(Route::Profile) && needs_profile {
                spans.push(Span::styled(" !", Style::default().fg(Color::Yellow)));
            }

            let style = if active {
                Style::default()
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD)
            } else if !item.is_enabled() {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(spans)).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" MENU ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(list, nav_area);
}
