//! Dashboard: banners and the pending request list.

use mc_01_lifecycle::{Clock, LifecycleApi};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::domain::dashboard::short_date;
use crate::domain::{App, DashboardView, RequestRow};
use crate::ui::widgets::control;

use super::titled;

/// Render the dashboard.
pub fn render<C: Clock>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let view = DashboardView::build(app.store.state(), app.store.config());

    let banner_height = if view.banners.is_empty() { 0 } else { 4 };
    let [banner_area, list_area] =
        Layout::vertical([Constraint::Length(banner_height), Constraint::Min(5)]).areas(area);

    if let Some(banner) = view.banners.first() {
        let color = if banner.title == "Verification Pending" {
            Color::Yellow
        } else {
            Color::Red
        };
        let paragraph = Paragraph::new(Line::from(vec![
            Span::styled(
                format!("{}: ", banner.title),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::raw(banner.message.clone()),
        ]))
        .wrap(Wrap { trim: true })
        .block(titled(" ! ").border_style(Style::default().fg(color)));
        frame.render_widget(paragraph, banner_area);
    }

    let block = titled(" Dashboard · Manage your client requests and opportunities ");
    if view.rows.is_empty() {
        let empty = Paragraph::new(vec![
            Line::raw(""),
            Line::from(Span::styled(
                "No New Requests",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Check back later for new opportunities",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .centered()
        .block(block);
        frame.render_widget(empty, list_area);
        return;
    }

    let items: Vec<ListItem> = view
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| request_item(row, i == app.selected_request))
        .collect();
    frame.render_widget(List::new(items).block(block), list_area);
}

fn request_item<'a>(row: &RequestRow<'a>, selected: bool) -> ListItem<'a> {
    let request = row.request;
    let mut controls = control("Enter", "More Info", true);
    controls.extend(control("A", "Accept", row.can_accept));
    controls.extend(control("R", "Reject", row.can_reject));

    let lines = vec![
        Line::from(vec![
            Span::styled(
                request.client_name.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("   Posted {}", short_date(request.date_posted)),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(vec![
            Span::raw(format!("{} · {} rooms · ", request.area, request.rooms)),
            Span::styled(
                format!("${}", request.payment_offered),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(
            request
                .tasks
                .iter()
                .map(|task| Span::styled(format!("[{task}] "), Style::default().fg(Color::Blue)))
                .collect::<Vec<_>>(),
        ),
        Line::from(Span::styled(
            request.requirements.as_str(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(controls),
        Line::raw(""),
    ];

    let style = if selected {
        Style::default().bg(Color::DarkGray)
    } else {
        Style::default()
    };
    ListItem::new(lines).style(style)
}
