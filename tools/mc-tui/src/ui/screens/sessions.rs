//! Active sessions screen.

use mc_01_lifecycle::{Clock, LifecycleApi};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

use crate::domain::sessions::long_date;
use crate::domain::{App, SessionRow, SessionsView, StatusTone};
use crate::ui::widgets::control;

use super::titled;

fn tone_color(tone: StatusTone) -> Color {
    match tone {
        StatusTone::Green => Color::Green,
        StatusTone::Blue => Color::Blue,
        StatusTone::Red => Color::Red,
    }
}

/// Render the sessions list.
pub fn render<C: Clock>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let view = SessionsView::build(app.store.state(), app.store.config());
    let title = format!(" Active Sessions ({}) ", view.header);

    if view.rows.is_empty() {
        let empty = Paragraph::new(vec![
            Line::raw(""),
            Line::from(Span::styled(
                "No Active Sessions",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Your accepted requests will appear here",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .centered()
        .block(titled(&title));
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = view
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| session_item(row, i == app.selected_session))
        .collect();
    frame.render_widget(List::new(items).block(titled(&title)), area);
}

fn session_item<'a>(row: &SessionRow<'a>, selected: bool) -> ListItem<'a> {
    let session = row.session;
    let mut header = vec![
        Span::styled(
            session.client_name.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!(" {} ", session.status.label()),
            Style::default().fg(Color::Black).bg(tone_color(row.tone)),
        ),
        Span::raw("  "),
    ];
    if row.can_cancel {
        header.extend(control("C", "Cancel", true));
    }

    let lines = vec![
        Line::from(header),
        Line::from(vec![
            Span::styled("Start Date ", Style::default().fg(Color::DarkGray)),
            Span::raw(format!("{:<20}", long_date(session.start_date))),
            Span::styled("End Date ", Style::default().fg(Color::DarkGray)),
            Span::raw(format!("{:<20}", long_date(session.end_date))),
            Span::styled("Payment ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("${}", session.payment_amount),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::raw(""),
    ];

    let style = if selected {
        Style::default().bg(Color::DarkGray)
    } else {
        Style::default()
    };
    ListItem::new(lines).style(style)
}
