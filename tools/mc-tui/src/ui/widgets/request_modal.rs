//! Request detail modal.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::domain::RequestRow;

use super::centered_rect;

fn heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().add_modifier(Modifier::BOLD)))
}

/// Control hint, dimmed when disabled.
pub(crate) fn control(key: &'static str, label: &'static str, enabled: bool) -> Vec<Span<'static>> {
    let (key_style, label_style) = if enabled {
        (Style::default().fg(Color::Yellow), Style::default())
    } else {
        (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::DarkGray),
        )
    };
    vec![
        Span::styled(format!("[{key}]"), key_style),
        Span::styled(format!(" {label}  "), label_style),
    ]
}

/// Render the detail modal for one request.
pub fn render_request_modal(frame: &mut Frame, row: &RequestRow<'_>) {
    let area = centered_rect(70, 80, frame.area());
    frame.render_widget(Clear, area);

    let request = row.request;
    let mut controls = control("A", "Accept Request", row.can_accept);
    controls.extend(control("R", "Reject Request", row.can_reject));
    controls.extend(control("Esc", "Close", true));

    let text = vec![
        heading("Client"),
        Line::raw(request.client_name.clone()),
        Line::raw(""),
        Line::from(vec![
            Span::styled("Location  ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!("{:<16}", request.area)),
            Span::styled("Rooms  ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(request.rooms.to_string()),
        ]),
        Line::from(vec![
            Span::styled("Payment   ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("{:<16}", format!("${}", request.payment_offered)),
                Style::default().fg(Color::Green),
            ),
            Span::styled("Duration  ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(request.duration.clone()),
        ]),
        Line::raw(""),
        heading("Services Required"),
        Line::from(
            request
                .tasks
                .iter()
                .map(|task| Span::styled(format!(" {task} "), Style::default().fg(Color::Blue)))
                .collect::<Vec<_>>(),
        ),
        Line::raw(""),
        heading("Requirements"),
        Line::raw(request.requirements.clone()),
        Line::raw(""),
        Line::from(controls),
    ];

    let paragraph = Paragraph::new(text).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" Request Details ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(paragraph, area);
}
