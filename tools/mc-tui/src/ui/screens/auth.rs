//! Auth screen.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::domain::{AuthField, AuthForm, AuthMode};
use crate::ui::widgets::centered_rect;

use super::titled;

/// One labelled input line. Shared with the profile screen.
pub(crate) fn input_line<'a>(label: &'a str, value: String, focused: bool) -> Line<'a> {
    let marker = if focused { "▸ " } else { "  " };
    let value_style = if focused {
        Style::default().fg(Color::White).add_modifier(Modifier::UNDERLINED)
    } else {
        Style::default()
    };
    Line::from(vec![
        Span::styled(marker, Style::default().fg(Color::Yellow)),
        Span::styled(format!("{label:<22}"), Style::default().fg(Color::Gray)),
        Span::styled(value, value_style),
        Span::styled(if focused { "█" } else { "" }, Style::default().fg(Color::Yellow)),
    ])
}

/// Render the auth form.
pub fn render(frame: &mut Frame, area: Rect, form: &AuthForm, busy: bool) {
    let inner = centered_rect(70, 70, area);
    let (title, submit) = match form.mode {
        AuthMode::SignIn => (" Sign In ", "Sign In"),
        AuthMode::SignUp => (" Create Account ", "Sign Up"),
    };

    let focused = form.focused();
    let mut text = vec![
        Line::from(Span::styled(
            "Welcome to Maid Connect",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(Span::styled(
            "for Domestic Help",
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center),
        Line::raw(""),
    ];

    for &field in form.fields() {
        let value = match field {
            AuthField::Password => "•".repeat(form.password.chars().count()),
            AuthField::IdProof if form.id_proof.is_empty() => "No file chosen".to_string(),
            other => form.value(other).to_string(),
        };
        text.push(input_line(field.label(), value, field == focused));
    }

    text.push(Line::raw(""));
    let submit_line = if busy {
        Line::from(Span::styled(
            if form.mode == AuthMode::SignUp { "Uploading..." } else { "Signing in..." },
            Style::default().fg(Color::Magenta),
        ))
    } else {
        let style = if form.is_ready() {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Line::from(Span::styled(format!("[Enter] {submit}"), style))
    };
    text.push(submit_line.alignment(Alignment::Center));

    frame.render_widget(Paragraph::new(text).block(titled(title)), inner);
}
