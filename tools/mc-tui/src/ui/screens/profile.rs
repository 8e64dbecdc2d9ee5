//! Profile settings screen.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::domain::{ProfileField, ProfileForm};

use super::auth::input_line;
use super::titled;

/// Render the profile form.
pub fn render(frame: &mut Frame, area: Rect, form: &ProfileForm, busy: bool) {
    let focused = form.focused();
    let mut text = vec![
        Line::from(Span::styled(
            "Complete your profile to start receiving requests",
            Style::default().fg(Color::DarkGray),
        )),
        Line::raw(""),
    ];

    for field in ProfileField::ALL {
        let value = form.value(field);
        let shown = if value.is_empty() && field != focused {
            field.placeholder().to_string()
        } else {
            value.to_string()
        };
        text.push(input_line(field.label(), shown, field == focused));
    }

    text.push(Line::raw(""));
    let submit = if busy {
        Span::styled("Saving...", Style::default().fg(Color::Magenta))
    } else if form.is_valid() {
        Span::styled(
            "[Enter] Save Profile",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            "[Enter] Save Profile (fill in every field)",
            Style::default().fg(Color::DarkGray),
        )
    };
    text.push(Line::from(submit));

    frame.render_widget(Paragraph::new(text).block(titled(" Profile Settings ")), area);
}
