//! Find-maids placeholder.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::titled;

/// Render the placeholder.
pub fn render(frame: &mut Frame, area: Rect) {
    let text = vec![
        Line::raw(""),
        Line::from(Span::styled(
            "Coming Soon!",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::raw(
            "We are working hard to bring you this feature. Soon you will be able to find \
             trusted maids near your location.",
        ),
    ];
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(titled(" Find Maids Near You "));
    frame.render_widget(paragraph, area);
}
