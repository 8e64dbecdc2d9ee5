//! Landing screen.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::widgets::centered_rect;

/// Render the landing screen.
pub fn render(frame: &mut Frame, area: Rect) {
    let inner = centered_rect(60, 50, area);
    let text = vec![
        Line::raw(""),
        Line::from(vec![
            Span::raw("Welcome to "),
            Span::styled(
                "Maid Connect",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::raw(""),
        Line::from(Span::styled(
            "The Art of Effortless Living",
            Style::default().fg(Color::DarkGray),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            "[Enter] Continue →",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Cyan)));
    frame.render_widget(paragraph, inner);
}
