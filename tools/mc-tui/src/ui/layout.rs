//! Frame orchestration.
//!
//! Screens behind the sidebar:
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  MAID CONNECT  /dashboard                          [Q]uit       │
//! ├────────────────────────┬────────────────────────────────────────┤
//! │  Ana                   │  SCREEN                                │
//! │  Verified Member       │                                        │
//! ├────────────────────────┤                                        │
//! │  [1] Home              │                                        │
//! │  ...                   │                                        │
//! └────────────────────────┴────────────────────────────────────────┘
//! │  per-screen key hints                                           │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//! Landing and auth take the whole frame.

use mc_01_lifecycle::{Clock, LifecycleApi};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::{App, DashboardView, Route};

use super::{screens, sidebar, widgets};

/// Render the entire UI.
pub fn render<C: Clock>(frame: &mut Frame, app: &App<C>) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(10),
        Constraint::Length(3),
    ])
    .areas(frame.area());

    render_header(frame, header, app);

    if app.route.has_sidebar() {
        let [left, right] =
            Layout::horizontal([Constraint::Length(28), Constraint::Min(40)]).areas(body);
        sidebar::render(frame, left, app.route, app.store.state().user());
        render_screen(frame, right, app);
    } else {
        render_screen(frame, body, app);
    }

    render_footer(frame, footer, app);

    if let Some(id) = app.detail.as_deref() {
        let view = DashboardView::build(app.store.state(), app.store.config());
        if let Some(row) = view.rows.iter().find(|row| row.request.id == id) {
            widgets::render_request_modal(frame, row);
        }
    }
    if let Some(message) = app.alert.as_deref() {
        widgets::render_alert(frame, message);
    }
}

fn render_screen<C: Clock>(frame: &mut Frame, area: Rect, app: &App<C>) {
    match app.route {
        Route::Landing => screens::landing::render(frame, area),
        Route::Auth => screens::auth::render(frame, area, &app.auth_form, app.busy),
        Route::Dashboard => screens::dashboard::render(frame, area, app),
        Route::ActiveSessions => screens::sessions::render(frame, area, app),
        Route::FindMaids => screens::find_maids::render(frame, area),
        Route::Profile => screens::profile::render(frame, area, &app.profile_form, app.busy),
    }
}

fn render_header<C: Clock>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let mut spans = vec![
        Span::styled(
            " MAID CONNECT ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("v{} ", crate::VERSION),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(app.route.path(), Style::default().fg(Color::Yellow)),
    ];
    if app.busy {
        spans.push(Span::styled("  working...", Style::default().fg(Color::Magenta)));
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(header, area);
}

fn hint(key: &'static str, label: &'static str) -> [Span<'static>; 2] {
    [
        Span::styled(key, Style::default().fg(Color::Yellow)),
        Span::raw(label),
    ]
}

fn render_footer<C: Clock>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let hints: Vec<[Span<'static>; 2]> = match app.route {
        Route::Landing => vec![hint("[Enter]", " Continue  "), hint("[Q]", " Quit  ")],
        Route::Auth => vec![
            hint("[Tab]", " Next field  "),
            hint("[Enter]", " Submit  "),
            hint("[F2]", " Sign in / Sign up  "),
            hint("[Esc]", " Back  "),
        ],
        Route::Profile => vec![
            hint("[Tab]", " Next field  "),
            hint("[Enter]", " Save Profile  "),
            hint("[Esc]", " Dashboard  "),
        ],
        Route::Dashboard if app.detail.is_some() => vec![
            hint("[A]", " Accept  "),
            hint("[R]", " Reject  "),
            hint("[Esc]", " Close  "),
        ],
        Route::Dashboard => vec![
            hint("[1-4]", " Menu  "),
            hint("[↑↓]", " Select  "),
            hint("[Enter]", " More Info  "),
            hint("[A]", " Accept  "),
            hint("[R]", " Reject  "),
            hint("[Q]", " Quit  "),
        ],
        Route::ActiveSessions => vec![
            hint("[1-4]", " Menu  "),
            hint("[↑↓]", " Select  "),
            hint("[C]", " Cancel Session  "),
            hint("[Q]", " Quit  "),
        ],
        Route::FindMaids => vec![hint("[1-4]", " Menu  "), hint("[Q]", " Quit  ")],
    };

    let footer = Paragraph::new(Line::from(hints.into_iter().flatten().collect::<Vec<_>>()))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .centered();
    frame.render_widget(footer, area);
}
