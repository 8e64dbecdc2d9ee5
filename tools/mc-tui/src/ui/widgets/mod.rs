//! Reusable overlay widgets.

mod alert;
mod request_modal;

pub use alert::render_alert;
pub use request_modal::render_request_modal;
pub(crate) use request_modal::control;

use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// Rectangle of the given percentage size, centred in `area`.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);

    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}
