//! UI module - TUI rendering components.
//!
//! - `layout.rs`: frame orchestration (header, sidebar, body, footer)
//! - `sidebar.rs`: user badge + navigation
//! - `screens/`: one renderer per route
//! - `widgets/`: alert and request-detail overlays

mod layout;
mod sidebar;

pub mod screens;
pub mod widgets;

pub use layout::render;
