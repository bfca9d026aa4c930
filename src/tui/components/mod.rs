//! # TUI Components
//!
//! All UI components for the terminal shell. Two patterns, following the
//! same split as the rest of the codebase:
//!
//! - **Stateless (props-based)**: `TitleBar`, `TabBar`, `LoadingScreen`,
//!   `EmbeddedScreen`, `DetailScreen` — receive everything they render as
//!   props and emit nothing.
//! - **Stateful (event-driven)**: `DrawerState`, `ListScreenState`,
//!   `GenericScreenState` — own cursor/scroll state and emit high-level
//!   events (`DrawerEvent`, `ListEvent`) that the shell routes.
//!
//! Each component file contains its state types, event types, rendering
//! logic, event handling, and tests. Components never read global state;
//! props come in from the caller, which keeps dependencies explicit and
//! the components testable against `TestBackend`.

use ratatui::style::Color;

mod detail_screen;
mod drawer;
mod embedded_screen;
mod generic_screen;
mod list_screen;
mod loading;
mod tab_bar;
mod title_bar;

pub use detail_screen::DetailScreen;
pub use drawer::{Drawer, DrawerEvent, DrawerRow, DrawerState};
pub use embedded_screen::EmbeddedScreen;
pub use generic_screen::{GenericScreen, GenericScreenState};
pub use list_screen::{ListEvent, ListScreen, ListScreenState};
pub use loading::LoadingScreen;
pub use tab_bar::TabBar;
pub use title_bar::TitleBar;

/// Maps the remote `corGeral` accent string (`#RRGGBB`) to a terminal
/// color. Anything unparseable falls back to the default accent, so a
/// malformed color degrades quietly instead of failing the render.
pub fn accent_color(hex: Option<&str>) -> Color {
    hex.and_then(parse_hex).unwrap_or(Color::Cyan)
}

fn parse_hex(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}
