//! # Drawer Component
//!
//! The slide-out panel listing top-level destinations: the tab group
//! first, then one row per lateral-menu item. Rendered as an overlay on
//! the left edge, sized to its widest row.
//!
//! The drawer header carries the remote app identity: title, logo
//! reference, and accent color all come from the fetched app settings.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::nav::DrawerHeader;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::accent_color;
use crate::tui::event::TuiEvent;

/// High-level events emitted by the drawer.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawerEvent {
    /// A destination was selected (index into the drawer's entries).
    Activate(usize),
    /// The drawer was closed without selecting anything.
    Dismiss,
}

/// One selectable row: the entry's display label plus its icon identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawerRow {
    pub label: String,
    pub icon: Option<String>,
}

/// Cursor state for the open drawer. `None` in `TuiState` means closed.
pub struct DrawerState {
    rows: Vec<DrawerRow>,
    pub cursor: usize,
}

impl DrawerState {
    /// Opens the drawer with the cursor on the given entry.
    pub fn new(rows: Vec<DrawerRow>, cursor: usize) -> Self {
        let cursor = cursor.min(rows.len().saturating_sub(1));
        Self { rows, cursor }
    }

    pub fn rows(&self) -> &[DrawerRow] {
        &self.rows
    }
}

impl EventHandler for DrawerState {
    type Event = DrawerEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::CursorUp => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown => {
                if self.cursor + 1 < self.rows.len() {
                    self.cursor += 1;
                }
                None
            }
            TuiEvent::Select => {
                if self.rows.is_empty() {
                    Some(DrawerEvent::Dismiss)
                } else {
                    Some(DrawerEvent::Activate(self.cursor))
                }
            }
            TuiEvent::Back | TuiEvent::ToggleDrawer => Some(DrawerEvent::Dismiss),
            _ => None,
        }
    }
}

/// The drawer panel itself.
///
/// # Props
///
/// - `header`: remote app identity for the header block
/// - `state`: the open drawer's rows and cursor
pub struct Drawer<'a> {
    pub header: &'a DrawerHeader,
    pub state: &'a mut DrawerState,
}

impl Drawer<'_> {
    /// Panel width: widest row or header line plus borders and padding.
    fn panel_width(&self) -> u16 {
        let widest_row = self
            .state
            .rows
            .iter()
            .map(|row| row.label.width() + 4) // "> " prefix + side padding
            .max()
            .unwrap_or(0);
        let header_width = self.header.title.width() + 2;
        (widest_row.max(header_width).max(16) + 2) as u16
    }
}

impl Component for Drawer<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let accent = accent_color(self.header.accent_color.as_deref());
        let width = self.panel_width().min(area.width);
        let panel = Rect {
            x: area.x,
            y: area.y,
            width,
            height: area.height,
        };

        let mut lines = Vec::new();
        if let Some(logo) = &self.header.logo_url {
            lines.push(Line::from(Span::styled(
                format!("⌂ {logo}"),
                Style::default().fg(Color::DarkGray),
            )));
            lines.push(Line::default());
        }
        for (index, row) in self.state.rows.iter().enumerate() {
            let selected = index == self.state.cursor;
            let marker = if selected { "> " } else { "  " };
            let mut spans = vec![Span::raw(marker.to_string())];
            spans.push(Span::raw(row.label.clone()));
            if let Some(icon) = &row.icon {
                spans.push(Span::styled(
                    format!("  [{icon}]"),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            let style = if selected {
                Style::default().fg(accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            lines.push(Line::from(spans).style(style));
        }

        let block = Block::bordered()
            .title(self.header.title.clone())
            .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
            .border_style(Style::default().fg(accent));

        frame.render_widget(Clear, panel);
        frame.render_widget(Paragraph::new(lines).block(block), panel);
    }
}
