//! # TitleBar Component
//!
//! Single-line top bar showing the remote app title and the active
//! destination. Purely presentational: all three props come from the
//! caller, so the bar renders whatever it is given.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

/// Top status bar component.
///
/// # Props
///
/// - `title`: the remote `titleSite` value (may be empty)
/// - `location`: name of the active screen
/// - `accent`: the remote accent color, already parsed
pub struct TitleBar {
    pub title: String,
    pub location: String,
    pub accent: ratatui::style::Color,
}

impl TitleBar {
    pub fn new(title: String, location: String, accent: ratatui::style::Color) -> Self {
        Self {
            title,
            location,
            accent,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        if !self.title.is_empty() {
            spans.push(Span::styled(
                self.title.clone(),
                Style::default()
                    .fg(self.accent)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        if !self.location.is_empty() {
            if !spans.is_empty() {
                spans.push(Span::raw(" | "));
            }
            spans.push(Span::raw(self.location.clone()));
        }

        frame.render_widget(Line::from(spans), area);
    }
}
