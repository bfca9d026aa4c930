//! # TabBar Component
//!
//! Bottom bar listing the tab-group destinations, one active at a time.
//! Stateless: tab titles and the active index are props.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Tabs;

use crate::tui::component::Component;

pub struct TabBar {
    pub titles: Vec<String>,
    pub active: usize,
    pub accent: Color,
}

impl TabBar {
    pub fn new(titles: Vec<String>, active: usize, accent: Color) -> Self {
        Self {
            titles,
            active,
            accent,
        }
    }
}

impl Component for TabBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.titles.is_empty() {
            return;
        }
        let tabs = Tabs::new(self.titles.clone())
            .select(self.active)
            .style(Style::default().fg(Color::DarkGray))
            .highlight_style(
                Style::default()
                    .fg(self.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .divider("│");
        frame.render_widget(tabs, area);
    }
}
