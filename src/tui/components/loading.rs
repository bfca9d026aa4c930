//! # Loading Screen
//!
//! Shown while the one-shot configuration fetch is in flight. The only
//! feedback during this phase is the spinner; if the fetch fails the
//! spinner simply disappears and the session stays on a neutral screen.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct LoadingScreen {
    frame_index: usize,
}

impl LoadingScreen {
    pub fn new(frame_index: usize) -> Self {
        Self { frame_index }
    }
}

impl Component for LoadingScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let spinner = SPINNER_FRAMES[self.frame_index % SPINNER_FRAMES.len()];

        let lines = vec![
            Line::from(Span::styled(
                format!("{spinner} Loading configuration"),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "portico",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let [text_area] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);

        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            text_area,
        );
    }
}
