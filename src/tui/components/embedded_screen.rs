//! # Embedded Content Screen
//!
//! Renders external content by reference: the screen shows the source URL
//! rather than the content itself, which belongs to an external rendering
//! collaborator. A missing URL is not an error — the screen simply shows
//! an empty source placeholder.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::tui::component::Component;

pub struct EmbeddedScreen<'a> {
    pub url: Option<&'a str>,
}

impl<'a> EmbeddedScreen<'a> {
    pub fn new(url: Option<&'a str>) -> Self {
        Self { url }
    }
}

impl Component for EmbeddedScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered().title("Embedded Content");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let source_line = match self.url {
            Some(url) if !url.is_empty() => Line::from(Span::styled(
                url.to_string(),
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::UNDERLINED),
            )),
            _ => Line::from(Span::styled(
                "(no content source)",
                Style::default().fg(Color::DarkGray),
            )),
        };

        let lines = vec![
            source_line,
            Line::from(Span::styled(
                "external content rendered by reference",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let [text_area] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(inner);
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            text_area,
        );
    }
}
