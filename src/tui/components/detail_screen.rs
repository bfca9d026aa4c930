//! # Detail Screen
//!
//! The second screen of a `lista` stack, initialized with the tapped
//! child's full payload. The child decides its own presentation: a
//! `webview` child renders as embedded content, anything else as a
//! generic name + description body. Children never nest another list.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::menu::ChildItem;
use crate::core::resolver::{self, ScreenKind};
use crate::tui::component::Component;
use crate::tui::components::EmbeddedScreen;

/// # Props
///
/// - `item`: the tapped child, unchanged from the list that produced it
/// - `back_hint`: whether the header advertises back navigation (policy)
pub struct DetailScreen<'a> {
    pub item: &'a ChildItem,
    pub back_hint: bool,
}

impl Component for DetailScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut title_spans = vec![Span::styled(
            self.item.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if self.back_hint {
            title_spans.push(Span::styled(
                "  (Esc: back)",
                Style::default().fg(Color::DarkGray),
            ));
        }

        let [title_area, body_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);
        frame.render_widget(Paragraph::new(Line::from(title_spans)), title_area);

        match resolver::resolve_child(self.item) {
            ScreenKind::EmbeddedContent => {
                EmbeddedScreen::new(self.item.url.as_deref()).render(frame, body_area);
            }
            _ => {
                let width = body_area.width.saturating_sub(1).max(1) as usize;
                let lines: Vec<Line> =
                    textwrap::wrap(self.item.description.as_deref().unwrap_or_default(), width)
                        .into_iter()
                        .map(|wrapped| Line::from(wrapped.into_owned()))
                        .collect();
                frame.render_widget(Paragraph::new(lines), body_area);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(item: &ChildItem, back_hint: bool) -> String {
        let backend = TestBackend::new(60, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let mut screen = DetailScreen { item, back_hint };
                screen.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_generic_child_shows_description() {
        let item = ChildItem {
            name: "Item B".to_string(),
            kind: None,
            url: None,
            description: Some("Second item".to_string()),
        };
        let text = render_to_text(&item, true);
        assert!(text.contains("Item B"));
        assert!(text.contains("Second item"));
        assert!(text.contains("(Esc: back)"));
    }

    #[test]
    fn test_webview_child_shows_embedded_source() {
        let item = ChildItem {
            name: "Doc".to_string(),
            kind: Some("webview".to_string()),
            url: Some("https://example.org/doc".to_string()),
            description: None,
        };
        let text = render_to_text(&item, true);
        assert!(text.contains("Embedded Content"));
        assert!(text.contains("https://example.org/doc"));
    }

    #[test]
    fn test_back_hint_policy_off() {
        let item = ChildItem {
            name: "Item".to_string(),
            kind: None,
            url: None,
            description: None,
        };
        let text = render_to_text(&item, false);
        assert!(!text.contains("(Esc: back)"));
    }
}
