//! # Generic Screen
//!
//! The fallback renderer: a static screen showing only a name and
//! description. Every menu entry whose kind is unknown, missing, or
//! explicitly generic lands here, so the screen must tolerate an entirely
//! empty payload. Long descriptions scroll.

use ratatui::Frame;
use ratatui::layout::{Rect, Size};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::tui::component::Component;

/// Scroll position for the active generic screen. Reset whenever the
/// shell navigates to a different destination.
#[derive(Default)]
pub struct GenericScreenState {
    pub scroll: ScrollViewState,
}

impl GenericScreenState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll_up(&mut self) {
        self.scroll.scroll_up();
    }

    pub fn scroll_down(&mut self) {
        self.scroll.scroll_down();
    }
}

/// # Props
///
/// - `name`: the entry's display label
/// - `description`: free-form text; `None` renders a blank body
pub struct GenericScreen<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub state: &'a mut GenericScreenState,
}

impl Component for GenericScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1).max(1);

        let mut lines = vec![
            Line::from(Span::styled(
                self.name.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::default(),
        ];
        for wrapped in textwrap::wrap(
            self.description.unwrap_or_default(),
            content_width as usize,
        ) {
            lines.push(Line::from(wrapped.into_owned()));
        }

        let content_height = (lines.len() as u16).max(1);
        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        scroll_view.render_widget(
            Paragraph::new(lines),
            Rect::new(0, 0, content_width, content_height),
        );

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(name: &str, description: Option<&str>) -> String {
        let backend = TestBackend::new(40, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = GenericScreenState::new();
        terminal
            .draw(|f| {
                let mut screen = GenericScreen {
                    name,
                    description,
                    state: &mut state,
                };
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
    fn test_renders_name_and_description() {
        let text = render_to_text("About", Some("Who we are"));
        assert!(text.contains("About"));
        assert!(text.contains("Who we are"));
    }

    #[test]
    fn test_renders_blank_body_without_description() {
        // A malformed entry degrades to an essentially blank screen.
        let text = render_to_text("Mystery", None);
        assert!(text.contains("Mystery"));
    }

    #[test]
    fn test_long_description_wraps() {
        let long = "word ".repeat(80);
        let text = render_to_text("Wrapped", Some(&long));
        assert!(text.contains("Wrapped"));
        assert!(text.contains("word"));
    }

    #[test]
    fn test_scroll_state_moves() {
        use ratatui::layout::Position;

        let mut state = GenericScreenState::new();
        state.scroll.set_offset(Position::new(0, 5));
        state.scroll_up();
        assert_eq!(state.scroll.offset(), Position::new(0, 4));
        state.scroll_up();
        assert_eq!(state.scroll.offset(), Position::new(0, 3));
    }
}
