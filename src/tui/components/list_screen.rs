//! # List Screen
//!
//! The first screen of a `lista` stack: the entry's name and description
//! above a selectable list of child items. Selecting a row emits
//! [`ListEvent::Open`] with the row index; the shell routes that index
//! through `route_list_tap` to initialize the detail screen.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};

use crate::core::menu::ChildItem;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the list screen.
#[derive(Debug, Clone, PartialEq)]
pub enum ListEvent {
    /// A row was selected; the index is valid for the displayed list.
    Open(usize),
}

/// Cursor state for the active list screen. Reset whenever the shell
/// navigates to a different destination.
pub struct ListScreenState {
    len: usize,
    pub cursor: usize,
    list: ListState,
}

impl ListScreenState {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            cursor: 0,
            list: ListState::default(),
        }
    }
}

impl EventHandler for ListScreenState {
    type Event = ListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::CursorUp => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown => {
                if self.cursor + 1 < self.len {
                    self.cursor += 1;
                }
                None
            }
            TuiEvent::Select => {
                // The cursor can only point inside the displayed list, so
                // the emitted index is valid by construction.
                (self.len > 0).then_some(ListEvent::Open(self.cursor))
            }
            _ => None,
        }
    }
}

/// # Props
///
/// - `name` / `description`: the list entry's own payload, shown as header
/// - `items`: the child items, in wire order
/// - `accent`: highlight color for the selected row
pub struct ListScreen<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub items: &'a [ChildItem],
    pub accent: Color,
    pub state: &'a mut ListScreenState,
}

impl Component for ListScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = area.width.saturating_sub(2).max(1) as usize;

        let mut header_lines = vec![Line::from(Span::styled(
            self.name.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ))];
        if let Some(description) = self.description {
            for wrapped in textwrap::wrap(description, width) {
                header_lines.push(Line::from(wrapped.into_owned()));
            }
        }
        header_lines.push(Line::default());

        let [header_area, list_area] = Layout::vertical([
            Constraint::Length(header_lines.len() as u16),
            Constraint::Min(0),
        ])
        .areas(area);

        frame.render_widget(Paragraph::new(header_lines), header_area);

        let rows: Vec<ListItem> = self
            .items
            .iter()
            .map(|item| ListItem::new(item.name.clone()))
            .collect();
        let list = List::new(rows)
            .highlight_style(
                Style::default()
                    .fg(self.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        self.state.list.select(Some(self.state.cursor));
        frame.render_stateful_widget(list, list_area, &mut self.state.list);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn child(name: &str) -> ChildItem {
        ChildItem {
            name: name.to_string(),
            kind: None,
            url: None,
            description: None,
        }
    }

    #[test]
    fn test_cursor_stays_within_bounds() {
        let mut state = ListScreenState::new(2);

        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.cursor, 0);

        state.handle_event(&TuiEvent::CursorDown);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.cursor, 1, "cursor must stop at the last item");
    }

    #[test]
    fn test_select_emits_open_with_cursor_index() {
        let mut state = ListScreenState::new(3);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(
            state.handle_event(&TuiEvent::Select),
            Some(ListEvent::Open(1))
        );
    }

    #[test]
    fn test_select_on_empty_list_emits_nothing() {
        let mut state = ListScreenState::new(0);
        assert_eq!(state.handle_event(&TuiEvent::Select), None);
    }

    #[test]
    fn test_render_shows_header_and_items() {
        use ratatui::Terminal;
        use ratatui::backend::TestBackend;

        let backend = TestBackend::new(40, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let items = vec![child("Item A"), child("Item B")];
        let mut state = ListScreenState::new(items.len());
        state.handle_event(&TuiEvent::CursorDown);

        terminal
            .draw(|f| {
                let mut screen = ListScreen {
                    name: "News",
                    description: Some("Latest updates"),
                    items: &items,
                    accent: Color::Cyan,
                    state: &mut state,
                };
                screen.render(f, f.area());
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("News"));
        assert!(text.contains("Latest updates"));
        assert!(text.contains("Item A"));
        assert!(text.contains("> Item B"));
    }
}
