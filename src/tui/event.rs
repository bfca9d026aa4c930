use crossterm::event::{self, Event, KeyCode, KeyModifiers};

/// TUI-specific input events
pub enum TuiEvent {
    // Session-level actions (passed to core::update)
    ForceQuit, // Ctrl+C
    Quit,      // 'q'

    // Navigation events (handled by the shell)
    ToggleDrawer, // 'm' opens/closes the drawer panel
    NextTab,      // Tab / Right
    PrevTab,      // BackTab / Left
    CursorUp,
    CursorDown,
    Select, // Enter - activate drawer entry or open list item
    Back,   // Esc / Backspace - pop the detail screen, close the drawer
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if event::poll(timeout).unwrap() {
        match event::read().unwrap() {
            Event::Key(key_event) => {
                log::debug!(
                    "Key event: {:?} with modifiers {:?}",
                    key_event.code,
                    key_event.modifiers
                );
                match (key_event.modifiers, key_event.code) {
                    (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                    (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
                    (_, KeyCode::Char('m')) => Some(TuiEvent::ToggleDrawer),
                    (_, KeyCode::Tab) => Some(TuiEvent::NextTab),
                    (_, KeyCode::BackTab) => Some(TuiEvent::PrevTab),
                    (_, KeyCode::Right) => Some(TuiEvent::NextTab),
                    (_, KeyCode::Left) => Some(TuiEvent::PrevTab),
                    (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
                    (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
                    (_, KeyCode::Enter) => Some(TuiEvent::Select),
                    (_, KeyCode::Esc) => Some(TuiEvent::Back),
                    (_, KeyCode::Backspace) => Some(TuiEvent::Back),
                    _ => None,
                }
            }
            Event::Resize(_, _) => Some(TuiEvent::Resize),
            _ => None,
        }
    } else {
        None
    }
}
