//! # TUI Host
//!
//! The ratatui-specific layer: it owns the terminal, renders whatever the
//! session state machine says, and translates keyboard events into either
//! core actions (quit) or navigation over the built tree.
//!
//! This is the only module that knows about ratatui and crossterm. The
//! core never learns which host renders it.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (configuration loading): draws every ~80ms so the
//!   spinner stays smooth.
//! - **Idle** (session terminal, no input): sleeps up to 500ms and only
//!   redraws on events.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::sync::{Arc, mpsc};

use crate::core::config::ResolvedConfig;
use crate::core::nav::{DrawerEntry, NavEntry, NavigationTree, ScreenBinding};
use crate::core::session::{Action, App, Effect, Session, update};
use crate::fetch::{ConfigSource, HttpConfigSource};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    DrawerEvent, DrawerRow, DrawerState, GenericScreenState, ListEvent, ListScreenState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic).
///
/// This is the navigation runtime: which drawer entry and tab are active,
/// whether a detail screen is pushed on the list stack, and the per-screen
/// cursor/scroll state. All of it derives from user interaction over an
/// immutable tree; none of it survives a session.
pub struct TuiState {
    /// Index into the tree's drawer entries (0 = the tab group).
    pub active_entry: usize,
    /// Active tab inside the tab group, meaningful when `active_entry == 0`.
    pub active_tab: usize,
    /// Pushed detail screen: index of the tapped child, `None` = list shown.
    pub detail: Option<usize>,
    /// Cursor state for the active list screen.
    pub list: ListScreenState,
    /// Scroll state for the active generic screen.
    pub generic: GenericScreenState,
    /// Drawer overlay (`None` = closed).
    pub drawer: Option<DrawerState>,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            active_entry: 0,
            active_tab: 0,
            detail: None,
            list: ListScreenState::new(0),
            generic: GenericScreenState::new(),
            drawer: None,
        }
    }

    /// Drops all per-screen runtime state when navigating elsewhere.
    fn reset_screen(&mut self, list_len: usize) {
        self.detail = None;
        self.list = ListScreenState::new(list_len);
        self.generic = GenericScreenState::new();
    }
}

/// The entry whose screen currently fills the main area.
fn active_entry<'t>(tree: &'t NavigationTree, tui: &TuiState) -> Option<&'t NavEntry> {
    match tree.entries.get(tui.active_entry)? {
        DrawerEntry::Tabs { group, .. } => group.tabs.get(tui.active_tab),
        DrawerEntry::Item(entry) => Some(entry),
    }
}

fn list_len(entry: Option<&NavEntry>) -> usize {
    match entry.map(|e| &e.binding) {
        Some(ScreenBinding::ListStack { items, .. }) => items.len(),
        _ => 0,
    }
}

/// Switches to a drawer entry and resets per-screen state for it.
fn activate(tui: &mut TuiState, tree: &NavigationTree, entry_index: usize) {
    tui.active_entry = entry_index;
    tui.active_tab = 0;
    let len = list_len(active_entry(tree, tui));
    tui.reset_screen(len);
}

/// Routes one event through the navigation runtime while the session is
/// `Ready`. Pure tree traversal: nothing here mutates the tree.
fn handle_navigation(tui: &mut TuiState, tree: &NavigationTree, event: &TuiEvent) {
    // The open drawer captures every event first.
    if let Some(drawer) = &mut tui.drawer {
        if let Some(drawer_event) = drawer.handle_event(event) {
            match drawer_event {
                DrawerEvent::Activate(index) => {
                    debug!("drawer: activate entry {}", index);
                    activate(tui, tree, index);
                    tui.drawer = None;
                }
                DrawerEvent::Dismiss => tui.drawer = None,
            }
        }
        return;
    }

    match event {
        TuiEvent::ToggleDrawer => {
            let rows = tree
                .entries
                .iter()
                .map(|entry| DrawerRow {
                    label: entry.label().to_string(),
                    icon: entry.icon().map(str::to_string),
                })
                .collect();
            tui.drawer = Some(DrawerState::new(rows, tui.active_entry));
        }
        TuiEvent::NextTab | TuiEvent::PrevTab => {
            if tui.active_entry == 0
                && let Some(DrawerEntry::Tabs { group, .. }) = tree.entries.first()
                && !group.tabs.is_empty()
            {
                let len = group.tabs.len();
                tui.active_tab = match event {
                    TuiEvent::NextTab => (tui.active_tab + 1) % len,
                    _ => (tui.active_tab + len - 1) % len,
                };
                let list = list_len(active_entry(tree, tui));
                tui.reset_screen(list);
            }
        }
        TuiEvent::Back => {
            // Pop the detail screen back to its list; otherwise a no-op.
            if tui.detail.is_some() {
                tui.detail = None;
            }
        }
        TuiEvent::CursorUp | TuiEvent::CursorDown | TuiEvent::Select => {
            let Some(entry) = active_entry(tree, tui) else {
                return;
            };
            match &entry.binding {
                ScreenBinding::ListStack { .. } if tui.detail.is_none() => {
                    if let Some(ListEvent::Open(index)) = tui.list.handle_event(event) {
                        debug!("list: open item {}", index);
                        tui.detail = Some(index);
                    }
                }
                ScreenBinding::Generic { .. } => match event {
                    TuiEvent::CursorUp => tui.generic.scroll_up(),
                    TuiEvent::CursorDown => tui.generic.scroll_down(),
                    _ => {}
                },
                _ => {}
            }
        }
        _ => {}
    }
}

/// Builds the production source and runs the shell.
pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source: Arc<dyn ConfigSource> = Arc::new(HttpConfigSource::new(config.endpoint.clone()));
    run_with_source(config, source)
}

/// Runs the shell against any configuration source. The fetch is issued
/// exactly once; its outcome arrives through the action channel.
pub fn run_with_source(
    config: ResolvedConfig,
    source: Arc<dyn ConfigSource>,
) -> std::io::Result<()> {
    let mut app = App::new(config.policy.clone());
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();

    // Channel for actions from the background fetch
    let (tx, rx) = mpsc::channel();
    update(&mut app, Action::FetchStarted);
    spawn_fetch(source, tx);

    // Animation timer
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let animating = !app.session.is_terminal();
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            let spinner_frame = (elapsed * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            if matches!(event, TuiEvent::ForceQuit | TuiEvent::Quit) {
                if update(&mut app, Action::Quit) == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            // Everything else is navigation, which needs a built tree
            if let Session::Ready(tree) = &app.session {
                handle_navigation(&mut tui, tree, &event);
            }
        }

        if should_quit {
            break;
        }

        // Handle the background fetch outcome
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let was_ready = matches!(app.session, Session::Ready(_));
            if update(&mut app, action) == Effect::Quit {
                should_quit = true;
            }
            // On the Loading -> Ready transition, land on the first tab
            if !was_ready && let Session::Ready(tree) = &app.session {
                activate(&mut tui, tree, 0);
            }
        }
        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

fn spawn_fetch(source: Arc<dyn ConfigSource>, tx: mpsc::Sender<Action>) {
    info!("Spawning configuration fetch ({})", source.name());
    tokio::spawn(async move {
        let action = match source.fetch().await {
            Ok(config) => Action::ConfigLoaded(config),
            Err(e) => Action::FetchFailed(e.to_string()),
        };
        if tx.send(action).is_err() {
            warn!("Failed to deliver fetch outcome: receiver dropped");
        }
    });
}
