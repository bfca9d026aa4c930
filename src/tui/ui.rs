use crate::core::nav::{DrawerEntry, NavEntry, NavPolicy, NavigationTree, ScreenBinding};
use crate::core::session::{App, Session};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    DetailScreen, Drawer, EmbeddedScreen, GenericScreen, ListScreen, LoadingScreen, TabBar,
    TitleBar, accent_color,
};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Color;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    match &app.session {
        Session::Uninitialized | Session::Loading => {
            LoadingScreen::new(spinner_frame).render(frame, frame.area());
        }
        // Terminal failure renders nothing beyond the neutral empty state;
        // the reason lives in the log file.
        Session::Failed => {}
        Session::Ready(tree) => draw_shell(frame, tree, &app.policy, tui),
    }
}

fn draw_shell(frame: &mut Frame, tree: &NavigationTree, policy: &NavPolicy, tui: &mut TuiState) {
    let accent = accent_color(tree.header.accent_color.as_deref());
    let show_tabs = tui.active_entry == 0;

    let (title_area, main_area, tab_area) = if show_tabs {
        let [title, main, tabs] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(frame.area());
        (title, main, Some(tabs))
    } else {
        let [title, main] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(frame.area());
        (title, main, None)
    };

    let entry = super::active_entry(tree, tui);
    let location = entry.map(|e| e.name.clone()).unwrap_or_default();
    TitleBar::new(tree.header.title.clone(), location, accent).render(frame, title_area);

    if let Some(entry) = entry {
        draw_entry(frame, main_area, entry, policy, tui, accent);
    }

    if let (Some(tab_area), Some(DrawerEntry::Tabs { group, .. })) =
        (tab_area, tree.entries.first())
    {
        let titles = group.tabs.iter().map(|t| t.name.clone()).collect();
        TabBar::new(titles, tui.active_tab, accent).render(frame, tab_area);
    }

    if let Some(state) = &mut tui.drawer {
        let mut drawer = Drawer {
            header: &tree.header,
            state,
        };
        drawer.render(frame, frame.area());
    }
}

fn draw_entry(
    frame: &mut Frame,
    area: Rect,
    entry: &NavEntry,
    policy: &NavPolicy,
    tui: &mut TuiState,
    accent: Color,
) {
    match &entry.binding {
        ScreenBinding::Embedded { url } => {
            EmbeddedScreen::new(url.as_deref()).render(frame, area);
        }
        ScreenBinding::Generic { description } => {
            let mut screen = GenericScreen {
                name: &entry.name,
                description: description.as_deref(),
                state: &mut tui.generic,
            };
            screen.render(frame, area);
        }
        ScreenBinding::ListStack { description, items } => {
            if let Some(index) = tui.detail {
                let item = crate::core::nav::route_list_tap(items, index);
                let mut screen = DetailScreen {
                    item,
                    back_hint: policy.detail_back_hint,
                };
                screen.render(frame, area);
            } else {
                let mut screen = ListScreen {
                    name: &entry.name,
                    description: description.as_deref(),
                    items,
                    accent,
                    state: &mut tui.list,
                };
                screen.render(frame, area);
            }
        }
    }
}
