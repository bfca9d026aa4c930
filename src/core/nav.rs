//! # Navigation Tree Builder
//!
//! Consumes the remote configuration and produces the full navigation
//! tree: a root drawer whose first entry is the bottom-menu tab group,
//! followed by one drawer entry per lateral item. List-kind entries expand
//! into a two-screen stack (list → item detail).
//!
//! The tree is a pure description. It is rebuilt from scratch whenever the
//! configuration loads and never patched in place; rendering it belongs to
//! the host.

use crate::core::menu::{AppConfig, ChildItem, MenuItem};
use crate::core::resolver::{self, ScreenKind};

/// Drawer-root naming and back-navigation policy.
///
/// The deployed variants of this shell differed only in the fixed label of
/// the drawer's tab-group entry and in whether detail screens advertise a
/// back control; both collapse into this one configurable policy.
#[derive(Debug, Clone, PartialEq)]
pub struct NavPolicy {
    /// Label of the fixed first drawer entry holding the tab group.
    pub home_label: String,
    /// Whether detail screens show a back hint in their header.
    pub detail_back_hint: bool,
}

impl Default for NavPolicy {
    fn default() -> Self {
        Self {
            home_label: "Home".to_string(),
            detail_back_hint: true,
        }
    }
}

/// Initial parameters for a bound screen: the originating item's payload.
///
/// Binding happens at construction time and never inspects the payload,
/// only the kind tag — a `webview` item without a `url` binds fine and the
/// embedded renderer receives an empty source.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenBinding {
    /// Single embedded-content screen.
    Embedded { url: Option<String> },
    /// Two-screen stack: the list itself, then a detail screen for the
    /// tapped child.
    ListStack {
        description: Option<String>,
        items: Vec<ChildItem>,
    },
    /// Single generic name + description screen.
    Generic { description: Option<String> },
}

/// One destination in a tab group or drawer, keyed by the item's name.
#[derive(Debug, Clone, PartialEq)]
pub struct NavEntry {
    pub name: String,
    pub icon: Option<String>,
    pub binding: ScreenBinding,
}

/// The bottom-menu destinations, one tab per item, in input order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TabGroup {
    pub tabs: Vec<NavEntry>,
}

/// Drawer header content, straight from the global app settings.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawerHeader {
    pub title: String,
    pub logo_url: Option<String>,
    pub accent_color: Option<String>,
}

/// One entry in the root drawer.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawerEntry {
    /// The fixed first entry: the bottom-menu tab group.
    Tabs { label: String, group: TabGroup },
    /// One entry per lateral-menu item, bound the same way tabs are.
    Item(NavEntry),
}

impl DrawerEntry {
    /// Display label of this entry in the drawer panel.
    pub fn label(&self) -> &str {
        match self {
            DrawerEntry::Tabs { label, .. } => label,
            DrawerEntry::Item(entry) => &entry.name,
        }
    }

    /// Icon identifier, if the underlying item carries one.
    pub fn icon(&self) -> Option<&str> {
        match self {
            DrawerEntry::Tabs { .. } => None,
            DrawerEntry::Item(entry) => entry.icon.as_deref(),
        }
    }
}

/// The whole derived navigation structure.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationTree {
    pub header: DrawerHeader,
    /// Root drawer entries; the tab group is always first.
    pub entries: Vec<DrawerEntry>,
}

fn bind(item: &MenuItem) -> NavEntry {
    let binding = match resolver::resolve(item) {
        ScreenKind::EmbeddedContent => ScreenBinding::Embedded {
            url: item.url.clone(),
        },
        ScreenKind::ListWithDetail => ScreenBinding::ListStack {
            description: item.description.clone(),
            items: item.children().to_vec(),
        },
        ScreenKind::Generic => ScreenBinding::Generic {
            description: item.description.clone(),
        },
    };
    NavEntry {
        name: item.name.clone(),
        icon: item.icon.clone(),
        binding,
    }
}

/// Binds every bottom-menu item as a tab, in input order, keyed by name.
/// Duplicate names are an upstream bug; no deduplication happens here.
pub fn build_tabs(bottom: &[MenuItem]) -> TabGroup {
    TabGroup {
        tabs: bottom.iter().map(bind).collect(),
    }
}

/// Produces the root drawer: the tab group first under the policy's home
/// label, then one entry per lateral item in input order.
pub fn build_drawer(
    config: &AppConfig,
    policy: &NavPolicy,
    lateral: &[MenuItem],
    tabs: TabGroup,
) -> NavigationTree {
    let header = DrawerHeader {
        title: config.title.clone().unwrap_or_default(),
        logo_url: config.logo_url.clone(),
        accent_color: config.accent_color.clone(),
    };

    let mut entries = Vec::with_capacity(lateral.len() + 1);
    entries.push(DrawerEntry::Tabs {
        label: policy.home_label.clone(),
        group: tabs,
    });
    entries.extend(lateral.iter().map(|item| DrawerEntry::Item(bind(item))));

    NavigationTree { header, entries }
}

/// Pure lookup of the tapped child; the detail screen is then initialized
/// with the returned item's full payload.
///
/// # Panics
///
/// Panics if `index` is out of bounds. The index always originates from
/// enumerating the same list being displayed, so an out-of-range value is
/// a caller bug, not a recoverable runtime condition.
pub fn route_list_tap(items: &[ChildItem], index: usize) -> &ChildItem {
    &items[index]
}
