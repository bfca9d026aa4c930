//! # Screen Resolver
//!
//! Maps a menu item's declared kind to the renderer capability that will
//! host it. This is a total function: every input, including malformed or
//! missing-kind items, yields a result. A garbled menu entry degrades to a
//! blank informational screen instead of aborting navigation construction.

use crate::core::menu::{ChildItem, MenuItem};

/// Wire tag for embedded external content.
pub const KIND_WEBVIEW: &str = "webview";
/// Wire tag for a collection of sub-items with per-item detail screens.
pub const KIND_LIST: &str = "lista";

/// The closed set of renderer capabilities a menu entry can bind to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    /// External content rendered by reference (URL).
    EmbeddedContent,
    /// A selectable collection nested above a detail screen.
    ListWithDetail,
    /// Static name + description screen; the fallback for everything else.
    Generic,
}

/// Resolves a top-level menu item. Unknown and missing kinds fall through
/// to [`ScreenKind::Generic`] — the explicit default arm, not an error path.
pub fn resolve(item: &MenuItem) -> ScreenKind {
    match item.kind.as_deref() {
        Some(KIND_WEBVIEW) => ScreenKind::EmbeddedContent,
        Some(KIND_LIST) => ScreenKind::ListWithDetail,
        _ => ScreenKind::Generic,
    }
}

/// Resolves a tapped child for the detail screen.
///
/// Lists nest only one level deep, so a child is either embedded content
/// or a generic detail — never [`ScreenKind::ListWithDetail`].
pub fn resolve_child(child: &ChildItem) -> ScreenKind {
    match child.kind.as_deref() {
        Some(KIND_WEBVIEW) => ScreenKind::EmbeddedContent,
        _ => ScreenKind::Generic,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(kind: Option<&str>) -> MenuItem {
        MenuItem {
            name: "entry".to_string(),
            kind: kind.map(str::to_string),
            icon: None,
            url: None,
            items: None,
            description: None,
        }
    }

    #[test]
    fn test_webview_resolves_to_embedded_content() {
        assert_eq!(resolve(&item(Some("webview"))), ScreenKind::EmbeddedContent);
    }

    #[test]
    fn test_lista_resolves_to_list_with_detail() {
        assert_eq!(resolve(&item(Some("lista"))), ScreenKind::ListWithDetail);
    }

    #[test]
    fn test_unknown_kind_defaults_to_generic() {
        assert_eq!(resolve(&item(Some("generic"))), ScreenKind::Generic);
        assert_eq!(resolve(&item(Some("carousel"))), ScreenKind::Generic);
        assert_eq!(resolve(&item(Some(""))), ScreenKind::Generic);
    }

    #[test]
    fn test_missing_kind_defaults_to_generic() {
        assert_eq!(resolve(&item(None)), ScreenKind::Generic);
    }

    #[test]
    fn test_child_never_resolves_to_a_list() {
        let webview = ChildItem {
            name: "c".to_string(),
            kind: Some("webview".to_string()),
            url: None,
            description: None,
        };
        let nested_list = ChildItem {
            name: "c".to_string(),
            kind: Some("lista".to_string()),
            url: None,
            description: None,
        };
        let bare = ChildItem {
            name: "c".to_string(),
            kind: None,
            url: None,
            description: None,
        };

        assert_eq!(resolve_child(&webview), ScreenKind::EmbeddedContent);
        assert_eq!(resolve_child(&nested_list), ScreenKind::Generic);
        assert_eq!(resolve_child(&bare), ScreenKind::Generic);
    }
}
