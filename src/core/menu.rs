//! # Menu Model
//!
//! Typed, immutable view over the remote JSON configuration. Field names on
//! the wire are what the backend sends (including `descrição`); the structs
//! use idiomatic names with serde renames.
//!
//! Deserialization is deliberately permissive: an entry with an unknown or
//! missing `type` is still a valid [`MenuItem`] — the resolver degrades it
//! to the generic screen instead of failing the whole load.

use serde::Deserialize;

/// Global presentation settings, wire key `app`.
///
/// Created exactly once per session from a successful fetch and never
/// mutated afterward.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    /// Accent color as a `#RRGGBB` string.
    #[serde(rename = "corGeral", default)]
    pub accent_color: Option<String>,
    /// Logo image reference for the drawer header.
    #[serde(rename = "logoIconeApp", default)]
    pub logo_url: Option<String>,
    /// Application title shown in the drawer header and title bar.
    #[serde(rename = "titleSite", default)]
    pub title: Option<String>,
}

/// One navigational entry from either menu list.
///
/// `name` doubles as the routing key within its containing list; the
/// builder does not deduplicate names.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MenuItem {
    pub name: String,
    /// Raw kind tag from the wire (`webview`, `lista`, or anything else).
    /// Interpretation happens in [`crate::core::resolver`].
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Identifier for the icon-rendering collaborator.
    #[serde(default)]
    pub icon: Option<String>,
    /// External content source, present when `type == "webview"`.
    #[serde(default)]
    pub url: Option<String>,
    /// Child items, present when `type == "lista"`.
    #[serde(default)]
    pub items: Option<Vec<ChildItem>>,
    /// Free-form descriptive text for the generic screen.
    #[serde(rename = "descrição", default)]
    pub description: Option<String>,
}

impl MenuItem {
    /// The item's children, or an empty slice when the payload has none.
    pub fn children(&self) -> &[ChildItem] {
        self.items.as_deref().unwrap_or_default()
    }
}

/// A minimal item descriptor inside a `lista` payload.
///
/// Children carry a name plus whatever detail fields the backend includes.
/// There is only one level of nesting: a child always resolves to the
/// embedded or generic detail screen, never to another list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChildItem {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(rename = "descrição", default)]
    pub description: Option<String>,
}

/// The full remote configuration: global settings plus the two ordered
/// menu lists.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RemoteConfig {
    pub app: AppConfig,
    #[serde(rename = "menulateral", default)]
    pub lateral: Vec<MenuItem>,
    #[serde(rename = "menubottom", default)]
    pub bottom: Vec<MenuItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_wire_format_parses() {
        let body = r##"{
            "app": {
                "corGeral": "#0a64c2",
                "logoIconeApp": "https://example.org/logo.png",
                "titleSite": "Portos Privados"
            },
            "menulateral": [
                {
                    "name": "News",
                    "type": "lista",
                    "icon": "newspaper-o",
                    "descrição": "Latest updates",
                    "items": [
                        { "name": "Item A", "descrição": "First" },
                        { "name": "Item B", "type": "webview", "url": "https://example.org/b" }
                    ]
                }
            ],
            "menubottom": [
                { "name": "Home", "type": "generic", "icon": "home", "descrição": "Welcome" },
                { "name": "Site", "type": "webview", "icon": "globe", "url": "https://example.org" }
            ]
        }"##;

        let config: RemoteConfig = serde_json::from_str(body).unwrap();
        assert_eq!(config.app.title.as_deref(), Some("Portos Privados"));
        assert_eq!(config.app.accent_color.as_deref(), Some("#0a64c2"));
        assert_eq!(config.lateral.len(), 1);
        assert_eq!(config.bottom.len(), 2);

        let news = &config.lateral[0];
        assert_eq!(news.kind.as_deref(), Some("lista"));
        assert_eq!(news.children().len(), 2);
        assert_eq!(news.children()[1].url.as_deref(), Some("https://example.org/b"));
        assert_eq!(news.description.as_deref(), Some("Latest updates"));
    }

    #[test]
    fn test_unknown_kind_is_preserved_not_rejected() {
        let item: MenuItem =
            serde_json::from_str(r#"{ "name": "X", "type": "carousel" }"#).unwrap();
        assert_eq!(item.kind.as_deref(), Some("carousel"));
    }

    #[test]
    fn test_minimal_item_parses() {
        // Only name is required; everything else is kind-specific payload.
        let item: MenuItem = serde_json::from_str(r#"{ "name": "Bare" }"#).unwrap();
        assert_eq!(item.name, "Bare");
        assert!(item.kind.is_none());
        assert!(item.icon.is_none());
        assert!(item.children().is_empty());
    }

    #[test]
    fn test_missing_menus_default_to_empty() {
        let config: RemoteConfig = serde_json::from_str(r#"{ "app": {} }"#).unwrap();
        assert!(config.lateral.is_empty());
        assert!(config.bottom.is_empty());
        assert!(config.app.title.is_none());
    }

    #[test]
    fn test_missing_app_settings_is_an_error() {
        // A response without the app object is malformed, not a partial load.
        let result = serde_json::from_str::<RemoteConfig>(r#"{ "menubottom": [] }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_child_item_keeps_detail_fields() {
        let child: ChildItem = serde_json::from_str(
            r#"{ "name": "Doc", "type": "webview", "url": "https://example.org/doc" }"#,
        )
        .unwrap();
        assert_eq!(child.kind.as_deref(), Some("webview"));
        assert_eq!(child.url.as_deref(), Some("https://example.org/doc"));
        assert!(child.description.is_none());
    }
}
