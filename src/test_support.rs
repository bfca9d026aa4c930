//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;

use crate::core::menu::RemoteConfig;
use crate::core::nav::NavPolicy;
use crate::core::session::App;
use crate::fetch::{ConfigSource, FetchError};

/// An in-memory source that always yields the same configuration.
pub struct StaticConfigSource {
    config: RemoteConfig,
}

impl StaticConfigSource {
    pub fn new(config: RemoteConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ConfigSource for StaticConfigSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch(&self) -> Result<RemoteConfig, FetchError> {
        Ok(self.config.clone())
    }
}

/// A source that always fails with a network error.
pub struct FailingConfigSource;

#[async_trait]
impl ConfigSource for FailingConfigSource {
    fn name(&self) -> &str {
        "failing"
    }

    async fn fetch(&self) -> Result<RemoteConfig, FetchError> {
        Err(FetchError::Network("connection refused".to_string()))
    }
}

/// A representative remote configuration, parsed from wire-format JSON so
/// tests exercise the serde renames too.
pub fn sample_remote_config() -> RemoteConfig {
    serde_json::from_str(
        r##"{
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
                        { "name": "Item A", "descrição": "First item" },
                        { "name": "Item B", "type": "webview", "url": "https://example.org/b" }
                    ]
                },
                { "name": "Contact", "icon": "envelope", "descrição": "Reach us" }
            ],
            "menubottom": [
                { "name": "Home", "type": "generic", "icon": "home", "descrição": "Welcome" },
                { "name": "Site", "type": "webview", "icon": "globe", "url": "https://example.org" }
            ]
        }"##,
    )
    .expect("sample config is valid")
}

/// Creates a test App with the default navigation policy.
pub fn test_app() -> App {
    App::new(NavPolicy::default())
}

/// Creates a test App already in the `Ready` state for the sample config.
pub fn ready_app() -> App {
    use crate::core::session::{Action, update};
    let mut app = test_app();
    update(&mut app, Action::FetchStarted);
    update(&mut app, Action::ConfigLoaded(sample_remote_config()));
    app
}
