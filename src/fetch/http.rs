//! HTTP source: a single GET against the configured endpoint, expecting
//! the JSON body described in [`crate::core::menu`]. No authentication,
//! no pagination.

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::core::menu::RemoteConfig;
use crate::fetch::source::{ConfigSource, FetchError};

/// Production configuration source backed by reqwest.
pub struct HttpConfigSource {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpConfigSource {
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ConfigSource for HttpConfigSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch(&self) -> Result<RemoteConfig, FetchError> {
        info!("Fetching configuration from {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        debug!("Configuration response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Configuration endpoint error: {} - {}", status, err_body);
            return Err(FetchError::Api {
                status,
                message: err_body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let config: RemoteConfig =
            serde_json::from_str(&body).map_err(|e| FetchError::Parse(e.to_string()))?;

        info!(
            "Configuration loaded: {} lateral items, {} bottom items",
            config.lateral.len(),
            config.bottom.len()
        );
        Ok(config)
    }
}
